#![warn(explicit_outlives_requirements)]
#![warn(missing_abi)]
#![deny(non_ascii_idents)]
#![warn(trivial_casts)]
#![warn(unreachable_pub)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
// Clippy
#![warn(clippy::pedantic, clippy::cargo)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::cargo_common_metadata)]
#![warn(
    clippy::allow_attributes_without_reason,
    clippy::as_conversions,
    clippy::clone_on_ref_ptr,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::deref_by_slicing,
    clippy::empty_structs_with_brackets,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::if_then_some_else_none,
    clippy::let_underscore_must_use,
    clippy::map_err_ignore,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::single_char_lifetime_names,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::todo,
    clippy::try_err,
    clippy::unseparated_literal_suffix,
    clippy::use_debug
)]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use parkmap::basemap::Basemap;
use parkmap::fetch::get_parks;
use parkmap::park::ParkCollection;
use parkmap::summary::DataSummary;
use yew::prelude::*;

pub mod leaflet;

mod control;
use control::{BasemapPicker, TimeSlider};

mod legend;
use legend::LegendControl;

mod panels;
use panels::{InfoPanels, Sidebar};

mod map;
use map::MapComponent;

// Use `wee_alloc` as the global allocator.
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

const DATA_URL: &str = "data/parks.geojson";
const LOAD_FAILURE_MESSAGE: &str = "There has been a problem loading the data.";
const SIDEBAR_AUTO_SHOW_MS: u32 = 500;

type ShouldRender = bool;

#[derive(Debug, PartialEq)]
pub struct State {
    /// None until the fetch resolves; until then the map is basemap-only.
    pub parks: Option<Rc<ParkCollection>>,
    pub summary: Option<DataSummary>,
    /// Slider position, an index into `summary.timestamps`.
    pub selected: usize,
    pub basemap: Basemap,
    pub sidebar_open: bool,
    /// Map panning; suppressed while the slider thumb is held.
    pub dragging: bool,
}

#[derive(Debug)]
pub enum Msg {
    DataLoaded(ParkCollection, DataSummary),
    DataFailed(String),
    BasemapSet(Basemap),
    TimestampSet(usize),
    SliderGrab,
    SliderRelease,
    SidebarShow,
    SidebarHide,
    SidebarToggle,
}

pub struct App {
    state: Rc<RefCell<State>>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let state = Rc::new(RefCell::new(State {
            parks: None,
            summary: None,
            selected: 0,
            basemap: Basemap::default(),
            sidebar_open: false,
            dragging: true,
        }));
        ctx.link().send_future(async {
            match get_parks(DATA_URL).await {
                Ok((parks, summary)) => Msg::DataLoaded(parks, summary),
                Err(e) => Msg::DataFailed(e.to_string()),
            }
        });
        Self { state }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> ShouldRender {
        log::trace!("Message: {:?}", msg);
        match msg {
            Msg::DataLoaded(parks, summary) => {
                log::debug!("loaded {} parks", parks.len());
                let mut state = self.state.borrow_mut();
                state.selected = 0;
                state.parks = Some(Rc::new(parks));
                state.summary = Some(summary);
                true
            },
            Msg::DataFailed(e) => {
                log::error!("loading park data failed: {e}");
                gloo_utils::window()
                    .alert_with_message(LOAD_FAILURE_MESSAGE)
                    .unwrap();
                false
            },
            Msg::BasemapSet(basemap) => {
                self.state.borrow_mut().basemap = basemap;
                true
            },
            Msg::TimestampSet(index) => {
                self.state.borrow_mut().selected = index;
                true
            },
            Msg::SliderGrab => {
                let mut state = self.state.borrow_mut();
                if state.dragging {
                    state.dragging = false;
                    true
                } else {
                    false
                }
            },
            // fires on every document mouseup; only the first one after a
            // grab changes anything
            Msg::SliderRelease => {
                let mut state = self.state.borrow_mut();
                if state.dragging {
                    false
                } else {
                    state.dragging = true;
                    true
                }
            },
            Msg::SidebarShow => {
                let mut state = self.state.borrow_mut();
                if state.sidebar_open {
                    false
                } else {
                    state.sidebar_open = true;
                    log::info!("sidebar shown");
                    true
                }
            },
            Msg::SidebarHide => {
                let mut state = self.state.borrow_mut();
                if state.sidebar_open {
                    state.sidebar_open = false;
                    log::info!("sidebar hidden");
                    true
                } else {
                    false
                }
            },
            Msg::SidebarToggle => {
                let mut state = self.state.borrow_mut();
                state.sidebar_open = !state.sidebar_open;
                log::info!(
                    "sidebar {}",
                    if state.sidebar_open { "shown" } else { "hidden" }
                );
                true
            },
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = self.state.borrow();
        let callback_msg = ctx.link().callback(|msg| msg);

        html! {
            <div>
                <MapComponent callback_msg={callback_msg.clone()} state={Rc::clone(&self.state)}/>
                <BasemapPicker callback_msg={callback_msg.clone()} state={Rc::clone(&self.state)}/>
                {
                    // no symbols, slider, or legend until the data is in
                    if state.summary.is_some() {
                        html! {
                            <>
                                <TimeSlider callback_msg={callback_msg.clone()} state={Rc::clone(&self.state)}/>
                                <LegendControl state={Rc::clone(&self.state)}/>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
                <InfoPanels/>
                <Sidebar callback_msg={callback_msg} state={Rc::clone(&self.state)}/>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let handle = {
                let link = ctx.link().clone();
                Timeout::new(SIDEBAR_AUTO_SHOW_MS, move || {
                    link.send_message(Msg::SidebarShow);
                })
            };
            handle.forget();
        }
    }
}

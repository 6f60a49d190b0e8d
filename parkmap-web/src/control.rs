use std::cell::RefCell;
use std::rc::Rc;

use parkmap::basemap::{Basemap, GALLERY};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent};
use yew::prelude::*;
use yew::TargetCast;

use crate::{Msg as AppMsg, State};

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct Props {
    pub(crate) callback_msg: Callback<AppMsg>,
    pub(crate) state: Rc<RefCell<State>>,
}

pub(crate) struct BasemapPicker;

impl Component for BasemapPicker {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = ctx.props().state.borrow();

        let onchange = ctx.props().callback_msg.reform(|e: Event| {
            let id: String = e.target_unchecked_into::<HtmlSelectElement>().value();
            AppMsg::BasemapSet(Basemap::new(id))
        });

        html! {
            <select id="basemaps" onchange={onchange}>
            {
                for GALLERY.iter().map(|id| html! {
                    <option value={*id} selected={state.basemap.id() == *id}>
                        {*id}
                    </option>
                })
            }
            </select>
        }
    }
}

/// The year slider plus the temporal legend underneath it. Holding the
/// thumb suppresses map panning until the mouse is released anywhere in
/// the document, so dragging the slider never pans the map.
pub(crate) struct TimeSlider {
    _mouseup_closure: Closure<dyn Fn()>,
}

impl Component for TimeSlider {
    type Message = ();
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let release = ctx.props().callback_msg.clone();
        let mouseup = Closure::<dyn Fn()>::wrap(Box::new(move || {
            release.emit(AppMsg::SliderRelease);
        }));
        gloo_utils::document()
            .add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())
            .unwrap();
        Self {
            _mouseup_closure: mouseup,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = ctx.props().state.borrow();
        let summary = match &state.summary {
            Some(summary) => summary,
            None => return html! {},
        };
        let timestamp = summary
            .timestamps
            .get(state.selected)
            .cloned()
            .unwrap_or_default();

        let oninput = ctx.props().callback_msg.reform(|e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            AppMsg::TimestampSet(value.parse().unwrap_or(0))
        });
        let onchange = ctx.props().callback_msg.reform(|e: Event| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            AppMsg::TimestampSet(value.parse().unwrap_or(0))
        });
        let onmousedown = ctx.props().callback_msg.reform(|e: MouseEvent| {
            e.stop_propagation();
            AppMsg::SliderGrab
        });

        html! {
            <div class="slider-control">
                <input
                    type="range"
                    class="range-slider"
                    min="0"
                    max="11"
                    step="1"
                    value={state.selected.to_string()}
                    oninput={oninput}
                    onchange={onchange}
                    onmousedown={onmousedown}
                />
                <output class="temporal-legend">
                    {format!("National Parks in {timestamp}")}
                </output>
            </div>
        }
    }
}

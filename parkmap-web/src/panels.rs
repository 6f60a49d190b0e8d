use std::cell::RefCell;
use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::{Msg as AppMsg, State};

/// The two fixed informational panels.
#[function_component(InfoPanels)]
pub(crate) fn info_panels() -> Html {
    html! {
        <>
            <div id="info_text">
                <strong>
                    <b><u>{"National Parks of the United States"}</u></b>
                    <br/><br/>
                    {"Data for "}<i>{"National Parks"}</i>
                    {" was classified using natural breaks (Jenks)"}
                    <br/><br/>
                    {"Data Source: U.S. Department of the Interior - National Park Service"}
                </strong>
            </div>
            <div id="info_text2">
                <strong>{"Basemap Gallery"}</strong>
            </div>
        </>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct Props {
    pub(crate) callback_msg: Callback<AppMsg>,
    pub(crate) state: Rc<RefCell<State>>,
}

/// Collapsible side panel. Visibility lives in the shared state: the map
/// marker toggles it, a map click hides it, and it auto-shows once shortly
/// after load.
pub(crate) struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = ctx.props().state.borrow();

        let onclick = ctx.props().callback_msg.reform(|_e: MouseEvent| {
            log::debug!("close button clicked");
            AppMsg::SidebarHide
        });

        html! {
            <div id="sidebar" class={if state.sidebar_open { "sidebar visible" } else { "sidebar" }}>
                <a class="close" onclick={onclick}>{"\u{d7}"}</a>
                <h1>{"National Parks of the United States"}</h1>
                <p>
                    {"Each circle is a national park, sized by how old the park \
                      was in the selected year. Scrub the slider to move through \
                      time, hover a circle for details, and pick a different \
                      basemap from the gallery."}
                </p>
                <p>
                    {"Click the marker to reopen this panel; clicking the map \
                      closes it."}
                </p>
            </div>
        }
    }
}

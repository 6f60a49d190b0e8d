use std::cell::RefCell;
use std::rc::Rc;

use parkmap::legend;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::State;

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct Props {
    pub(crate) state: Rc<RefCell<State>>,
}

/// Three reference circles for the dataset's value range, stacked with
/// negative margins so they share a baseline.
pub(crate) struct LegendControl;

impl Component for LegendControl {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = ctx.props().state.borrow();
        let summary = match &state.summary {
            Some(summary) => summary,
            None => return html! {},
        };
        let circles = legend::circles(summary.min, summary.max);

        // mousedown inside the legend must never start a map pan
        let onmousedown = Callback::from(|e: MouseEvent| e.stop_propagation());

        html! {
            <div class="legend" onmousedown={onmousedown}>
                <h2 id="legendTitle">{legend::TITLE}</h2>
                <div class="symbolsContainer">
                {
                    for circles.iter().map(|circle| {
                        let style = format!(
                            "width: {}px; height: {}px; margin-left: {}px",
                            circle.diameter, circle.diameter, circle.margin_left
                        );
                        html! {
                            <div class="legendCircle" style={style}>
                                <span class="legendValue">{circle.value}</span>
                            </div>
                        }
                    })
                }
                </div>
            </div>
        }
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use parkmap::basemap::Basemap;
use parkmap::park::{ParkCollection, ParkProperties};
use parkmap::symbol;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use crate::leaflet::{self, CircleMarker, LatLng, Map, Marker, TileLayer};
use crate::{Msg as AppMsg, State};

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct Props {
    pub(crate) callback_msg: Callback<AppMsg>,
    pub(crate) state: Rc<RefCell<State>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MapOptions {
    center: (f64, f64),
    zoom: f64,
    min_zoom: f64,
}

// continental U.S.
const MAP_OPTIONS: MapOptions = MapOptions {
    center: (39.83, -98.58),
    zoom: 5.0,
    min_zoom: 5.0,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SymbolOptions {
    fill_color: &'static str,
    color: &'static str,
    weight: f64,
    fill_opacity: f64,
}

const SYMBOL_OPTIONS: SymbolOptions = SymbolOptions {
    fill_color: symbol::FILL_COLOR,
    color: symbol::STROKE_COLOR,
    weight: symbol::STROKE_WEIGHT,
    fill_opacity: symbol::FILL_OPACITY,
};

#[derive(Serialize)]
struct StrokeStyle {
    color: &'static str,
}

#[derive(Serialize)]
struct PopupOptions {
    offset: (f64, f64),
}

/// Where the sidebar toggle marker sits.
const SIDEBAR_MARKER: (f64, f64) = (51.2, 7.0);

/// One circle marker plus the properties it draws from. The closures keep
/// the hover callbacks alive for the lifetime of the marker.
struct Symbol {
    marker: CircleMarker,
    properties: ParkProperties,
    _mouseover: Closure<dyn Fn()>,
    _mouseout: Closure<dyn Fn()>,
}

pub(crate) struct MapComponent {
    container: HtmlElement,
    map: Map,
    base_layer: Option<TileLayer>,
    label_layer: Option<TileLayer>,
    basemap: Basemap,
    symbols: Vec<Symbol>,
    /// The timestamp the symbols currently show.
    timestamp: Option<String>,
    dragging: bool,
    _sidebar_marker: Option<Marker>,
    _map_click_closure: Closure<dyn Fn(leaflet::MouseEvent)>,
    _marker_click_closure: Option<Closure<dyn Fn()>>,
}

impl MapComponent {
    const MAP_ID: &'static str = "map";

    fn render_map(&self) -> Html {
        // the container is created once in `create` and reused across renders
        Html::VRef(self.container.clone().into())
    }

    /// Applies everything the shared state asks of the map: the active
    /// basemap, the symbol layer, the selected timestamp, and whether
    /// panning is enabled. Safe to call repeatedly; each part is a no-op
    /// when already applied.
    fn sync(&mut self, ctx: &Context<Self>) {
        let state = ctx.props().state.borrow();

        if self.base_layer.is_none() || self.basemap != state.basemap {
            self.set_basemap(&state.basemap);
        }

        if self.symbols.is_empty() {
            if let Some(parks) = &state.parks {
                self.create_symbols(parks);
            }
        }

        if let Some(summary) = &state.summary {
            match summary.timestamps.get(state.selected) {
                Some(timestamp) => {
                    if self.timestamp.as_deref() != Some(timestamp.as_str()) {
                        self.update_symbols(timestamp);
                        self.timestamp = Some(timestamp.clone());
                    }
                },
                // the slider allows more positions than the dataset has years
                None => log::warn!("slider index {} has no timestamp", state.selected),
            }
        }

        if self.dragging != state.dragging {
            if state.dragging {
                self.map.dragging().enable();
            } else {
                self.map.dragging().disable();
            }
            self.dragging = state.dragging;
        }
    }

    fn set_basemap(&mut self, basemap: &Basemap) {
        log::debug!("switching basemap to {}", basemap);
        if let Some(layer) = self.base_layer.take() {
            self.map.removeLayer(&layer);
        }
        if let Some(labels) = self.label_layer.take() {
            self.map.removeLayer(&labels);
        }

        let layer = leaflet::basemap_layer(basemap.id());
        self.map.addLayer(&layer);
        self.base_layer = Some(layer);

        if let Some(overlay) = basemap.label_overlay() {
            let labels = leaflet::basemap_layer(&overlay);
            self.map.addLayer(&labels);
            self.label_layer = Some(labels);
        }
        self.basemap = basemap.clone();
    }

    fn create_symbols(&mut self, parks: &ParkCollection) {
        log::debug!("creating {} symbols", parks.len());
        let options = JsValue::from_serde(&SYMBOL_OPTIONS).unwrap();
        for park in parks.iter() {
            let (lat, lng) = park.lat_lng();
            let marker = CircleMarker::new(&LatLng::new(lat, lng), &options);

            let mouseover = {
                let marker = marker.clone();
                Closure::<dyn Fn()>::wrap(Box::new(move || {
                    marker.openPopup();
                    marker.setStyle(&stroke_style(symbol::HOVER_STROKE_COLOR));
                }))
            };
            marker.on("mouseover", mouseover.as_ref());

            let mouseout = {
                let marker = marker.clone();
                Closure::<dyn Fn()>::wrap(Box::new(move || {
                    marker.closePopup();
                    marker.setStyle(&stroke_style(symbol::STROKE_COLOR));
                }))
            };
            marker.on("mouseout", mouseout.as_ref());

            marker.addTo(&self.map);
            self.symbols.push(Symbol {
                marker,
                properties: park.properties.clone(),
                _mouseover: mouseover,
                _mouseout: mouseout,
            });
        }
    }

    /// The only mutation path for marker state: radius from the value at
    /// `timestamp`, popup rebuilt wholesale with its anchor above the
    /// circle. Idempotent.
    fn update_symbols(&self, timestamp: &str) {
        for symbol in &self.symbols {
            let value = match symbol.properties.age(timestamp) {
                Some(value) => value,
                None => {
                    log::warn!(
                        "park {} has no value for {timestamp}",
                        symbol.properties.id
                    );
                    continue;
                },
            };
            let radius = symbol::radius(value).val();
            symbol.marker.setRadius(radius);
            let content = symbol::popup_content(value, &symbol.properties.name, timestamp);
            symbol.marker.bindPopup(
                &content,
                &JsValue::from_serde(&PopupOptions {
                    offset: (0.0, -radius),
                })
                .unwrap(),
            );
        }
    }
}

fn stroke_style(color: &'static str) -> JsValue {
    JsValue::from_serde(&StrokeStyle { color }).unwrap()
}

impl Component for MapComponent {
    type Message = ();
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let container: Element = gloo_utils::document().create_element("div").unwrap();
        container.set_id(Self::MAP_ID);
        let container: HtmlElement = container.dyn_into().unwrap();

        let map = Map::new_with_element(&container, &JsValue::from_serde(&MAP_OPTIONS).unwrap());

        let map_click_callback = ctx.props().callback_msg.clone();
        let map_click_closure =
            Closure::<dyn Fn(leaflet::MouseEvent)>::wrap(Box::new(move |click: leaflet::MouseEvent| {
                let lat_lng = click.latlng();
                log::debug!("map click at {}, {}", lat_lng.lat(), lat_lng.lng());
                map_click_callback.emit(AppMsg::SidebarHide);
            }));
        map.on("click", map_click_closure.as_ref());

        Self {
            container,
            map,
            base_layer: None,
            label_layer: None,
            basemap: Basemap::default(),
            symbols: Vec::new(),
            timestamp: None,
            dragging: true,
            _sidebar_marker: None,
            // to avoid dropping the closure and invalidating the callback
            _map_click_closure: map_click_closure,
            _marker_click_closure: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let marker = Marker::new(&LatLng::new(SIDEBAR_MARKER.0, SIDEBAR_MARKER.1));
            marker.addTo(&self.map);
            let toggle = ctx.props().callback_msg.clone();
            let closure = Closure::<dyn Fn()>::wrap(Box::new(move || {
                toggle.emit(AppMsg::SidebarToggle);
            }));
            marker.on("click", closure.as_ref());
            self._sidebar_marker = Some(marker);
            self._marker_click_closure = Some(closure);

            self.sync(ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>) -> bool {
        self.sync(ctx);
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        log::trace!("map redraw");
        html! {
            <section class="map">
                {self.render_map()}
            </section>
        }
    }
}

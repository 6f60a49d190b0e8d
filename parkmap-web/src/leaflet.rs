//! Bindings for the Leaflet API surface this app drives, plus the Esri
//! basemap plugin entry point. Option objects are plain JS values built
//! with `JsValue::from_serde`.

#![allow(non_snake_case)]

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = L)]
    pub fn new_with_element(element: &HtmlElement, options: &JsValue) -> Map;

    #[wasm_bindgen(method)]
    pub fn addLayer(this: &Map, layer: &Layer) -> Map;

    #[wasm_bindgen(method)]
    pub fn removeLayer(this: &Map, layer: &Layer) -> Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, kind: &str, handler: &JsValue);

    #[wasm_bindgen(method, getter)]
    pub fn dragging(this: &Map) -> Handler;
}

#[wasm_bindgen]
extern "C" {
    /// An interaction handler such as `map.dragging`.
    #[derive(Debug, Clone)]
    pub type Handler;

    #[wasm_bindgen(method)]
    pub fn enable(this: &Handler);

    #[wasm_bindgen(method)]
    pub fn disable(this: &Handler);
}

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type Layer;

    #[wasm_bindgen(method)]
    pub fn addTo(this: &Layer, map: &Map) -> Layer;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Layer) -> Layer;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Layer)]
    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(constructor, js_namespace = L)]
    pub fn new(url_template: &str, options: &JsValue) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Layer)]
    #[derive(Debug, Clone)]
    pub type CircleMarker;

    #[wasm_bindgen(constructor, js_namespace = L)]
    pub fn new(lat_lng: &LatLng, options: &JsValue) -> CircleMarker;

    #[wasm_bindgen(method)]
    pub fn setRadius(this: &CircleMarker, radius: f64) -> CircleMarker;

    #[wasm_bindgen(method)]
    pub fn setStyle(this: &CircleMarker, style: &JsValue) -> CircleMarker;

    #[wasm_bindgen(method)]
    pub fn bindPopup(this: &CircleMarker, content: &str, options: &JsValue) -> CircleMarker;

    #[wasm_bindgen(method)]
    pub fn openPopup(this: &CircleMarker) -> CircleMarker;

    #[wasm_bindgen(method)]
    pub fn closePopup(this: &CircleMarker) -> CircleMarker;

    #[wasm_bindgen(method)]
    pub fn on(this: &CircleMarker, kind: &str, handler: &JsValue) -> CircleMarker;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Layer)]
    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = L)]
    pub fn new(lat_lng: &LatLng) -> Marker;

    #[wasm_bindgen(method)]
    pub fn on(this: &Marker, kind: &str, handler: &JsValue) -> Marker;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type LatLng;

    #[wasm_bindgen(constructor, js_namespace = L)]
    pub fn new(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Debug, Clone)]
    pub type MouseEvent;

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &MouseEvent) -> LatLng;
}

#[wasm_bindgen]
extern "C" {
    /// `L.esri.basemapLayer(name)` — resolves a basemap identifier to a
    /// tile layer. Unknown identifiers still return a layer; it just never
    /// renders tiles.
    #[wasm_bindgen(js_namespace = ["L", "esri"], js_name = basemapLayer)]
    pub fn basemap_layer(basemap: &str) -> TileLayer;
}

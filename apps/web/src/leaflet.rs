//! Bindings to the Leaflet global `L`. Only the calls the map uses.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn create_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;

    pub type TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[derive(Clone)]
    pub type CircleMarker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = circleMarker)]
    pub fn circle_marker(lat_lng: &JsValue, options: &JsValue) -> Result<CircleMarker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &CircleMarker, map: &LeafletMap) -> CircleMarker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &CircleMarker, content: &str) -> CircleMarker;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &CircleMarker) -> CircleMarker;

    #[wasm_bindgen(method)]
    pub fn on(this: &CircleMarker, event: &str, handler: &js_sys::Function) -> CircleMarker;
}

/// Whether the Leaflet script has defined `L` on the global object.
pub fn is_available() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("L"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

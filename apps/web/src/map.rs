use std::rc::Rc;

use voces_core::config::MapSettings;
use voces_core::error::{SiteError, SiteResult};
use voces_core::features::run_isolated;
use voces_core::markers::{self, MapWidget, MarkerSpec, TileLayerSpec, LOCATIONS};
use voces_core::{Role, UiSurface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Window};

use crate::dom::{js_failure, DomSurface};
use crate::leaflet::{self, LeafletMap};
use crate::timers;

/// A Leaflet map already bound to its container.
pub struct LeafletWidget {
    map: LeafletMap,
}

impl LeafletWidget {
    pub fn create(settings: &MapSettings) -> SiteResult<Self> {
        let map = leaflet::create_map(&settings.container_id)
            .map_err(|error| js_failure("L.map", &error))?;
        let center = to_js(&settings.center)?;
        map.set_view(&center, settings.zoom);
        Ok(Self { map })
    }
}

impl MapWidget for LeafletWidget {
    fn add_base_layer(&mut self, tiles: &TileLayerSpec) -> SiteResult<()> {
        let layer = leaflet::tile_layer(&tiles.url, &to_js(tiles)?)
            .map_err(|error| js_failure("L.tileLayer", &error))?;
        layer.add_to(&self.map);
        Ok(())
    }

    fn add_marker(&mut self, marker: &MarkerSpec) -> SiteResult<()> {
        let position = to_js(&[marker.latitude, marker.longitude])?;
        let circle = leaflet::circle_marker(&position, &to_js(&marker.style)?)
            .map_err(|error| js_failure("L.circleMarker", &error))?;
        circle.add_to(&self.map);
        circle.bind_popup(&marker.popup_html);

        let hovered = circle.clone();
        let open_on_hover = Closure::<dyn FnMut()>::new(move || {
            hovered.open_popup();
        });
        circle.on("mouseover", open_on_hover.as_ref().unchecked_ref());
        // Markers live as long as the page.
        open_on_hover.forget();
        Ok(())
    }
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> SiteResult<wasm_bindgen::JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|error| SiteError::surface("serialize map options", error.to_string()))
}

/// Renders the map into its container. Missing container and missing
/// Leaflet are reported as errors for the caller to log.
pub fn init(surface: &DomSurface, settings: &MapSettings) -> SiteResult<usize> {
    if surface.find(Role::MapContainer).is_none() {
        return Err(SiteError::MissingTarget(Role::MapContainer));
    }
    if !leaflet::is_available() {
        return Err(SiteError::LibraryUnavailable("Leaflet"));
    }

    let mut widget = LeafletWidget::create(settings)?;
    let placed = markers::render(&mut widget, settings, &LOCATIONS)?;
    log::info!("map initialized with {placed} markers");
    Ok(placed)
}

/// Initializes the map once the page has fully loaded and the configured
/// delay has passed, giving the Leaflet script time to arrive.
pub fn schedule(window: &Window, document: &Document, surface: Rc<DomSurface>, settings: MapSettings) {
    let timer_window = window.clone();
    let start = move || {
        spawn_local(async move {
            if let Err(error) = timers::sleep(&timer_window, settings.init_delay_ms).await {
                log::warn!("map delay failed, initializing now: {error}");
            }
            run_isolated("map", || init(&surface, &settings).map(|_| ()));
        });
    };

    if document.ready_state() == "complete" {
        start();
        return;
    }

    let on_load = Closure::once_into_js(start);
    if let Err(error) = window.add_event_listener_with_callback("load", on_load.unchecked_ref()) {
        log::error!("{}", js_failure("addEventListener(load)", &error));
    }
}

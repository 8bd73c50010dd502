mod animation;
mod config;
mod dom;
mod leaflet;
mod logging;
mod map;
mod navigation;
mod styles;
mod timers;

use std::rc::Rc;

use voces_core::features::{bibliography, catalog, run_isolated, timeline};
use voces_core::SiteConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

use crate::dom::{DomSurface, LocaleCollator};

fn main() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let search = window.location().search().unwrap_or_default();
    logging::init(logging::level_from_query(&search));
    logging::banner();

    let Some(document) = window.document() else {
        log::error!("no document to attach to");
        return;
    };
    run_isolated("styles", || styles::inject(&document));

    if document.ready_state() == "loading" {
        let (ready_window, ready_document) = (window.clone(), document.clone());
        let on_ready = Closure::once_into_js(move || start(&ready_window, &ready_document));
        if let Err(error) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            log::error!("{}", dom::js_failure("addEventListener(DOMContentLoaded)", &error));
        }
    } else {
        start(&window, &document);
    }
}

/// Wires every page feature. Each one is independent: a failure is logged
/// and the rest still come up.
fn start(window: &Window, document: &Document) {
    let config: SiteConfig = config::load(document);
    let surface = Rc::new(DomSurface::new(
        window.clone(),
        document.clone(),
        &config.map.container_id,
    ));
    let collator = Rc::new(LocaleCollator);

    run_isolated("language catalog", || catalog::install(&surface, &collator, &config));
    run_isolated("bibliography search", || bibliography::install(&surface, &config));
    run_isolated("timeline filter", || timeline::install(&surface, &config.timeline));
    run_isolated("smooth scroll", || {
        navigation::install_smooth_scroll(window, document, &config.scroll)
    });
    run_isolated("reveal animations", || animation::install_reveal(document, &config.reveal));
    run_isolated("counters", || {
        animation::install_counters(window, document, &config.counter)
    });

    map::schedule(window, document, Rc::clone(&surface), config.map.clone());
    log::info!("Voces Indígenas ready");
}

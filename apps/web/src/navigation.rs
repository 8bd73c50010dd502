use voces_core::config::ScrollSettings;
use voces_core::error::SiteResult;
use voces_core::scroll::{anchor_target, scroll_top};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::dom::{js_failure, query_all};

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const HEADER_SELECTOR: &str = ".header";

fn header_height(document: &Document) -> i32 {
    document
        .query_selector(HEADER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map_or(0, |header| header.offset_height())
}

/// Makes in-page links scroll smoothly to their target, clear of the fixed
/// header. Links whose target is missing keep the browser's behaviour.
pub fn install_smooth_scroll(window: &Window, document: &Document, settings: &ScrollSettings) -> SiteResult<()> {
    let anchors = query_all(document, ANCHOR_SELECTOR)?;
    for anchor in &anchors {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        let extra_offset = settings.extra_offset_px;

        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(id) = anchor_target(&href) else {
                return;
            };
            let Some(target) = document
                .get_element_by_id(id)
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            event.prevent_default();

            let options = ScrollToOptions::new();
            options.set_top(scroll_top(target.offset_top(), header_height(&document), extra_offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
        anchor
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|error| js_failure("addEventListener(click)", &error))?;
        on_click.forget();
    }
    log::debug!("smooth scrolling on {} links", anchors.len());
    Ok(())
}

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use voces_core::config::{CounterSettings, RevealSettings};
use voces_core::counter::{CounterTarget, CounterTween};
use voces_core::error::SiteResult;
use voces_core::reveal::{RevealAction, RevealTracker};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use crate::dom::{html_element, js_failure, query_all};
use crate::timers;

pub const REVEAL_SELECTOR: &str =
    ".stat-card, .language-card, .timeline-item, .reference-card, .methodology-card";
pub const COUNTER_SELECTOR: &str = ".stat-number, .crisis-stat-number, .bib-stat-value";

/// Class that moves a revealed element into place.
pub const REVEALED_CLASS: &str = "animate-in";

/// Watches `elements` and calls `on_first_sight` once per element, the
/// first time it intersects the viewport. The element is unobserved right
/// after.
fn observe_once<F>(
    elements: Vec<Element>,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_first_sight: F,
) -> SiteResult<()>
where
    F: FnMut(&Element) + 'static,
{
    let tracker = RefCell::new(RevealTracker::new(elements.len()));
    let watched = elements.clone();

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = watched.iter().position(|element| *element == target) else {
                    continue;
                };
                let action = tracker.borrow_mut().observe(index, entry.is_intersecting());
                if action == RevealAction::Reveal {
                    on_first_sight(&target);
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|error| js_failure("IntersectionObserver", &error))?;
    // Lives as long as the observer, which lives as long as the page.
    callback.forget();

    for element in &elements {
        observer.observe(element);
    }
    Ok(())
}

/// Hides the reveal targets and fades each one in on first sight.
pub fn install_reveal(document: &Document, settings: &RevealSettings) -> SiteResult<()> {
    let elements = query_all(document, REVEAL_SELECTOR)?;
    for element in &elements {
        let style = html_element(element)?.style();
        for (property, value) in [
            ("opacity", "0"),
            ("transform", "translateY(30px)"),
            ("transition", "all 0.6s ease"),
        ] {
            style
                .set_property(property, value)
                .map_err(|error| js_failure("style.setProperty", &error))?;
        }
    }

    let count = elements.len();
    observe_once(elements, settings.threshold, Some(settings.root_margin.as_str()), |element| {
        if let Err(error) = element.class_list().add_1(REVEALED_CLASS) {
            log::warn!("{}", js_failure("classList.add", &error));
        }
    })?;
    log::debug!("watching {count} elements for reveal");
    Ok(())
}

/// Counts statistics up from zero the first time they scroll into view.
pub fn install_counters(window: &Window, document: &Document, settings: &CounterSettings) -> SiteResult<()> {
    let counters = query_all(document, COUNTER_SELECTOR)?;
    let count = counters.len();
    let window = window.clone();
    let threshold = settings.threshold;
    let settings = Rc::new(settings.clone());

    observe_once(counters, threshold, None, move |element| {
        let text = element.text_content().unwrap_or_default();
        if let Some(target) = CounterTarget::parse(&text) {
            let tween = CounterTween::new(target, &settings);
            run_counter(window.clone(), element.clone(), tween, settings.tick_ms);
        }
    })?;
    log::debug!("watching {count} counters");
    Ok(())
}

/// Shows one frame per tick until the tween finishes or the element leaves
/// the document.
fn run_counter(window: Window, element: Element, mut tween: CounterTween, tick_ms: u32) {
    let next_window = window.clone();
    let scheduled = timers::set_timeout(&window, tick_ms, move || {
        if !element.is_connected() {
            log::debug!("counter element detached, stopping");
            return;
        }
        let frame = tween.tick();
        element.set_text_content(Some(&frame.text));
        if !frame.finished {
            run_counter(next_window, element, tween, tick_ms);
        }
    });
    if let Err(error) = scheduled {
        log::warn!("counter stopped: {error}");
    }
}

//! Page features wired against a [`UiSurface`]. Each `install` registers its
//! listeners and returns; behaviour afterwards is driven by events.

pub mod bibliography;
pub mod catalog;
pub mod timeline;

use std::cell::Cell;
use std::rc::Rc;

use crate::error::SiteResult;
use crate::surface::{Handler, UiSurface};
use crate::timing::Debounce;

/// Runs one feature initializer and reports its failure at the failure's
/// level. Returns whether the feature came up.
pub fn run_isolated(feature: &str, init: impl FnOnce() -> SiteResult<()>) -> bool {
    match init() {
        Ok(()) => {
            log::debug!("{feature} ready");
            true
        }
        Err(error) => {
            log::log!(error.level(), "{feature}: {error}");
            false
        }
    }
}

/// Wraps `action` so it runs `delay_ms` after the last of a burst of
/// events. A zero delay runs it on every event.
pub(crate) fn debounced<S>(surface: &Rc<S>, delay_ms: u32, action: Rc<dyn Fn()>) -> Handler
where
    S: UiSurface + 'static,
{
    if delay_ms == 0 {
        return Box::new(move || action());
    }

    let surface = Rc::clone(surface);
    let gate = Rc::new(Cell::new(Debounce::default()));
    Box::new(move || {
        let mut debounce = gate.get();
        let ticket = debounce.schedule();
        gate.set(debounce);

        let gate = Rc::clone(&gate);
        let action = Rc::clone(&action);
        let task = Box::new(move || {
            if gate.get().is_current(ticket) {
                action();
            }
        });
        if let Err(error) = surface.defer(delay_ms, task) {
            log::warn!("could not schedule debounced update: {error}");
        }
    })
}

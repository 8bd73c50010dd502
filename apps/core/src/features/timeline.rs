use std::cell::Cell;
use std::rc::Rc;

use crate::config::TimelineSettings;
use crate::error::{SiteError, SiteResult};
use crate::surface::{Role, UiEvent, UiSurface};
use crate::timeline;
use crate::timing::Throttle;

pub fn install<S>(surface: &Rc<S>, settings: &TimelineSettings) -> SiteResult<()>
where
    S: UiSurface + 'static,
{
    let buttons = Rc::new(surface.find_all(Role::TimelineButton));
    if buttons.is_empty() {
        return Err(SiteError::MissingControl(Role::TimelineButton));
    }

    let gate = Rc::new(Cell::new(Throttle::default()));
    for (index, button) in buttons.iter().enumerate() {
        let surface_ref = Rc::clone(surface);
        let buttons = Rc::clone(&buttons);
        let gate = Rc::clone(&gate);
        let settings = settings.clone();

        surface.listen(
            button,
            UiEvent::Click,
            Box::new(move || {
                if !enter_throttle(&surface_ref, &gate, settings.click_throttle_ms) {
                    return;
                }
                if let Err(error) = select(&surface_ref, &buttons, index, settings.reanimate_delay_ms)
                {
                    log::warn!("timeline filter failed: {error}");
                }
            }),
        )?;
    }
    Ok(())
}

fn enter_throttle<S>(surface: &Rc<S>, gate: &Rc<Cell<Throttle>>, limit_ms: u32) -> bool
where
    S: UiSurface + 'static,
{
    if limit_ms == 0 {
        return true;
    }

    let mut throttle = gate.get();
    if !throttle.try_enter() {
        return false;
    }
    gate.set(throttle);

    let release = Rc::clone(gate);
    let scheduled = surface.defer(
        limit_ms,
        Box::new(move || {
            let mut throttle = release.get();
            throttle.release();
            release.set(throttle);
        }),
    );
    if let Err(error) = scheduled {
        log::warn!("could not schedule throttle release: {error}");
        gate.set(Throttle::default());
    }
    true
}

/// Activates button `active`, shows the items in its category and restarts
/// their fade-in. Returns how many items are shown.
pub fn select<S>(
    surface: &Rc<S>,
    buttons: &[S::Element],
    active: usize,
    reanimate_delay_ms: u32,
) -> SiteResult<usize>
where
    S: UiSurface + 'static,
{
    for (index, button) in buttons.iter().enumerate() {
        surface.set_class(button, "active", index == active)?;
    }

    let filter = buttons
        .get(active)
        .and_then(|button| surface.attribute(button, "data-filter"))
        .unwrap_or_default();

    let mut shown = Vec::new();
    for item in surface.find_all(Role::TimelineItem) {
        let category = surface.attribute(&item, "data-category");
        if timeline::shows(&filter, category.as_deref()) {
            surface.set_visible(&item, true)?;
            surface.set_style(&item, "opacity", "0")?;
            surface.set_style(&item, "transform", "translateY(20px)")?;
            shown.push(item);
        } else {
            surface.set_visible(&item, false)?;
        }
    }

    let count = shown.len();
    let target = Rc::clone(surface);
    surface.defer(
        reanimate_delay_ms,
        Box::new(move || {
            for item in &shown {
                let result = target
                    .set_style(item, "transition", "all 0.5s ease")
                    .and_then(|()| target.set_style(item, "opacity", "1"))
                    .and_then(|()| target.set_style(item, "transform", "translateY(0)"));
                if let Err(error) = result {
                    log::warn!("timeline fade-in failed: {error}");
                }
            }
        }),
    )?;

    Ok(count)
}

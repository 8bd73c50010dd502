use std::rc::Rc;

use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult};
use crate::features::debounced;
use crate::references;
use crate::surface::{Role, UiEvent, UiSurface};

pub fn install<S>(surface: &Rc<S>, config: &SiteConfig) -> SiteResult<()>
where
    S: UiSurface + 'static,
{
    let input = surface
        .find(Role::ReferenceSearchInput)
        .ok_or(SiteError::MissingControl(Role::ReferenceSearchInput))?;

    let update: Rc<dyn Fn()> = {
        let surface = Rc::clone(surface);
        Rc::new(move || {
            if let Err(error) = refresh(surface.as_ref()) {
                log::warn!("bibliography search failed: {error}");
            }
        })
    };
    surface.listen(
        &input,
        UiEvent::Input,
        debounced(surface, config.search_debounce_ms, update),
    )
}

/// Shows the reference cards containing the search term. Returns how many
/// are visible.
pub fn refresh<S: UiSurface>(surface: &S) -> SiteResult<usize> {
    let term = surface.selection(Role::ReferenceSearchInput).unwrap_or_default();

    let mut visible = 0;
    for card in surface.find_all(Role::ReferenceCard) {
        let show = references::matches(&surface.text(&card), &term);
        surface.set_visible(&card, show)?;
        visible += usize::from(show);
    }

    if let Some(label) = surface.find(Role::ReferenceCount) {
        surface.set_markup(&label, &references::result_markup(visible))?;
    }
    Ok(visible)
}

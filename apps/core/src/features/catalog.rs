//! Language grid: search box, region / endangerment selects and the sort
//! selector all re-run the combined pipeline.

use std::rc::Rc;

use crate::card::CardRecord;
use crate::collate::Collator;
use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult};
use crate::features::debounced;
use crate::pipeline::{self, FilterCriteria};
use crate::surface::{Role, UiEvent, UiSurface};

const SELECTS: [Role; 3] = [Role::RegionFilter, Role::EndangermentFilter, Role::SortSelect];

pub fn install<S, C>(surface: &Rc<S>, collator: &Rc<C>, config: &SiteConfig) -> SiteResult<()>
where
    S: UiSurface + 'static,
    C: Collator + 'static,
{
    let update: Rc<dyn Fn()> = {
        let surface = Rc::clone(surface);
        let collator = Rc::clone(collator);
        Rc::new(move || {
            if let Err(error) = refresh(surface.as_ref(), collator.as_ref()) {
                log::warn!("catalog refresh failed: {error}");
            }
        })
    };

    let mut wired = 0;
    if let Some(input) = surface.find(Role::SearchInput) {
        let handler = debounced(surface, config.search_debounce_ms, Rc::clone(&update));
        surface.listen(&input, UiEvent::Input, handler)?;
        wired += 1;
    }
    for role in SELECTS {
        if let Some(control) = surface.find(role) {
            let update = Rc::clone(&update);
            surface.listen(&control, UiEvent::Change, Box::new(move || update()))?;
            wired += 1;
        }
    }

    if wired == 0 {
        return Err(SiteError::MissingControl(Role::SearchInput));
    }
    log::debug!("catalog listening on {wired} controls");
    Ok(())
}

pub fn read_criteria<S: UiSurface>(surface: &S) -> FilterCriteria {
    FilterCriteria::from_controls(
        surface.selection(Role::RegionFilter),
        surface.selection(Role::EndangermentFilter),
        surface.selection(Role::SearchInput),
        surface.selection(Role::SortSelect),
    )
}

pub fn read_card<S: UiSurface>(surface: &S, element: &S::Element) -> CardRecord {
    let attribute = |name: &str| surface.attribute(element, name).unwrap_or_default();
    CardRecord {
        name: attribute("data-name"),
        region: attribute("data-region"),
        endangerment: attribute("data-endangerment"),
        speakers: attribute("data-speakers"),
        content: surface.text(element),
    }
}

/// Applies the current criteria to the grid. Returns the visible count, or
/// `None` when the page has no grid.
pub fn refresh<S, C>(surface: &S, collator: &C) -> SiteResult<Option<usize>>
where
    S: UiSurface,
    C: Collator,
{
    let Some(grid) = surface.find(Role::LanguageGrid) else {
        return Ok(None);
    };

    let criteria = read_criteria(surface);
    let elements = surface.find_within(&grid, Role::LanguageCard);
    let cards: Vec<CardRecord> = elements
        .iter()
        .map(|element| read_card(surface, element))
        .collect();

    let visible = pipeline::select(&cards, &criteria, collator);

    let mut shown = vec![false; elements.len()];
    for &index in &visible {
        shown[index] = true;
    }
    for (element, show) in elements.iter().zip(shown) {
        surface.set_visible(element, show)?;
    }
    for &index in &visible {
        surface.append(&grid, &elements[index])?;
    }

    if let Some(label) = surface.find(Role::ResultCount) {
        surface.set_text(&label, &pipeline::result_label(visible.len()))?;
    }

    log::debug!(
        "catalog: {} of {} cards visible, sorted by {}",
        visible.len(),
        cards.len(),
        criteria.sort_key.as_str()
    );
    Ok(Some(visible.len()))
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{install, refresh};
    use crate::card::CardRecord;
    use crate::collate::FoldingCollator;
    use crate::config::SiteConfig;
    use crate::error::{SiteError, SiteResult};
    use crate::surface::{Role, UiEvent};
    use crate::testing::{MemorySurface, NodeId};

    struct Page {
        surface: Rc<MemorySurface>,
        grid: NodeId,
        search: NodeId,
        region: NodeId,
        sort: NodeId,
        count: NodeId,
    }

    fn page() -> Page {
        let surface = Rc::new(MemorySurface::new());
        let search = surface.add(Some(Role::SearchInput), None);
        let region = surface.add(Some(Role::RegionFilter), None);
        let sort = surface.add(Some(Role::SortSelect), None);
        let count = surface.add(Some(Role::ResultCount), None);
        let grid = surface.add(Some(Role::LanguageGrid), None);

        for card in [
            CardRecord::new("Zapoteco")
                .region("oaxaca")
                .endangerment("en-peligro")
                .speakers("450000")
                .content("Zapoteco Diidxazá"),
            CardRecord::new("Ayapaneco")
                .region("tabasco")
                .endangerment("critico")
                .speakers("2")
                .content("Ayapaneco Nuumte Oote"),
            CardRecord::new("Huave")
                .region("oaxaca")
                .endangerment("severamente")
                .speakers("15000")
                .content("Huave Ikoots"),
        ] {
            surface.add_card(grid, &card);
        }

        Page {
            surface,
            grid,
            search,
            region,
            sort,
            count,
        }
    }

    #[test]
    fn default_sort_is_by_name_and_counts_all() -> SiteResult<()> {
        let page = page();
        let visible = refresh(page.surface.as_ref(), &FoldingCollator)?;

        assert_eq!(visible, Some(3));
        assert_eq!(
            page.surface.visible_card_names(page.grid),
            ["Ayapaneco", "Huave", "Zapoteco"]
        );
        assert_eq!(page.surface.text_of(page.count), "3 Languages Found");
        Ok(())
    }

    #[test]
    fn select_change_refilters_and_reorders() -> SiteResult<()> {
        let page = page();
        install(&page.surface, &Rc::new(FoldingCollator), &SiteConfig::default())?;

        page.surface.set_value(page.region, "oaxaca");
        page.surface.set_value(page.sort, "hablantes-desc");
        page.surface.fire(page.sort, UiEvent::Change);

        assert_eq!(page.surface.visible_card_names(page.grid), ["Zapoteco", "Huave"]);
        assert_eq!(page.surface.text_of(page.count), "2 Languages Found");
        Ok(())
    }

    #[test]
    fn search_keeps_active_selects() -> SiteResult<()> {
        let page = page();
        install(&page.surface, &Rc::new(FoldingCollator), &SiteConfig::default())?;

        page.surface.set_value(page.region, "oaxaca");
        page.surface.set_value(page.search, "IKOOTS");
        page.surface.fire(page.search, UiEvent::Input);

        assert_eq!(page.surface.visible_card_names(page.grid), ["Huave"]);
        assert_eq!(page.surface.text_of(page.count), "1 Language Found");
        Ok(())
    }

    #[test]
    fn hidden_cards_stay_out_of_visible_order() -> SiteResult<()> {
        let page = page();
        page.surface.set_value(page.search, "zapoteco");
        refresh(page.surface.as_ref(), &FoldingCollator)?;

        let children = page.surface.children(page.grid);
        assert_eq!(children.len(), 3);
        assert_eq!(page.surface.visible_card_names(page.grid), ["Zapoteco"]);
        Ok(())
    }

    #[test]
    fn debounced_search_runs_once_for_a_burst() -> SiteResult<()> {
        let page = page();
        let config = SiteConfig {
            search_debounce_ms: 150,
            ..SiteConfig::default()
        };
        install(&page.surface, &Rc::new(FoldingCollator), &config)?;

        page.surface.set_value(page.search, "hua");
        page.surface.fire(page.search, UiEvent::Input);
        page.surface.set_value(page.search, "zapo");
        page.surface.fire(page.search, UiEvent::Input);

        assert_eq!(page.surface.text_of(page.count), "");
        assert_eq!(page.surface.pending_delays(), [150, 150]);
        page.surface.run_deferred();

        assert_eq!(page.surface.visible_card_names(page.grid), ["Zapoteco"]);
        assert_eq!(page.surface.text_of(page.count), "1 Language Found");
        Ok(())
    }

    #[test]
    fn missing_optional_controls_are_tolerated() -> SiteResult<()> {
        let surface = Rc::new(MemorySurface::new());
        let grid = surface.add(Some(Role::LanguageGrid), None);
        surface.add_card(grid, &CardRecord::new("Kiliwa"));

        assert_eq!(refresh(surface.as_ref(), &FoldingCollator)?, Some(1));

        let result = install(&surface, &Rc::new(FoldingCollator), &SiteConfig::default());
        assert!(matches!(result, Err(SiteError::MissingControl(Role::SearchInput))));
        Ok(())
    }

    #[test]
    fn page_without_grid_is_a_no_op() -> SiteResult<()> {
        let surface = MemorySurface::new();
        surface.add(Some(Role::SearchInput), None);
        assert_eq!(refresh(&surface, &FoldingCollator)?, None);
        Ok(())
    }
}

//! Combined region / endangerment / search filtering and sorting of the
//! language catalog.

use std::cmp::Ordering;

use crate::card::CardRecord;
use crate::collate::Collator;
use crate::domain::{Endangerment, SortKey};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub region: Option<String>,
    pub endangerment: Option<String>,
    pub search_term: String,
    pub sort_key: SortKey,
}

impl FilterCriteria {
    /// Builds criteria from raw control values; empty values disable their
    /// predicate.
    pub fn from_controls(
        region: Option<String>,
        endangerment: Option<String>,
        search_term: Option<String>,
        sort: Option<String>,
    ) -> Self {
        Self {
            region: region.filter(|value| !value.is_empty()),
            endangerment: endangerment.filter(|value| !value.is_empty()),
            search_term: search_term.unwrap_or_default(),
            sort_key: sort.as_deref().map_or(SortKey::Name, SortKey::parse),
        }
    }

    pub fn matches(&self, card: &CardRecord) -> bool {
        self.matches_region(card) && self.matches_endangerment(card) && self.matches_search(card)
    }

    fn matches_region(&self, card: &CardRecord) -> bool {
        self.region.as_deref().map_or(true, |region| card.region == region)
    }

    fn matches_endangerment(&self, card: &CardRecord) -> bool {
        self.endangerment
            .as_deref()
            .map_or(true, |tag| card.endangerment == tag)
    }

    fn matches_search(&self, card: &CardRecord) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        card.name.to_lowercase().contains(&term) || card.content.to_lowercase().contains(&term)
    }
}

/// Indices of the cards that pass every active predicate, in display order.
pub fn select<C: Collator>(cards: &[CardRecord], criteria: &FilterCriteria, collator: &C) -> Vec<usize> {
    let mut visible: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| criteria.matches(card))
        .map(|(index, _)| index)
        .collect();

    sort_indices(&mut visible, cards, criteria.sort_key, collator);
    visible
}

/// Stable sort of `indices` by `key`. Unparsable speaker counts go last for
/// both numeric orders.
pub fn sort_indices<C: Collator>(
    indices: &mut [usize],
    cards: &[CardRecord],
    key: SortKey,
    collator: &C,
) {
    match key {
        SortKey::Name => {
            indices.sort_by(|&a, &b| collator.compare(&cards[a].name, &cards[b].name));
        }
        SortKey::SpeakersAscending => indices.sort_by(|&a, &b| {
            compare_counts(cards[a].speaker_count(), cards[b].speaker_count(), Ordering::Less)
        }),
        SortKey::SpeakersDescending => indices.sort_by(|&a, &b| {
            compare_counts(cards[a].speaker_count(), cards[b].speaker_count(), Ordering::Greater)
        }),
        SortKey::Severity => {
            indices.sort_by_key(|&index| Endangerment::priority_of(&cards[index].endangerment));
        }
        SortKey::Unspecified => {}
    }
}

fn compare_counts(left: Option<u64>, right: Option<u64>, direction: Ordering) -> Ordering {
    match (left, right) {
        (Some(a), Some(b)) if direction == Ordering::Less => a.cmp(&b),
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Count line shown above the catalog grid.
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 Language Found".to_string()
    } else {
        format!("{count} Languages Found")
    }
}

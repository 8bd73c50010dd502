use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Orders display names for the name sort.
pub trait Collator {
    fn compare(&self, left: &str, right: &str) -> Ordering;
}

/// Collation used outside the browser: base letters first, then accents,
/// then case. "ayapaneco" < "Ayapaneco" < "Chontal" and "Diidxazá" sorts
/// right after "Diidxaza".
#[derive(Debug, Clone, Copy, Default)]
pub struct FoldingCollator;

impl FoldingCollator {
    fn base_key(value: &str) -> String {
        value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect()
    }

    fn accent_key(value: &str) -> String {
        value.nfd().flat_map(char::to_lowercase).collect()
    }
}

impl Collator for FoldingCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        Self::base_key(left)
            .cmp(&Self::base_key(right))
            .then_with(|| Self::accent_key(left).cmp(&Self::accent_key(right)))
            .then_with(|| {
                // Lowercase before uppercase at equal letters.
                let flip = |c: char| {
                    if c.is_uppercase() {
                        c.to_lowercase().next().unwrap_or(c)
                    } else {
                        c.to_uppercase().next().unwrap_or(c)
                    }
                };
                left.chars().map(flip).cmp(right.chars().map(flip))
            })
    }
}

impl<C: Collator + ?Sized> Collator for &C {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        (**self).compare(left, right)
    }
}

/// What to do with an element after an intersection report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Show it and stop observing it.
    Reveal,
    Ignore,
}

/// One-shot reveal state for a fixed list of elements. Once revealed an
/// element stays revealed whatever the viewport does afterwards.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    pub fn observe(&mut self, index: usize, intersecting: bool) -> RevealAction {
        match self.revealed.get_mut(index) {
            Some(revealed) if intersecting && !*revealed => {
                *revealed = true;
                RevealAction::Reveal
            }
            _ => RevealAction::Ignore,
        }
    }
}

//! Debounce and throttle gates. They hold no clock: the caller schedules
//! the follow-up through `UiSurface::defer` and asks the gate whether to act.

/// Only the most recently scheduled call runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Debounce {
    latest: u64,
}

impl Debounce {
    /// Registers a new call and returns its ticket.
    pub fn schedule(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    /// Whether `ticket` is still the latest call when its timer fires.
    pub const fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Admits one call, then refuses until released.
#[derive(Debug, Clone, Copy, Default)]
pub struct Throttle {
    engaged: bool,
}

impl Throttle {
    pub fn try_enter(&mut self) -> bool {
        if self.engaged {
            return false;
        }
        self.engaged = true;
        true
    }

    pub fn release(&mut self) {
        self.engaged = false;
    }
}

//! The page as seen by the features: elements found by role, a handful of
//! reads and writes, event subscriptions and deferred tasks.
//!
//! The browser implementation lives in the web app; tests use an in-memory
//! surface.

use std::fmt;

use crate::error::SiteResult;

/// Structural role of an element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    SearchInput,
    RegionFilter,
    EndangermentFilter,
    SortSelect,
    LanguageGrid,
    LanguageCard,
    ResultCount,
    TimelineButton,
    TimelineItem,
    ReferenceSearchInput,
    ReferenceCard,
    ReferenceCount,
    MapContainer,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchInput => "search input",
            Self::RegionFilter => "region filter",
            Self::EndangermentFilter => "endangerment filter",
            Self::SortSelect => "sort selector",
            Self::LanguageGrid => "language grid",
            Self::LanguageCard => "language card",
            Self::ResultCount => "result count",
            Self::TimelineButton => "timeline button",
            Self::TimelineItem => "timeline item",
            Self::ReferenceSearchInput => "bibliography search input",
            Self::ReferenceCard => "reference card",
            Self::ReferenceCount => "reference count",
            Self::MapContainer => "map container",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Input,
    Change,
    Click,
}

impl UiEvent {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Change => "change",
            Self::Click => "click",
        }
    }
}

pub type Handler = Box<dyn FnMut()>;
pub type Task = Box<dyn FnOnce()>;

pub trait UiSurface {
    type Element: Clone + 'static;

    /// First element with the role, if any.
    fn find(&self, role: Role) -> Option<Self::Element>;

    /// Every element with the role, in document order.
    fn find_all(&self, role: Role) -> Vec<Self::Element>;

    /// Descendants of `parent` with the role, in document order.
    fn find_within(&self, parent: &Self::Element, role: Role) -> Vec<Self::Element>;

    /// Current value of a form control.
    fn value(&self, element: &Self::Element) -> Option<String>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn text(&self, element: &Self::Element) -> String;

    fn set_text(&self, element: &Self::Element, text: &str) -> SiteResult<()>;

    fn set_markup(&self, element: &Self::Element, markup: &str) -> SiteResult<()>;

    fn set_visible(&self, element: &Self::Element, visible: bool) -> SiteResult<()>;

    fn set_class(&self, element: &Self::Element, class: &str, enabled: bool) -> SiteResult<()>;

    fn set_style(&self, element: &Self::Element, property: &str, value: &str) -> SiteResult<()>;

    /// Moves `child` to the end of `parent`.
    fn append(&self, parent: &Self::Element, child: &Self::Element) -> SiteResult<()>;

    /// Subscribes for the lifetime of the page.
    fn listen(&self, element: &Self::Element, event: UiEvent, handler: Handler) -> SiteResult<()>;

    /// Runs `task` after `delay_ms` on a later event-loop turn.
    fn defer(&self, delay_ms: u32, task: Task) -> SiteResult<()>;

    /// Control value treated as "no selection" when absent or empty.
    fn selection(&self, role: Role) -> Option<String> {
        self.find(role)
            .and_then(|element| self.value(&element))
            .filter(|value| !value.is_empty())
    }
}

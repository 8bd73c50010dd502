use std::cmp::Ordering;

use js_sys::{Array, JsString, Object};
use voces_core::error::{SiteError, SiteResult};
use voces_core::surface::{Handler, Role, Task, UiEvent, UiSurface};
use voces_core::Collator;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, NodeList, Window};

use crate::timers;

/// CSS selector for each role. The reference count and the map container
/// are resolved separately.
pub const fn selector(role: Role) -> &'static str {
    match role {
        Role::SearchInput => "#searchInput",
        Role::RegionFilter => "#regionFilter",
        Role::EndangermentFilter => "#endangermentFilter",
        Role::SortSelect => "#sortBy",
        Role::LanguageGrid => "#languagesGrid",
        Role::LanguageCard => ".language-card",
        Role::ResultCount => ".featured-container > p",
        Role::TimelineButton => ".timeline-filter",
        Role::TimelineItem => ".timeline-item",
        Role::ReferenceSearchInput => "#bibSearchInput",
        Role::ReferenceCard => ".reference-card",
        Role::ReferenceCount => ".references-grid",
        Role::MapContainer => "#map",
    }
}

pub fn js_failure(operation: &'static str, value: &JsValue) -> SiteError {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"));
    SiteError::surface(operation, message)
}

pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> SiteResult<Vec<Element>> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .map_err(|error| js_failure("querySelectorAll", &error))
}

pub fn html_element(element: &Element) -> SiteResult<&HtmlElement> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| SiteError::surface("style", "element is not an HTMLElement"))
}

/// The live document behind [`UiSurface`].
pub struct DomSurface {
    window: Window,
    document: Document,
    map_container_id: String,
}

impl DomSurface {
    pub fn new(window: Window, document: Document, map_container_id: &str) -> Self {
        Self {
            window,
            document,
            map_container_id: map_container_id.to_string(),
        }
    }

    /// The `p` inside the block just before the references grid.
    fn reference_count(&self) -> Option<Element> {
        self.document
            .query_selector(selector(Role::ReferenceCount))
            .ok()
            .flatten()?
            .previous_element_sibling()?
            .query_selector("p")
            .ok()
            .flatten()
    }

    fn set_style_property(element: &Element, property: &str, value: &str) -> SiteResult<()> {
        html_element(element)?
            .style()
            .set_property(property, value)
            .map_err(|error| js_failure("style.setProperty", &error))
    }
}

impl UiSurface for DomSurface {
    type Element = Element;

    fn find(&self, role: Role) -> Option<Element> {
        match role {
            Role::ReferenceCount => self.reference_count(),
            Role::MapContainer => self.document.get_element_by_id(&self.map_container_id),
            _ => self.document.query_selector(selector(role)).ok().flatten(),
        }
    }

    fn find_all(&self, role: Role) -> Vec<Element> {
        match role {
            Role::ReferenceCount | Role::MapContainer => self.find(role).into_iter().collect(),
            _ => query_all(&self.document, selector(role)).unwrap_or_default(),
        }
    }

    fn find_within(&self, parent: &Element, role: Role) -> Vec<Element> {
        parent
            .query_selector_all(selector(role))
            .map(|list| elements(&list))
            .unwrap_or_default()
    }

    fn value(&self, element: &Element) -> Option<String> {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        element
            .dyn_ref::<HtmlSelectElement>()
            .map(HtmlSelectElement::value)
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn text(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&self, element: &Element, text: &str) -> SiteResult<()> {
        element.set_text_content(Some(text));
        Ok(())
    }

    fn set_markup(&self, element: &Element, markup: &str) -> SiteResult<()> {
        element.set_inner_html(markup);
        Ok(())
    }

    fn set_visible(&self, element: &Element, visible: bool) -> SiteResult<()> {
        Self::set_style_property(element, "display", if visible { "block" } else { "none" })
    }

    fn set_class(&self, element: &Element, class: &str, enabled: bool) -> SiteResult<()> {
        let classes = element.class_list();
        let result = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        result.map_err(|error| js_failure("classList", &error))
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) -> SiteResult<()> {
        Self::set_style_property(element, property, value)
    }

    fn append(&self, parent: &Element, child: &Element) -> SiteResult<()> {
        parent
            .append_child(child)
            .map(|_| ())
            .map_err(|error| js_failure("appendChild", &error))
    }

    fn listen(&self, element: &Element, event: UiEvent, handler: Handler) -> SiteResult<()> {
        let callback = Closure::<dyn FnMut()>::wrap(handler);
        element
            .add_event_listener_with_callback(event.as_str(), callback.as_ref().unchecked_ref())
            .map_err(|error| js_failure("addEventListener", &error))?;
        // Page-lifetime listener.
        callback.forget();
        Ok(())
    }

    fn defer(&self, delay_ms: u32, task: Task) -> SiteResult<()> {
        timers::set_timeout(&self.window, delay_ms, task).map(|_| ())
    }
}

/// Name ordering through `String.prototype.localeCompare`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleCollator;

impl Collator for LocaleCollator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        JsString::from(left)
            .locale_compare(right, &Array::new(), &Object::new())
            .cmp(&0)
    }
}

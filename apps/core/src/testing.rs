//! In-memory `UiSurface` for feature tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::card::CardRecord;
use crate::error::SiteResult;
use crate::surface::{Handler, Role, Task, UiEvent, UiSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

struct Node {
    role: Option<Role>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<String, String>,
    text: String,
    markup: Option<String>,
    value: Option<String>,
    visible: bool,
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
}

struct Listener {
    node: NodeId,
    event: UiEvent,
    handler: Option<Handler>,
}

#[derive(Default)]
pub struct MemorySurface {
    nodes: RefCell<Vec<Node>>,
    listeners: RefCell<Vec<Listener>>,
    deferred: RefCell<VecDeque<(u32, Task)>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, role: Option<Role>, parent: Option<NodeId>) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(Node {
            role,
            parent,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            markup: None,
            value: None,
            visible: true,
            classes: BTreeSet::new(),
            styles: BTreeMap::new(),
        });
        if let Some(parent) = parent {
            nodes[parent.0].children.push(id);
        }
        id
    }

    pub fn add_card(&self, grid: NodeId, card: &CardRecord) -> NodeId {
        let id = self.add(Some(Role::LanguageCard), Some(grid));
        self.set_attribute(id, "data-name", &card.name);
        self.set_attribute(id, "data-region", &card.region);
        self.set_attribute(id, "data-endangerment", &card.endangerment);
        self.set_attribute(id, "data-speakers", &card.speakers);
        self.set_text_content(id, &card.content);
        id
    }

    pub fn set_attribute(&self, id: NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[id.0]
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    pub fn set_value(&self, id: NodeId, value: &str) {
        self.nodes.borrow_mut()[id.0].value = Some(value.to_string());
    }

    pub fn set_text_content(&self, id: NodeId, text: &str) {
        self.nodes.borrow_mut()[id.0].text = text.to_string();
    }

    /// Dispatches `event` to the listeners of `id`, in registration order.
    pub fn fire(&self, id: NodeId, event: UiEvent) {
        let matching: Vec<usize> = self
            .listeners
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, listener)| listener.node == id && listener.event == event)
            .map(|(index, _)| index)
            .collect();

        for index in matching {
            let handler = self.listeners.borrow_mut()[index].handler.take();
            if let Some(mut handler) = handler {
                handler();
                self.listeners.borrow_mut()[index].handler = Some(handler);
            }
        }
    }

    pub fn pending_delays(&self) -> Vec<u32> {
        self.deferred.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Runs deferred tasks in scheduling order, including ones they schedule.
    pub fn run_deferred(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.deferred.borrow_mut().pop_front();
            let Some((_, task)) = next else {
                return ran;
            };
            task();
            ran += 1;
        }
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[id.0].children.clone()
    }

    pub fn visible_card_names(&self, grid: NodeId) -> Vec<String> {
        let nodes = self.nodes.borrow();
        nodes[grid.0]
            .children
            .iter()
            .map(|child| &nodes[child.0])
            .filter(|node| node.visible)
            .map(|node| node.attributes.get("data-name").cloned().unwrap_or_default())
            .collect()
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.nodes.borrow()[id.0].visible
    }

    pub fn text_of(&self, id: NodeId) -> String {
        self.nodes.borrow()[id.0].text.clone()
    }

    pub fn markup_of(&self, id: NodeId) -> Option<String> {
        self.nodes.borrow()[id.0].markup.clone()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes.borrow()[id.0].classes.contains(class)
    }

    pub fn style_of(&self, id: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[id.0].styles.get(property).cloned()
    }

    fn collect_with_role(nodes: &[Node], id: NodeId, role: Role, found: &mut Vec<NodeId>) {
        for child in &nodes[id.0].children {
            if nodes[child.0].role == Some(role) {
                found.push(*child);
            }
            Self::collect_with_role(nodes, *child, role, found);
        }
    }

    fn text_content(nodes: &[Node], id: NodeId) -> String {
        let node = &nodes[id.0];
        let mut text = node.text.clone();
        for child in &node.children {
            text.push_str(&Self::text_content(nodes, *child));
        }
        text
    }
}

impl UiSurface for MemorySurface {
    type Element = NodeId;

    fn find(&self, role: Role) -> Option<NodeId> {
        self.find_all(role).into_iter().next()
    }

    fn find_all(&self, role: Role) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut found = Vec::new();
        for (index, node) in nodes.iter().enumerate() {
            if node.parent.is_none() {
                let root = NodeId(index);
                if node.role == Some(role) {
                    found.push(root);
                }
                Self::collect_with_role(&nodes, root, role, &mut found);
            }
        }
        found
    }

    fn find_within(&self, parent: &NodeId, role: Role) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut found = Vec::new();
        Self::collect_with_role(&nodes, *parent, role, &mut found);
        found
    }

    fn value(&self, element: &NodeId) -> Option<String> {
        self.nodes.borrow()[element.0].value.clone()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[element.0].attributes.get(name).cloned()
    }

    fn text(&self, element: &NodeId) -> String {
        Self::text_content(&self.nodes.borrow(), *element)
    }

    fn set_text(&self, element: &NodeId, text: &str) -> SiteResult<()> {
        self.set_text_content(*element, text);
        Ok(())
    }

    fn set_markup(&self, element: &NodeId, markup: &str) -> SiteResult<()> {
        self.nodes.borrow_mut()[element.0].markup = Some(markup.to_string());
        Ok(())
    }

    fn set_visible(&self, element: &NodeId, visible: bool) -> SiteResult<()> {
        self.nodes.borrow_mut()[element.0].visible = visible;
        Ok(())
    }

    fn set_class(&self, element: &NodeId, class: &str, enabled: bool) -> SiteResult<()> {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[element.0].classes;
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
        Ok(())
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) -> SiteResult<()> {
        self.nodes.borrow_mut()[element.0]
            .styles
            .insert(property.to_string(), value.to_string());
        Ok(())
    }

    fn append(&self, parent: &NodeId, child: &NodeId) -> SiteResult<()> {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(previous) = nodes[child.0].parent {
            nodes[previous.0].children.retain(|id| id != child);
        }
        nodes[parent.0].children.push(*child);
        nodes[child.0].parent = Some(*parent);
        Ok(())
    }

    fn listen(&self, element: &NodeId, event: UiEvent, handler: Handler) -> SiteResult<()> {
        self.listeners.borrow_mut().push(Listener {
            node: *element,
            event,
            handler: Some(handler),
        });
        Ok(())
    }

    fn defer(&self, delay_ms: u32, task: Task) -> SiteResult<()> {
        self.deferred.borrow_mut().push_back((delay_ms, task));
        Ok(())
    }
}

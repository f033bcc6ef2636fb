// src/dom/mod.rs
//! A small single-threaded document model: an arena of element and text
//! nodes behind a cloneable [`Document`] handle, with CSS selectors,
//! bubbling events and HTML import/export.
pub mod arena;
pub mod event;
pub mod html;

use log::{debug, trace};
use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

pub use self::arena::{ElementData, NodeData, NodeId};
pub use self::event::{Event, EventKind, Handler};

use self::arena::Tree;
use self::event::Listener;
use crate::error::ViewError;

/// Properties for [`Document::create_element`].
#[derive(Debug, Clone, Default)]
pub struct ElementProps {
    /// Space separated class list.
    pub class_name: Option<String>,
    pub text: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

impl ElementProps {
    pub fn class(class_name: &str) -> Self {
        ElementProps {
            class_name: Some(class_name.to_string()),
            ..Default::default()
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }
}

fn is_control(el: &ElementData) -> bool {
    matches!(el.tag.as_str(), "button" | "input" | "select" | "textarea")
}

/// Shared handle to a node tree. Cloning the handle does not copy the tree.
#[derive(Clone, Default)]
pub struct Document {
    tree: Rc<RefCell<Tree>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn tree(&self) -> Ref<'_, Tree> {
        self.tree.borrow()
    }

    pub fn len(&self) -> usize {
        self.tree().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn node(&self, id: NodeId) -> Option<NodeData> {
        self.tree().get(id).cloned()
    }

    // ----- construction -------------------------------------------------

    pub fn create_element(&self, tag: &str, props: ElementProps) -> NodeId {
        let mut el = ElementData::new(tag);
        if let Some(class_name) = &props.class_name {
            el.classes = class_name.split_whitespace().map(str::to_string).collect();
        }
        el.attributes = props.attributes;
        let mut tree = self.tree.borrow_mut();
        let id = tree.create(NodeData::Element(el));
        if let Some(text) = &props.text {
            tree.set_text(id, text);
        }
        id
    }

    pub fn create_text(&self, text: &str) -> NodeId {
        self.tree
            .borrow_mut()
            .create(NodeData::Text(text.to_string()))
    }

    /// Shallow clones copy the node itself (tag, classes, attributes, style)
    /// without children; deep clones copy the whole subtree.
    pub fn clone_node(&self, id: NodeId, deep: bool) -> Option<NodeId> {
        self.tree.borrow_mut().clone_node(id, deep)
    }

    /// Deep copy of the first element inside `<template id="...">`.
    pub fn template(&self, template_id: &str) -> Result<NodeId, ViewError> {
        let content = {
            let tree = self.tree();
            let found = tree
                .all()
                .find(|id| {
                    tree.element(*id).is_some_and(|el| {
                        el.tag == "template"
                            && el.attributes.get("id").map(String::as_str) == Some(template_id)
                    })
                })
                .and_then(|template| {
                    tree.children(template)
                        .iter()
                        .copied()
                        .find(|c| tree.element(*c).is_some())
                });
            found
        };
        content
            .and_then(|c| self.clone_node(c, true))
            .ok_or_else(|| ViewError::MissingTemplate(template_id.to_string()))
    }

    // ----- lookup -------------------------------------------------------

    /// First match below `root`. Selectors are CSS as understood by
    /// `scraper`, scoped to the subtree rooted at `root`.
    pub fn find_optional(&self, selector: &str, root: NodeId) -> Result<Option<NodeId>, ViewError> {
        Ok(self.find_all(selector, root)?.into_iter().next())
    }

    pub fn find_required(&self, selector: &str, root: NodeId) -> Result<NodeId, ViewError> {
        self.find_optional(selector, root)?
            .ok_or_else(|| ViewError::MissingNode {
                selector: selector.to_string(),
            })
    }

    pub fn find_all(&self, selector: &str, root: NodeId) -> Result<Vec<NodeId>, ViewError> {
        let parsed = html::parse_selector(selector)?;
        Ok(html::select(&self.tree(), root, &parsed))
    }

    // ----- structure ----------------------------------------------------

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.tree().parent(id)
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.tree().children(id).to_vec()
    }

    /// Child elements only, skipping text nodes.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        let tree = self.tree();
        tree.children(id)
            .iter()
            .copied()
            .filter(|c| tree.element(*c).is_some())
            .collect()
    }

    /// Whether `node` sits somewhere below `root`.
    pub fn contains(&self, root: NodeId, node: NodeId) -> bool {
        self.tree().is_descendant(node, root)
    }

    pub fn append_child(&self, parent: NodeId, child: NodeId) {
        self.tree.borrow_mut().append(parent, child);
    }

    pub fn replace_children(&self, parent: NodeId, children: &[NodeId]) {
        let mut tree = self.tree.borrow_mut();
        tree.clear_children(parent);
        for &child in children {
            tree.append(parent, child);
        }
        trace!("replaced children of {:?} with {} node(s)", parent, children.len());
    }

    pub fn replace_with(&self, node: NodeId, replacements: &[NodeId]) -> bool {
        self.tree.borrow_mut().replace_with(node, replacements)
    }

    pub fn detach(&self, node: NodeId) {
        self.tree.borrow_mut().detach(node);
    }

    /// Detaches `node` and frees its whole subtree. Listeners on freed nodes
    /// are dropped and their ids may be handed out again.
    pub fn remove(&self, node: NodeId) {
        self.tree.borrow_mut().remove(node);
        trace!("removed {:?}", node);
    }

    // ----- content ------------------------------------------------------

    pub fn text_content(&self, id: NodeId) -> String {
        self.tree().text_content(id)
    }

    pub fn set_text(&self, id: NodeId, text: &str) {
        self.tree.borrow_mut().set_text(id, text);
    }

    pub fn tag(&self, id: NodeId) -> Option<String> {
        self.tree().element(id).map(|el| el.tag.clone())
    }

    // ----- classes ------------------------------------------------------

    pub fn classes(&self, id: NodeId) -> Vec<String> {
        self.tree()
            .element(id)
            .map(|el| el.classes.clone())
            .unwrap_or_default()
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.tree().element(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&self, id: NodeId, class: &str) {
        if let Some(el) = self.tree.borrow_mut().element_mut(id) {
            el.add_class(class);
        }
    }

    pub fn remove_class(&self, id: NodeId, class: &str) {
        if let Some(el) = self.tree.borrow_mut().element_mut(id) {
            el.remove_class(class);
        }
    }

    pub fn toggle_class(&self, id: NodeId, class: &str, force: bool) {
        if force {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    /// Replaces the whole class list.
    pub fn set_classes<I, S>(&self, id: NodeId, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(el) = self.tree.borrow_mut().element_mut(id) {
            el.classes.clear();
            for class in classes {
                let class = class.into();
                if !el.has_class(&class) {
                    el.classes.push(class);
                }
            }
        }
    }

    // ----- attributes, style, form state -----------------------------------

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<String> {
        self.tree()
            .element(id)
            .and_then(|el| el.attributes.get(name).cloned())
    }

    pub fn set_attribute(&self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.tree.borrow_mut().element_mut(id) {
            el.attributes.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attribute(&self, id: NodeId, name: &str) {
        if let Some(el) = self.tree.borrow_mut().element_mut(id) {
            el.attributes.remove(name);
        }
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.tree()
            .element(id)
            .is_some_and(|el| el.attributes.contains_key(name))
    }

    /// Boolean attribute such as `disabled`: present iff `force`.
    pub fn toggle_attribute(&self, id: NodeId, name: &str, force: bool) {
        if force {
            self.set_attribute(id, name, "");
        } else {
            self.remove_attribute(id, name);
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<String> {
        self.tree()
            .element(id)
            .and_then(|el| el.style.get(property).cloned())
    }

    /// `None` removes the property.
    pub fn set_style(&self, id: NodeId, property: &str, value: Option<&str>) {
        if let Some(el) = self.tree.borrow_mut().element_mut(id) {
            match value {
                Some(value) => {
                    el.style.insert(property.to_string(), value.to_string());
                }
                None => {
                    el.style.remove(property);
                }
            }
        }
    }

    pub fn value(&self, id: NodeId) -> String {
        self.attribute(id, "value").unwrap_or_default()
    }

    pub fn set_value(&self, id: NodeId, value: &str) {
        self.set_attribute(id, "value", value);
    }

    pub fn focus(&self, id: NodeId) {
        let mut tree = self.tree.borrow_mut();
        if tree.exists(id) {
            tree.focused = Some(id);
        }
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.tree().focused
    }

    // ----- events -------------------------------------------------------

    pub fn add_listener<F>(&self, node: NodeId, kind: EventKind, handler: F)
    where
        F: Fn(&Document, &Event) + 'static,
    {
        self.tree.borrow_mut().listeners.push(Listener {
            node,
            kind,
            handler: Rc::new(handler),
        });
    }

    pub fn listener_count(&self, node: NodeId, kind: EventKind) -> usize {
        self.tree()
            .listeners
            .iter()
            .filter(|l| l.node == node && l.kind == kind)
            .count()
    }

    /// Fires `kind` at `target` and bubbles it up through the ancestors.
    /// Returns `false` when a listener prevented the default action.
    ///
    /// An unprevented click on a submit button inside a form submits that form.
    /// Clicks on a disabled control, or on anything inside one, are swallowed.
    pub fn dispatch(&self, target: NodeId, kind: EventKind) -> bool {
        if kind == EventKind::Click && self.inside_disabled_control(target) {
            debug!("click on disabled {:?} ignored", target);
            return true;
        }
        let event = Event::new(kind, target);
        let path: Vec<NodeId> = {
            let tree = self.tree();
            std::iter::once(target).chain(tree.ancestors(target)).collect()
        };
        debug!("dispatching {} at {:?}", kind, target);

        for node in path {
            let handlers: Vec<Handler> = self
                .tree()
                .listeners
                .iter()
                .filter(|l| l.node == node && l.kind == kind)
                .map(|l| l.handler.clone())
                .collect();
            event.set_current_target(node);
            for handler in handlers {
                handler(self, &event);
            }
            if event.propagation_stopped() {
                break;
            }
        }

        if event.default_prevented() {
            return false;
        }
        if kind == EventKind::Click {
            if let Some(form) = self.submitted_form(target) {
                return self.dispatch(form, EventKind::Submit);
            }
        }
        true
    }

    fn inside_disabled_control(&self, target: NodeId) -> bool {
        let tree = self.tree();
        let disabled = |el: &ElementData| el.attributes.contains_key("disabled");
        if tree.element(target).is_some_and(disabled) {
            return true;
        }
        std::iter::once(target)
            .chain(tree.ancestors(target))
            .filter_map(|id| tree.element(id))
            .find(|el| is_control(el))
            .is_some_and(disabled)
    }

    fn submitted_form(&self, target: NodeId) -> Option<NodeId> {
        let tree = self.tree();
        let path: Vec<NodeId> = std::iter::once(target).chain(tree.ancestors(target)).collect();
        let button = path.iter().copied().find(|id| {
            tree.element(*id).is_some_and(|el| {
                (el.tag == "button"
                    && !matches!(
                        el.attributes.get("type").map(String::as_str),
                        Some("button") | Some("reset")
                    ))
                    || (el.tag == "input"
                        && el.attributes.get("type").map(String::as_str) == Some("submit"))
            })
        })?;
        if tree.element(button).is_some_and(|el| el.attributes.contains_key("disabled")) {
            return None;
        }
        tree.ancestors(button)
            .into_iter()
            .find(|id| tree.element(*id).is_some_and(|el| el.tag == "form"))
    }
}

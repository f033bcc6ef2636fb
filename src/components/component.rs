// src/components/component.rs
use std::fmt;

use crate::dom::{Document, NodeId};
use crate::error::ViewError;

/// A view bound to a pre-existing root node, plus the primitives every
/// component uses to patch its subtree.
#[derive(Clone)]
pub struct View {
    doc: Document,
    root: NodeId,
}

impl View {
    pub fn new(doc: &Document, root: NodeId) -> Self {
        View {
            doc: doc.clone(),
            root,
        }
    }

    pub fn doc(&self) -> &Document {
        &self.doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn find_required(&self, selector: &str) -> Result<NodeId, ViewError> {
        self.doc.find_required(selector, self.root)
    }

    pub fn find_optional(&self, selector: &str) -> Result<Option<NodeId>, ViewError> {
        self.doc.find_optional(selector, self.root)
    }

    pub fn set_text(&self, node: NodeId, value: impl fmt::Display) {
        self.doc.set_text(node, &value.to_string());
    }

    pub fn set_visible(&self, node: NodeId) {
        self.doc.set_style(node, "display", None);
    }

    pub fn set_hidden(&self, node: NodeId) {
        self.doc.set_style(node, "display", Some("none"));
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.doc.style(node, "display").as_deref() == Some("none")
    }

    /// Source and alternative text always travel together.
    pub fn set_image(&self, node: NodeId, src: &str, alt: &str) {
        self.doc.set_attribute(node, "src", src);
        self.doc.set_attribute(node, "alt", alt);
    }

    pub fn set_disabled(&self, node: Option<NodeId>, disabled: bool) {
        if let Some(node) = node {
            self.doc.toggle_attribute(node, "disabled", disabled);
        }
    }

    pub fn toggle_class(&self, node: NodeId, class: &str, force: bool) {
        self.doc.toggle_class(node, class, force);
    }
}

/// Something that owns a bound subtree and can be re-rendered from a patch.
///
/// Patches are structs of `Option` fields: `Some` fields are applied in
/// declaration order, `None` fields leave what is on screen untouched.
pub trait Component {
    type Patch;

    fn view(&self) -> &View;

    fn apply(&mut self, patch: Self::Patch);

    fn render(&mut self, patch: Self::Patch) -> NodeId {
        self.apply(patch);
        self.view().root()
    }
}

/// BEM naming for a block: `block__element` and `block__element_modifier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block(String);

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Block(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn element(&self, element: &str) -> String {
        format!("{}__{}", self.0, element)
    }

    pub fn modifier(&self, element: &str, modifier: &str) -> String {
        format!("{}__{}_{}", self.0, element, modifier)
    }

    pub fn selector(&self, element: &str) -> String {
        format!(".{}", self.element(element))
    }
}

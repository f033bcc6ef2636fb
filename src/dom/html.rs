// src/dom/html.rs
use log::trace;
use scraper::{ElementRef, Html, Selector};
use std::fmt::Write;

use super::arena::{ElementData, NodeData, NodeId, Tree};
use super::Document;
use crate::error::ViewError;

/// Carries the arena id of each element through a parse round-trip.
const NODE_MARKER: &str = "data-arena-node";

const VOID_TAGS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta", "source"];

fn parse_style(text: &str) -> impl Iterator<Item = (String, String)> + '_ {
    text.split(';').filter_map(|decl| {
        let (property, value) = decl.split_once(':')?;
        let property = property.trim();
        let value = value.trim();
        (!property.is_empty()).then(|| (property.to_string(), value.to_string()))
    })
}

fn import_element(tree: &mut Tree, source: ElementRef<'_>) -> NodeId {
    let value = source.value();
    let mut el = ElementData::new(value.name());
    for (name, attr) in value.attrs() {
        match name {
            "class" => el.classes = attr.split_whitespace().map(str::to_string).collect(),
            "style" => el.style.extend(parse_style(attr)),
            _ => {
                el.attributes.insert(name.to_string(), attr.to_string());
            }
        }
    }
    let id = tree.create(NodeData::Element(el));

    for child in source.children() {
        if let Some(child_el) = ElementRef::wrap(child) {
            let child_id = import_element(tree, child_el);
            tree.append(id, child_id);
        } else if let Some(text) = child.value().as_text() {
            let text: &str = text;
            if !text.trim().is_empty() {
                let child_id = tree.create(NodeData::Text(text.trim().to_string()));
                tree.append(id, child_id);
            }
        }
    }
    id
}

fn escape(text: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_node(tree: &Tree, id: NodeId, marked: bool, out: &mut String) {
    let el = match tree.get(id) {
        Some(NodeData::Text(text)) => {
            out.push_str(&escape(text, false));
            return;
        }
        Some(NodeData::Element(el)) => el,
        None => return,
    };

    let _ = write!(out, "<{}", el.tag);
    if marked {
        let _ = write!(out, " {}=\"{}\"", NODE_MARKER, id.0);
    }
    if !el.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&el.classes.join(" "), true));
    }
    for (name, value) in &el.attributes {
        if value.is_empty() {
            let _ = write!(out, " {}", name);
        } else {
            let _ = write!(out, " {}=\"{}\"", name, escape(value, true));
        }
    }
    if !el.style.is_empty() {
        let style: Vec<String> = el.style.iter().map(|(p, v)| format!("{}: {}", p, v)).collect();
        let _ = write!(out, " style=\"{}\"", escape(&style.join("; "), true));
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }
    for child in tree.children(id) {
        write_node(tree, *child, marked, out);
    }
    let _ = write!(out, "</{}>", el.tag);
}

pub(crate) fn parse_selector(selector: &str) -> Result<Selector, ViewError> {
    Selector::parse(selector).map_err(|_| ViewError::InvalidSelector(selector.to_string()))
}

/// Elements below `root` matching `selector`, in document order. Matching is
/// scoped to the subtree: `root` is the outermost element a combinator sees.
pub(crate) fn select(tree: &Tree, root: NodeId, selector: &Selector) -> Vec<NodeId> {
    if tree.element(root).is_none() {
        return Vec::new();
    }
    let mut markup = String::new();
    write_node(tree, root, true, &mut markup);
    let mirror = Html::parse_fragment(&markup);
    let found: Vec<NodeId> = mirror
        .select(selector)
        .filter_map(|el| el.value().attr(NODE_MARKER)?.parse().ok())
        .map(NodeId)
        .filter(|id| *id != root && tree.exists(*id))
        .collect();
    trace!("selected {} node(s) below {:?}", found.len(), root);
    found
}

impl Document {
    /// Parses an HTML fragment into detached nodes and returns the top-level
    /// elements. Whitespace-only text is dropped.
    pub fn import_html(&self, html: &str) -> Vec<NodeId> {
        let fragment = Html::parse_fragment(html);
        let mut tree = self.tree.borrow_mut();
        let mut imported = Vec::new();
        for el in fragment.root_element().children().filter_map(ElementRef::wrap) {
            imported.push(import_element(&mut tree, el));
        }
        imported
    }

    /// Serializes `node` and its subtree back to HTML.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        write_node(&self.tree.borrow(), node, false, &mut out);
        out
    }
}

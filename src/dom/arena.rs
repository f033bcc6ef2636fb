// src/dom/arena.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::event::Listener;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    pub tag: String,
    pub classes: Vec<String>,
    /// Everything except `class` and `style`, which have their own fields.
    pub attributes: BTreeMap<String, String>,
    pub style: BTreeMap<String, String>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        ElementData {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Element(ElementData),
    Text(String),
}

/// Backing storage for a document. A detached node stays addressable until
/// it is removed; removal frees the whole subtree and its ids are recycled.
/// Ids that were never allocated, or were freed, are ignored by every
/// mutation.
#[derive(Default)]
pub(crate) struct Tree {
    nodes: Vec<Option<NodeData>>,
    parents: Vec<Option<NodeId>>,
    children: Vec<Vec<NodeId>>,
    free_list: Vec<u32>,
    pub(crate) listeners: Vec<Listener>,
    pub(crate) focused: Option<NodeId>,
}

impl Tree {
    pub fn create(&mut self, data: NodeData) -> NodeId {
        if let Some(index) = self.free_list.pop() {
            let slot = index as usize;
            self.nodes[slot] = Some(data);
            self.parents[slot] = None;
            self.children[slot].clear();
            return NodeId(index);
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(data));
        self.parents.push(None);
        self.children.push(Vec::new());
        id
    }

    /// Live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn exists(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: NodeId) -> Option<&NodeData> {
        self.nodes.get(id.index())?.as_ref()
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.get(id)? {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match self.nodes.get_mut(id.index())?.as_mut()? {
            NodeData::Element(el) => Some(el),
            NodeData::Text(_) => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        *self.parents.get(id.index())?
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut current = self.parent(id);
        while let Some(parent) = current {
            chain.push(parent);
            current = self.parent(parent);
        }
        chain
    }

    /// Pre-order descendants of `root`, excluding `root`.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    pub fn is_descendant(&self, node: NodeId, root: NodeId) -> bool {
        self.ancestors(node).contains(&root)
    }

    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.parent(id) {
            self.children[parent.index()].retain(|c| *c != id);
            self.parents[id.index()] = None;
        }
    }

    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        if !self.exists(parent) || !self.exists(child) {
            return;
        }
        if parent == child || self.is_descendant(parent, child) {
            return;
        }
        self.detach(child);
        self.children[parent.index()].push(child);
        self.parents[child.index()] = Some(parent);
    }

    /// Detaches every child of `parent` and returns them.
    pub fn clear_children(&mut self, parent: NodeId) -> Vec<NodeId> {
        if !self.exists(parent) {
            return Vec::new();
        }
        let old = std::mem::take(&mut self.children[parent.index()]);
        for child in &old {
            self.parents[child.index()] = None;
        }
        old
    }

    /// Swaps `node` for `replacements` in its parent. Returns `false`, and
    /// changes nothing, when `node` is detached, an id is unknown, or a
    /// replacement is an ancestor of `node`.
    pub fn replace_with(&mut self, node: NodeId, replacements: &[NodeId]) -> bool {
        if !self.exists(node) || !replacements.iter().all(|r| self.exists(*r)) {
            return false;
        }
        let Some(parent) = self.parent(node) else {
            return false;
        };
        if replacements
            .iter()
            .any(|&r| r == parent || self.is_descendant(parent, r))
        {
            return false;
        }
        for &r in replacements {
            if r != node {
                self.detach(r);
            }
        }
        let Some(position) = self.children[parent.index()].iter().position(|c| *c == node) else {
            return false;
        };
        self.children[parent.index()].splice(position..=position, replacements.iter().copied());
        self.parents[node.index()] = None;
        for &r in replacements {
            self.parents[r.index()] = Some(parent);
        }
        true
    }

    /// Detaches `id` and frees it with its whole subtree, dropping the
    /// listeners registered on any freed node.
    pub fn remove(&mut self, id: NodeId) {
        if !self.exists(id) {
            return;
        }
        self.detach(id);
        let mut freed = self.descendants(id);
        freed.push(id);
        for node in &freed {
            let slot = node.index();
            self.nodes[slot] = None;
            self.parents[slot] = None;
            self.children[slot].clear();
            self.free_list.push(node.0);
        }
        self.listeners.retain(|l| !freed.contains(&l.node));
        if self.focused.is_some_and(|f| freed.contains(&f)) {
            self.focused = None;
        }
    }

    /// Reuses a lone text child when there is one; otherwise frees the old
    /// children before inserting the new text.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        match self.nodes.get_mut(id.index()).and_then(Option::as_mut) {
            None => return,
            Some(NodeData::Text(content)) => {
                *content = text.to_string();
                return;
            }
            Some(NodeData::Element(_)) => {}
        }

        if let [only] = self.children(id) {
            let only = *only;
            if let Some(Some(NodeData::Text(content))) = self.nodes.get_mut(only.index()) {
                if text.is_empty() {
                    self.remove(only);
                } else {
                    *content = text.to_string();
                }
                return;
            }
        }

        for child in self.clear_children(id) {
            self.remove(child);
        }
        if !text.is_empty() {
            let child = self.create(NodeData::Text(text.to_string()));
            self.append(id, child);
        }
    }

    pub fn text_content(&self, id: NodeId) -> String {
        if let Some(NodeData::Text(content)) = self.get(id) {
            return content.clone();
        }
        self.descendants(id)
            .into_iter()
            .filter_map(|d| match self.get(d) {
                Some(NodeData::Text(content)) => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clone_node(&mut self, id: NodeId, deep: bool) -> Option<NodeId> {
        let data = self.get(id)?.clone();
        let copy = self.create(data);
        if deep {
            let children = self.children(id).to_vec();
            for child in children {
                if let Some(child_copy) = self.clone_node(child, true) {
                    self.append(copy, child_copy);
                }
            }
        }
        Some(copy)
    }

    pub fn all(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len())
            .map(|i| NodeId(i as u32))
            .filter(|id| self.exists(*id))
    }
}

// src/components/card.rs
use log::{debug, trace};
use serde::Deserialize;
use std::rc::Rc;

use super::component::{Block, Component, View};
use crate::dom::{Document, Event, EventKind, NodeId};
use crate::domain::Description;
use crate::error::ViewError;

pub type ClickHandler = Rc<dyn Fn(&Event)>;

#[derive(Clone, Default)]
pub struct CardActions {
    pub on_click: Option<ClickHandler>,
}

impl CardActions {
    pub fn on_click<F>(handler: F) -> Self
    where
        F: Fn(&Event) + 'static,
    {
        CardActions {
            on_click: Some(Rc::new(handler)),
        }
    }
}

/// Where a card's click action is attached, decided once at bind time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionSurface {
    None,
    Button(NodeId),
    Container(NodeId),
    Selector(NodeId),
}

impl InteractionSurface {
    fn target(self) -> Option<(NodeId, EventKind)> {
        match self {
            InteractionSurface::None => None,
            InteractionSurface::Button(node) | InteractionSurface::Container(node) => {
                Some((node, EventKind::Click))
            }
            InteractionSurface::Selector(node) => Some((node, EventKind::Change)),
        }
    }
}

/// What a card falls back to when its template has no button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    Container,
    Selector(Option<NodeId>),
}

/// The per-kind part of a card: binds its own nodes and renders the status.
pub trait StatusSlot: Sized {
    type Status;

    const BLOCK: &'static str;

    fn bind(view: &View, block: &Block) -> Result<Self, ViewError>;

    fn fallback(&self) -> Fallback {
        Fallback::Container
    }

    fn render(&mut self, view: &View, status: Self::Status);
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CardPatch<T> {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<Description>,
    pub image: Option<String>,
    pub status: Option<T>,
}

impl<T> Default for CardPatch<T> {
    fn default() -> Self {
        CardPatch {
            id: None,
            title: None,
            description: None,
            image: None,
            status: None,
        }
    }
}

pub struct Card<S: StatusSlot> {
    view: View,
    block: Block,
    title: NodeId,
    image: NodeId,
    /// Nodes currently occupying the description slot; empty when the
    /// template has none.
    description: Vec<NodeId>,
    button: Option<NodeId>,
    surface: InteractionSurface,
    slot: S,
}

impl<S: StatusSlot> Card<S> {
    pub fn bind(doc: &Document, container: NodeId, actions: CardActions) -> Result<Self, ViewError> {
        Self::bind_block(S::BLOCK, doc, container, actions)
    }

    pub fn bind_block(
        block_name: &str,
        doc: &Document,
        container: NodeId,
        actions: CardActions,
    ) -> Result<Self, ViewError> {
        let view = View::new(doc, container);
        let block = Block::new(block_name);

        let title = view.find_required(&block.selector("title"))?;
        let image = view.find_required(&block.selector("image"))?;
        let button = view.find_optional(&block.selector("button"))?;
        let description = view.find_optional(&block.selector("description"))?;
        let slot = S::bind(&view, &block)?;

        let surface = match button {
            Some(button) => InteractionSurface::Button(button),
            None => match slot.fallback() {
                Fallback::Container => InteractionSurface::Container(container),
                Fallback::Selector(Some(selector)) => InteractionSurface::Selector(selector),
                Fallback::Selector(None) => InteractionSurface::None,
            },
        };

        if let (Some(on_click), Some((node, kind))) = (actions.on_click, surface.target()) {
            doc.add_listener(node, kind, move |_, event| on_click(event));
        }

        debug!(
            "bound {} card at {:?}: surface {:?}, description {}",
            block.name(),
            container,
            surface,
            if description.is_some() { "present" } else { "absent" }
        );

        Ok(Card {
            view,
            block,
            title,
            image,
            description: description.into_iter().collect(),
            button,
            surface,
            slot,
        })
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn surface(&self) -> InteractionSurface {
        self.surface
    }

    pub fn button(&self) -> Option<NodeId> {
        self.button
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn id(&self) -> String {
        self.view
            .doc()
            .attribute(self.view.root(), "data-id")
            .unwrap_or_default()
    }

    pub fn set_id(&mut self, id: &str) {
        self.view.doc().set_attribute(self.view.root(), "data-id", id);
    }

    pub fn title(&self) -> String {
        self.view.doc().text_content(self.title)
    }

    pub fn set_title(&mut self, title: &str) {
        self.view.set_text(self.title, title);
    }

    /// Alternative text comes from the title currently on screen.
    pub fn set_image(&mut self, src: &str) {
        let alt = self.title();
        self.view.set_image(self.image, src, &alt);
    }

    /// Current description nodes, in document order.
    pub fn description_nodes(&self) -> &[NodeId] {
        &self.description
    }

    pub fn set_description(&mut self, description: Description) {
        let Some(&first) = self.description.first() else {
            return;
        };
        let doc = self.view.doc().clone();
        let paragraphs = match description {
            Description::Paragraphs(paragraphs) if !paragraphs.is_empty() => paragraphs,
            Description::Paragraphs(_) => vec![String::new()],
            Description::Text(text) => {
                self.view.set_text(first, text);
                for extra in self.description.drain(1..) {
                    doc.remove(extra);
                }
                return;
            }
        };

        let nodes: Vec<NodeId> = paragraphs
            .iter()
            .filter_map(|paragraph| {
                let node = doc.clone_node(first, false)?;
                doc.set_text(node, paragraph);
                Some(node)
            })
            .collect();
        if !doc.replace_with(first, &nodes) {
            for node in nodes {
                doc.remove(node);
            }
            return;
        }
        doc.remove(first);
        for extra in self.description.drain(1..) {
            doc.remove(extra);
        }
        self.description = nodes;
    }

    pub fn set_status(&mut self, status: S::Status) {
        self.slot.render(&self.view, status);
    }
}

impl<S: StatusSlot> Component for Card<S> {
    type Patch = CardPatch<S::Status>;

    fn view(&self) -> &View {
        &self.view
    }

    fn apply(&mut self, patch: Self::Patch) {
        if let Some(id) = patch.id {
            trace!("{} card id", self.block.name());
            self.set_id(&id);
        }
        if let Some(title) = patch.title {
            trace!("{} card title", self.block.name());
            self.set_title(&title);
        }
        if let Some(description) = patch.description {
            trace!("{} card description", self.block.name());
            self.set_description(description);
        }
        if let Some(image) = patch.image {
            trace!("{} card image", self.block.name());
            self.set_image(&image);
        }
        if let Some(status) = patch.status {
            trace!("{} card status", self.block.name());
            self.set_status(status);
        }
    }
}

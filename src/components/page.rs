// src/components/page.rs
use log::trace;
use serde::Deserialize;
use std::rc::Rc;

use super::component::{Component, View};
use crate::dom::{Document, EventKind, NodeId};
use crate::error::ViewError;
use crate::events::{Events, BIDS_OPEN};

pub const LOCKED_CLASS: &str = "page__wrapper_locked";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PagePatch {
    #[serde(skip)]
    pub catalog: Option<Vec<NodeId>>,
    pub locked: Option<bool>,
    pub counter: Option<usize>,
}

/// Page shell: catalog grid, basket counter and scroll lock.
pub struct Page {
    view: View,
    catalog: NodeId,
    wrapper: NodeId,
    counter: NodeId,
    basket: NodeId,
}

impl Page {
    pub fn new(doc: &Document, container: NodeId, events: Rc<dyn Events>) -> Result<Self, ViewError> {
        let view = View::new(doc, container);
        let page = Page {
            catalog: view.find_required(".catalog__items")?,
            basket: view.find_required(".header__basket")?,
            counter: view.find_required(".header__basket-counter")?,
            wrapper: view.find_required(".page__wrapper")?,
            view,
        };

        doc.add_listener(page.basket, EventKind::Click, move |_, _| {
            events.emit(BIDS_OPEN, None);
        });

        Ok(page)
    }

    pub fn basket(&self) -> NodeId {
        self.basket
    }

    pub fn wrapper(&self) -> NodeId {
        self.wrapper
    }

    pub fn set_counter(&mut self, value: usize) {
        self.view.set_text(self.counter, value);
    }

    pub fn set_catalog(&mut self, items: &[NodeId]) {
        self.view.doc().replace_children(self.catalog, items);
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.view.toggle_class(self.wrapper, LOCKED_CLASS, locked);
    }
}

impl Component for Page {
    type Patch = PagePatch;

    fn view(&self) -> &View {
        &self.view
    }

    fn apply(&mut self, patch: PagePatch) {
        if let Some(catalog) = patch.catalog {
            trace!("page catalog: {} card(s)", catalog.len());
            self.set_catalog(&catalog);
        }
        if let Some(locked) = patch.locked {
            trace!("page locked: {}", locked);
            self.set_locked(locked);
        }
        if let Some(counter) = patch.counter {
            trace!("page counter: {}", counter);
            self.set_counter(counter);
        }
    }
}

// src/components/basket.rs
use log::{debug, trace};
use serde::Deserialize;
use std::rc::Rc;

use super::component::{Component, View};
use crate::dom::{Document, ElementProps, EventKind, NodeId};
use crate::domain::LotId;
use crate::error::ViewError;
use crate::events::{Events, ORDER_OPEN};
use crate::money::{format_number, AmountValue};

pub const EMPTY_BASKET_TEXT: &str = "Корзина пуста";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BasketPatch {
    #[serde(skip)]
    pub items: Option<Vec<NodeId>>,
    pub total: Option<AmountValue>,
    pub selected: Option<Vec<LotId>>,
}

pub struct Basket {
    view: View,
    list: NodeId,
    placeholder: NodeId,
    total: Option<NodeId>,
    button: Option<NodeId>,
}

impl Basket {
    pub fn new(doc: &Document, container: NodeId, events: Rc<dyn Events>) -> Result<Self, ViewError> {
        let view = View::new(doc, container);
        let list = view.find_required(".basket__list")?;
        let total = view.find_optional(".basket__total")?;
        let button = view.find_optional(".basket__action")?;

        if let Some(button) = button {
            doc.add_listener(button, EventKind::Click, move |_, _| {
                events.emit(ORDER_OPEN, None);
            });
        } else {
            debug!("basket at {:?} has no action button", container);
        }

        let placeholder = doc.create_element("p", ElementProps::default().text(EMPTY_BASKET_TEXT));
        let mut basket = Basket {
            view,
            list,
            placeholder,
            total,
            button,
        };
        basket.set_items(&[]);
        basket.set_selected(&[]);
        Ok(basket)
    }

    pub fn list(&self) -> NodeId {
        self.list
    }

    pub fn button(&self) -> Option<NodeId> {
        self.button
    }

    /// Items stay owned by the caller: replaced ones are detached, not freed.
    pub fn set_items(&mut self, items: &[NodeId]) {
        let doc = self.view.doc();
        if items.is_empty() {
            doc.replace_children(self.list, &[self.placeholder]);
        } else {
            doc.replace_children(self.list, items);
        }
    }

    /// The action button is enabled iff something is selected.
    pub fn set_selected(&mut self, selected: &[LotId]) {
        self.view.set_disabled(self.button, selected.is_empty());
    }

    pub fn set_total(&mut self, total: AmountValue) {
        if let Some(node) = self.total {
            self.view.set_text(node, format_number(total));
        }
    }
}

impl Component for Basket {
    type Patch = BasketPatch;

    fn view(&self) -> &View {
        &self.view
    }

    fn apply(&mut self, patch: BasketPatch) {
        if let Some(items) = patch.items {
            trace!("basket items: {}", items.len());
            self.set_items(&items);
        }
        if let Some(total) = patch.total {
            trace!("basket total");
            self.set_total(total);
        }
        if let Some(selected) = patch.selected {
            trace!("basket selection: {}", selected.len());
            self.set_selected(&selected);
        }
    }
}

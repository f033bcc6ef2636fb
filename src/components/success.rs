// src/components/success.rs
use serde::Deserialize;
use std::rc::Rc;

use super::component::{Component, View};
use crate::dom::{Document, EventKind, NodeId};
use crate::error::ViewError;
use crate::money::{format_amount, AmountValue};

#[derive(Clone, Default)]
pub struct SuccessActions {
    pub on_click: Option<Rc<dyn Fn()>>,
}

impl SuccessActions {
    pub fn on_click<F>(handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        SuccessActions {
            on_click: Some(Rc::new(handler)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SuccessPatch {
    pub total: Option<AmountValue>,
}

/// Order confirmation dialog with a single dismiss action.
pub struct Success {
    view: View,
    close: NodeId,
    total: Option<NodeId>,
}

impl Success {
    pub fn new(doc: &Document, container: NodeId, actions: SuccessActions) -> Result<Self, ViewError> {
        let view = View::new(doc, container);
        let close = view.find_required(".state__action")?;
        let total = view.find_optional(".state__total")?;

        if let Some(on_click) = actions.on_click {
            doc.add_listener(close, EventKind::Click, move |_, _| on_click());
        }

        Ok(Success { view, close, total })
    }

    pub fn close_button(&self) -> NodeId {
        self.close
    }

    pub fn set_total(&mut self, total: AmountValue) {
        if let Some(node) = self.total {
            self.view.set_text(node, format_amount(total));
        }
    }
}

impl Component for Success {
    type Patch = SuccessPatch;

    fn view(&self) -> &View {
        &self.view
    }

    fn apply(&mut self, patch: SuccessPatch) {
        if let Some(total) = patch.total {
            self.set_total(total);
        }
    }
}

// src/components/auction.rs
use log::{debug, trace};
use serde::Deserialize;
use std::rc::Rc;

use super::component::{Component, View};
use crate::dom::{Document, ElementProps, EventKind, NodeId};
use crate::domain::LotStatus;
use crate::error::ViewError;
use crate::money::{format_number, AmountValue};

pub type BidHandler = Rc<dyn Fn(Option<AmountValue>)>;

#[derive(Clone, Default)]
pub struct AuctionActions {
    /// Receives the parsed bid, or `None` when the input holds no number.
    pub on_submit: Option<BidHandler>,
}

impl AuctionActions {
    pub fn on_submit<F>(handler: F) -> Self
    where
        F: Fn(Option<AmountValue>) + 'static,
    {
        AuctionActions {
            on_submit: Some(Rc::new(handler)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuctionPatch {
    pub time: Option<String>,
    pub label: Option<String>,
    pub next_bid: Option<AmountValue>,
    pub history: Option<Vec<AmountValue>>,
    pub status: Option<LotStatus>,
}

/// Integer prefix of `text`: leading whitespace, optional sign, digits.
pub fn parse_bid(text: &str) -> Option<AmountValue> {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    format!("{}{}", sign, &digits[..end]).parse().ok()
}

/// Detail panel of the lot currently open: timer, history and bid form.
pub struct Auction {
    view: View,
    time: NodeId,
    label: NodeId,
    button: NodeId,
    input: NodeId,
    bids: NodeId,
    history: NodeId,
    form: NodeId,
}

impl Auction {
    pub fn new(doc: &Document, container: NodeId, actions: AuctionActions) -> Result<Self, ViewError> {
        let view = View::new(doc, container);
        let auction = Auction {
            time: view.find_required(".lot__auction-timer")?,
            label: view.find_required(".lot__auction-text")?,
            button: view.find_required(".button")?,
            input: view.find_required(".form__input")?,
            bids: view.find_required(".lot__history-bids")?,
            history: view.find_required(".lot__history")?,
            form: view.find_required(".lot__bid")?,
            view,
        };

        let input = auction.input;
        let on_submit = actions.on_submit;
        doc.add_listener(auction.form, EventKind::Submit, move |doc, event| {
            event.prevent_default();
            let bid = parse_bid(&doc.value(input));
            debug!("bid submitted: {:?}", bid);
            if let Some(on_submit) = &on_submit {
                on_submit(bid);
            }
        });

        Ok(auction)
    }

    pub fn button(&self) -> NodeId {
        self.button
    }

    pub fn input(&self) -> NodeId {
        self.input
    }

    pub fn form(&self) -> NodeId {
        self.form
    }

    pub fn history(&self) -> NodeId {
        self.history
    }

    pub fn bids(&self) -> NodeId {
        self.bids
    }

    pub fn set_time(&mut self, time: &str) {
        self.view.set_text(self.time, time);
    }

    pub fn set_label(&mut self, label: &str) {
        self.view.set_text(self.label, label);
    }

    pub fn set_next_bid(&mut self, value: AmountValue) {
        self.view.doc().set_value(self.input, &value.to_string());
    }

    pub fn set_history(&mut self, history: &[AmountValue]) {
        let doc = self.view.doc();
        let items: Vec<NodeId> = history
            .iter()
            .map(|bid| {
                doc.create_element(
                    "li",
                    ElementProps::class("lot__history-item").text(format_number(*bid)),
                )
            })
            .collect();
        let previous = doc.children(self.bids);
        doc.replace_children(self.bids, &items);
        for item in previous {
            doc.remove(item);
        }
    }

    /// History and bid form are shown only while the lot is active.
    pub fn set_status(&mut self, status: LotStatus) {
        if status.is_active() {
            self.view.set_visible(self.history);
            self.view.set_visible(self.form);
        } else {
            self.view.set_hidden(self.history);
            self.view.set_hidden(self.form);
        }
    }

    pub fn focus(&self) {
        self.view.doc().focus(self.input);
    }
}

impl Component for Auction {
    type Patch = AuctionPatch;

    fn view(&self) -> &View {
        &self.view
    }

    fn apply(&mut self, patch: AuctionPatch) {
        if let Some(time) = patch.time {
            trace!("auction time");
            self.set_time(&time);
        }
        if let Some(label) = patch.label {
            trace!("auction label");
            self.set_label(&label);
        }
        if let Some(next_bid) = patch.next_bid {
            trace!("auction next bid");
            self.set_next_bid(next_bid);
        }
        if let Some(history) = patch.history {
            trace!("auction history: {} bid(s)", history.len());
            self.set_history(&history);
        }
        if let Some(status) = patch.status {
            trace!("auction status {}", status);
            self.set_status(status);
        }
    }
}

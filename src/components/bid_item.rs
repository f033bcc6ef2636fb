// src/components/bid_item.rs
use serde::{Deserialize, Serialize};

use super::card::{Card, Fallback, StatusSlot};
use super::component::{Block, View};
use crate::dom::NodeId;
use crate::error::ViewError;
use crate::money::{format_number, AmountValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidStatus {
    /// Whether this bid is currently the leading one.
    pub status: bool,
    pub amount: AmountValue,
}

pub struct BidStatusSlot {
    amount: NodeId,
    indicator: NodeId,
    selector: Option<NodeId>,
}

impl StatusSlot for BidStatusSlot {
    type Status = BidStatus;

    const BLOCK: &'static str = "bid";

    fn bind(view: &View, block: &Block) -> Result<Self, ViewError> {
        Ok(BidStatusSlot {
            amount: view.find_required(&block.selector("amount"))?,
            indicator: view.find_required(&block.selector("status"))?,
            selector: view.find_optional(&block.selector("selector-input"))?,
        })
    }

    fn fallback(&self) -> Fallback {
        Fallback::Selector(self.selector)
    }

    fn render(&mut self, view: &View, status: BidStatus) {
        view.set_text(self.amount, format_number(status.amount));
        if status.status {
            view.set_visible(self.indicator);
        } else {
            view.set_hidden(self.indicator);
        }
    }
}

pub type BidItem = Card<BidStatusSlot>;

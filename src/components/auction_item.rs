// src/components/auction_item.rs
use super::card::{Card, StatusSlot};
use super::component::{Block, View};
use crate::dom::NodeId;
use crate::error::ViewError;

/// Status slot that holds an arbitrary caller-built node, e.g. a timer.
pub struct LotStatusSlot {
    current: NodeId,
}

impl LotStatusSlot {
    /// The node occupying the slot right now.
    pub fn current(&self) -> NodeId {
        self.current
    }
}

impl StatusSlot for LotStatusSlot {
    type Status = NodeId;

    const BLOCK: &'static str = "lot";

    fn bind(view: &View, block: &Block) -> Result<Self, ViewError> {
        Ok(LotStatusSlot {
            current: view.find_required(&block.selector("status"))?,
        })
    }

    fn render(&mut self, view: &View, content: NodeId) {
        if content != self.current && view.doc().replace_with(self.current, &[content]) {
            self.current = content;
        }
    }
}

pub type AuctionItem = Card<LotStatusSlot>;

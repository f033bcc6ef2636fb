// src/components/catalog_item.rs
use serde::{Deserialize, Serialize};

use super::card::{Card, StatusSlot};
use super::component::{Block, View};
use crate::dom::NodeId;
use crate::domain::LotStatus;
use crate::error::ViewError;

/// Visual variant of a catalog status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogVariant {
    Active,
    Closed,
}

impl CatalogVariant {
    pub fn modifier(self) -> &'static str {
        match self {
            CatalogVariant::Active => "active",
            CatalogVariant::Closed => "closed",
        }
    }
}

/// A lot that is not open for bids yet is styled like a closed one.
impl From<LotStatus> for CatalogVariant {
    fn from(status: LotStatus) -> Self {
        match status {
            LotStatus::Active => CatalogVariant::Active,
            LotStatus::Wait | LotStatus::Closed => CatalogVariant::Closed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItemStatus {
    pub status: CatalogVariant,
    pub label: String,
}

/// The full class list of the status badge for a given variant.
pub fn status_classes(block: &Block, variant: CatalogVariant) -> [String; 2] {
    [
        block.element("status"),
        block.modifier("status", variant.modifier()),
    ]
}

pub struct CatalogStatusSlot {
    block: Block,
    status: NodeId,
}

impl CatalogStatusSlot {
    pub fn node(&self) -> NodeId {
        self.status
    }
}

impl StatusSlot for CatalogStatusSlot {
    type Status = CatalogItemStatus;

    const BLOCK: &'static str = "card";

    fn bind(view: &View, block: &Block) -> Result<Self, ViewError> {
        Ok(CatalogStatusSlot {
            block: block.clone(),
            status: view.find_required(&block.selector("status"))?,
        })
    }

    fn render(&mut self, view: &View, status: CatalogItemStatus) {
        view.set_text(self.status, &status.label);
        view.doc()
            .set_classes(self.status, status_classes(&self.block, status.status));
    }
}

pub type CatalogItem = Card<CatalogStatusSlot>;

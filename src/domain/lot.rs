// src/domain/lot.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::AmountValue;

pub type LotId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotStatus {
    Wait,
    Active,
    Closed,
}

impl LotStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, LotStatus::Active)
    }
}

impl fmt::Display for LotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LotStatus::Wait => write!(f, "wait"),
            LotStatus::Active => write!(f, "active"),
            LotStatus::Closed => write!(f, "closed"),
        }
    }
}

impl FromStr for LotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wait" => Ok(LotStatus::Wait),
            "active" => Ok(LotStatus::Active),
            "closed" => Ok(LotStatus::Closed),
            _ => Err(format!("Unknown lot status: {}", s)),
        }
    }
}

/// Card description: a single paragraph or an ordered list of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Paragraphs(Vec<String>),
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Description::Text(text.to_string())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Description::Text(text)
    }
}

impl From<Vec<String>> for Description {
    fn from(paragraphs: Vec<String>) -> Self {
        Description::Paragraphs(paragraphs)
    }
}

/// Lot record as supplied by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lot {
    pub id: LotId,
    pub title: String,
    #[serde(default)]
    pub about: String,
    pub description: Description,
    pub image: String,
    pub status: LotStatus,
    pub datetime: DateTime<Utc>,
    #[serde(default)]
    pub price: Option<AmountValue>,
    #[serde(default)]
    pub history: Vec<AmountValue>,
}

impl Lot {
    /// Human readable status line shown on catalog cards and in the auction panel.
    pub fn status_label(&self) -> String {
        let at = self.datetime.format("%d.%m %H:%M");
        match self.status {
            LotStatus::Wait => format!("Откроется {}", at),
            LotStatus::Active => format!("Открыто до {}", at),
            LotStatus::Closed => format!("Закрыто {}", at),
        }
    }

    /// Minimal acceptable next bid: one above the last bid (saturating at the
    /// largest amount), or the start price.
    pub fn next_bid(&self) -> AmountValue {
        match self.history.last() {
            Some(last) => last.saturating_add(1),
            None => self.price.unwrap_or(0),
        }
    }
}

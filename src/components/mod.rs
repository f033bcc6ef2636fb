// src/components/mod.rs
pub mod auction;
pub mod auction_item;
pub mod basket;
pub mod bid_item;
pub mod card;
pub mod catalog_item;
pub mod component;
pub mod page;
pub mod success;

pub use self::auction::*;
pub use self::auction_item::*;
pub use self::basket::*;
pub use self::bid_item::*;
pub use self::card::*;
pub use self::catalog_item::*;
pub use self::component::*;
pub use self::page::*;
pub use self::success::*;

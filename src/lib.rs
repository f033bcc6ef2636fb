// src/lib.rs
pub mod components;
pub mod dom;
pub mod domain;
pub mod error;
pub mod events;
pub mod money;

pub use components::*;
pub use dom::{Document, ElementProps, Event, EventKind, NodeId};
pub use domain::*;
pub use error::ViewError;
pub use events::{EventEmitter, Events};
pub use money::*;

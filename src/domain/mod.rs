// src/domain/mod.rs
pub mod lot;

pub use self::lot::*;

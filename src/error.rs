// src/error.rs
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("Missing required node: {selector}")]
    MissingNode { selector: String },

    #[error("Invalid selector: {0:?}")]
    InvalidSelector(String),

    #[error("Missing template: {0}")]
    MissingTemplate(String),
}

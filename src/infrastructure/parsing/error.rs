//! Error types for selector compilation and extraction
//!
//! The one distinction that matters here: a selector that does not *parse* is
//! a configuration error and fails fast, while a selector that matches
//! nothing is a normal data-absence outcome (empty batch or placeholder
//! fields) and is never an error.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ExtractError {
    #[error("Invalid CSS selector for '{field}': {selector} - {reason}")]
    InvalidSelector {
        field: String,
        selector: String,
        reason: String,
    },
}

impl ExtractError {
    /// Create an invalid selector error for a named field role.
    pub fn invalid_selector(field: &str, selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            field: field.to_string(),
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type ExtractResult<T> = Result<T, ExtractError>;

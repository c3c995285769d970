//! Data models for epigraph
//!
//! Defines the core data structure: a Quote. Quotes carry no identifier;
//! two quotes are the "same" item for reconciliation purposes when their
//! text is equal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel filter value meaning "all categories"
pub const ALL_CATEGORY: &str = "all";

/// A quotation with a free-form category label
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    /// The quotation body
    pub text: String,
    /// Free-form category label
    pub category: String,
}

impl Quote {
    /// Create a new quote
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }

    /// Create a quote from user input, trimming surrounding whitespace
    ///
    /// Both fields must be non-empty after trimming.
    pub fn from_input(text: &str, category: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        let category = category.trim();

        if text.is_empty() {
            return Err(ValidationError::EmptyField { field: "text" });
        }
        if category.is_empty() {
            return Err(ValidationError::EmptyField { field: "category" });
        }

        Ok(Self::new(text, category))
    }
}

impl std::fmt::Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" - {}", self.text, self.category)
    }
}

/// A quote was rejected because a required field is empty
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("quote {field} must not be empty")]
    EmptyField { field: &'static str },
}

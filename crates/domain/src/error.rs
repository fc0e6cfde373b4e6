//! Unified error type for the domain layer
//!
//! Record validation reports through `DomainError` so the dataset store can
//! attach collection and record position before surfacing it.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field holds a value outside what the record allows
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A URL-shaped field does not hold an absolute URL
    #[error("Invalid URL in field '{field}': {value}")]
    InvalidUrl { field: &'static str, value: String },
}

impl DomainError {
    /// Creates a validation error for a record that violates its own shape.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("item name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid URL error
    pub fn invalid_url(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidUrl {
            field,
            value: value.into(),
        }
    }
}

//! Cross-cutting error types for Canvo.
//!
//! Domain-specific errors (e.g., `GenerateError`, `ConfigError`) are defined
//! in their respective crates; this module holds only the errors that can
//! originate from the core types themselves.

use thiserror::Error;

/// Errors raised by the core document types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A canvas field required by the all-or-nothing contract is empty.
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

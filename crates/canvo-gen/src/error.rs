//! Generation error types.

use canvo_core::CoreError;
use thiserror::Error;

/// Errors raised by a [`crate::GenerativeBackend`] implementation.
///
/// Classification happens inside the backend client (status codes, API error
/// bodies); the retry loop branches only on [`BackendError::is_transient`],
/// never on message text.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend is temporarily unavailable. Eligible for retry.
    #[error("backend overloaded ({status}): {message}")]
    Overloaded { status: u16, message: String },

    /// The backend rejected the request (auth failure, malformed request,
    /// safety block, ...). Not retried.
    #[error("backend API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// HTTP transport error, including timeouts. Not retried.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered successfully but produced no candidate text.
    #[error("backend returned no candidate text")]
    Empty,
}

impl BackendError {
    /// Whether this failure is a transient overload worth retrying.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Overloaded { .. })
    }
}

/// Errors on the generation attempt path.
///
/// These never escape [`crate::CanvasGenerator::generate`] — the generator
/// logs them and serves the fallback canvas — but they carry the failed field
/// name or backend status so the log line stays diagnosable.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The backend call failed.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The response text was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The parsed canvas violated the nine-field contract.
    #[error(transparent)]
    Canvas(#[from] CoreError),
}

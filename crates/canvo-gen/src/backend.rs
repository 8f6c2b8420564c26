//! Backend abstraction for generative-language completion.

use async_trait::async_trait;

use crate::error::BackendError;

/// A generative-language backend that completes a text prompt.
///
/// Implementations own their transport and error classification; callers see
/// only raw model text or a classified [`BackendError`]. The production
/// implementation is [`crate::GeminiClient`]; tests use scripted stand-ins.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Return the model's text completion for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] classified by the implementation; only
    /// [`BackendError::Overloaded`] is considered transient by callers.
    async fn complete(&self, prompt: &str) -> Result<String, BackendError>;
}

//! The canvas generator: attempt loop, retry, and fallback.

use std::sync::Arc;

use canvo_core::BusinessModelCanvas;

use crate::backend::GenerativeBackend;
use crate::error::GenerateError;
use crate::fallback::fallback_canvas;
use crate::parse::parse_canvas;
use crate::prompt::build_prompt;
use crate::retry::RetryPolicy;

/// Generates validated canvases from a business idea and industry pair.
///
/// Holds no mutable state; concurrent calls are independent and each issues
/// at most one backend request at a time. Input validation (rejecting empty
/// idea/industry) is the caller's responsibility, as is any quota
/// enforcement and whole-operation timeout.
pub struct CanvasGenerator {
    backend: Arc<dyn GenerativeBackend>,
    retry: RetryPolicy,
}

impl CanvasGenerator {
    /// Create a generator over `backend` with the default retry policy.
    #[must_use]
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend,
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Generate a complete nine-field canvas. Never fails.
    ///
    /// On a validated backend response the parsed canvas is returned
    /// unchanged (aside from fence removal). If retries are exhausted or a
    /// non-retryable failure occurs, the error is logged and a deterministic
    /// fallback canvas is served so the caller's flow is never blocked by a
    /// backend outage.
    pub async fn generate(&self, business_idea: &str, industry: &str) -> BusinessModelCanvas {
        match self.try_generate(business_idea, industry).await {
            Ok(canvas) => canvas,
            Err(error) => {
                tracing::warn!(%error, "canvas generation failed, serving fallback canvas");
                fallback_canvas(business_idea, industry)
            }
        }
    }

    /// The strict attempt path: retries overload, surfaces everything else.
    async fn try_generate(
        &self,
        business_idea: &str,
        industry: &str,
    ) -> Result<BusinessModelCanvas, GenerateError> {
        let prompt = build_prompt(business_idea, industry);

        let mut attempt = 0;
        loop {
            tracing::debug!(attempt, "requesting canvas completion");
            match self.backend.complete(&prompt).await {
                Ok(text) => return parse_canvas(&text),
                Err(error) if error.is_transient() && attempt < self.retry.max_retries => {
                    let delay = self.retry.delay_for(attempt);
                    tracing::warn!(
                        attempt,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        %error,
                        "backend overloaded, backing off before retry"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
}

//! # canvo-gen
//!
//! Business Model Canvas generation for Canvo.
//!
//! Turns a free-text business idea plus an industry label into a validated
//! nine-field [`canvo_core::BusinessModelCanvas`] via a generative-language
//! backend:
//! - [`GenerativeBackend`] abstracts the backend; [`GeminiClient`] is the
//!   Gemini REST implementation
//! - transient overload is retried with exponential backoff and jitter
//!   ([`RetryPolicy`])
//! - response text has any code fence stripped before JSON parsing and
//!   nine-field validation
//! - if generation cannot be completed, a deterministic offline fallback
//!   canvas is served instead, so [`CanvasGenerator::generate`] never fails

pub mod backend;
pub mod fallback;
pub mod gemini;
pub mod generator;
pub mod parse;
pub mod prompt;
pub mod retry;

mod error;

pub use backend::GenerativeBackend;
pub use error::{BackendError, GenerateError};
pub use gemini::GeminiClient;
pub use generator::CanvasGenerator;
pub use retry::RetryPolicy;

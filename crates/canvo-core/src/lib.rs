//! # canvo-core
//!
//! Core types and error types for Canvo.
//!
//! This crate provides the foundational types shared across all Canvo crates:
//! - The [`canvas::BusinessModelCanvas`] document and its field contract
//! - The [`record::CanvasRecord`] envelope handed to the document store
//! - Cross-cutting error types

pub mod canvas;
pub mod errors;
pub mod record;

pub use canvas::{BusinessModelCanvas, FIELD_NAMES};
pub use errors::CoreError;
pub use record::CanvasRecord;

//! Canvas storage envelope.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::canvas::BusinessModelCanvas;

/// A generated canvas with the owner and title the storage layer attaches.
///
/// The generator produces a bare [`BusinessModelCanvas`] with no identity of
/// its own; callers wrap it in a record before persisting. Canvo only defines
/// the shape here — the document store itself is an external collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CanvasRecord {
    pub user_id: String,
    pub title: String,
    pub data: BusinessModelCanvas,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CanvasRecord {
    /// Wrap a canvas for storage with both timestamps set to now.
    #[must_use]
    pub fn new(user_id: impl Into<String>, title: impl Into<String>, data: BusinessModelCanvas) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            title: title.into(),
            data,
            created_at: now,
            updated_at: now,
        }
    }

    /// Default title when the caller supplies none.
    #[must_use]
    pub fn default_title(industry: &str) -> String {
        format!("{industry} Business Model Canvas")
    }
}

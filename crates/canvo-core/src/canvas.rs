//! The Business Model Canvas document.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The nine canvas field names, in canonical presentation order.
pub const FIELD_NAMES: [&str; 9] = [
    "key_partners",
    "key_activities",
    "value_propositions",
    "customer_relationships",
    "customer_segments",
    "key_resources",
    "channels",
    "cost_structure",
    "revenue_streams",
];

/// A nine-field Business Model Canvas. Each field is an ordered list of
/// short bullet points.
///
/// A canvas is only considered usable when every field is non-empty; partial
/// canvases are rejected as a whole (see [`BusinessModelCanvas::validate`]).
/// The generator never mutates a canvas after construction; downstream
/// editing belongs to the storage layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct BusinessModelCanvas {
    pub key_partners: Vec<String>,
    pub key_activities: Vec<String>,
    pub value_propositions: Vec<String>,
    pub customer_relationships: Vec<String>,
    pub customer_segments: Vec<String>,
    pub key_resources: Vec<String>,
    pub channels: Vec<String>,
    pub cost_structure: Vec<String>,
    pub revenue_streams: Vec<String>,
}

impl BusinessModelCanvas {
    /// Iterate the nine fields as `(name, bullets)` pairs in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        [
            ("key_partners", self.key_partners.as_slice()),
            ("key_activities", self.key_activities.as_slice()),
            ("value_propositions", self.value_propositions.as_slice()),
            (
                "customer_relationships",
                self.customer_relationships.as_slice(),
            ),
            ("customer_segments", self.customer_segments.as_slice()),
            ("key_resources", self.key_resources.as_slice()),
            ("channels", self.channels.as_slice()),
            ("cost_structure", self.cost_structure.as_slice()),
            ("revenue_streams", self.revenue_streams.as_slice()),
        ]
        .into_iter()
    }

    /// Name of the first empty field in canonical order, if any.
    #[must_use]
    pub fn missing_field(&self) -> Option<&'static str> {
        self.fields()
            .find(|(_, bullets)| bullets.is_empty())
            .map(|(name, _)| name)
    }

    /// Check the all-or-nothing field contract.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] naming the first empty field.
    pub fn validate(&self) -> Result<(), CoreError> {
        match self.missing_field() {
            Some(field) => Err(CoreError::MissingField {
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }
}

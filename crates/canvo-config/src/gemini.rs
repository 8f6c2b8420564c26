//! Gemini backend configuration.

use serde::{Deserialize, Serialize};

/// Default generation model.
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Default Generative Language API base URL.
fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key for the Generative Language API.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier used for canvas generation.
    #[serde(default = "default_model")]
    pub model: String,

    /// API base URL. Overridable for tests and proxies.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

impl GeminiConfig {
    /// Check if the Gemini config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = GeminiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.base_url.starts_with("https://generativelanguage"));
    }

    #[test]
    fn configured_when_key_set() {
        let config = GeminiConfig {
            api_key: "AIza-test-123".into(),
            ..Default::default()
        };
        assert!(config.is_configured());
    }
}

//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default whole-request HTTP timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

/// Default free-tier generation allowance.
const fn default_free_limit() -> u32 {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Whole-request timeout for backend HTTP calls, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Free-tier generation allowance. Informational for upstream quota
    /// enforcement; the generator itself never reads it.
    #[serde(default = "default_free_limit")]
    pub free_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            free_limit: default_free_limit(),
        }
    }
}

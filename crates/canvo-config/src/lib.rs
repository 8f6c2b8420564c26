//! # canvo-config
//!
//! Layered configuration loading for Canvo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CANVO_*` prefix, `__` as separator)
//! 2. Project-level `.canvo/config.toml`
//! 3. User-level `~/.config/canvo/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CANVO_GEMINI__API_KEY` -> `gemini.api_key`,
//! `CANVO_GENERAL__TIMEOUT_SECS` -> `general.timeout_secs`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use canvo_config::CanvoConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = CanvoConfig::load_with_dotenv().expect("config");
//!
//! // Or without dotenvy (env vars must already be set):
//! let config = CanvoConfig::load().expect("config");
//!
//! if config.gemini.is_configured() {
//!     println!("model: {}", config.gemini.model);
//! }
//! ```

mod error;
mod gemini;
mod general;

pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CanvoConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CanvoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`CanvoConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`CANVO_*` prefix)
    /// 2. `.canvo/config.toml` (project-local)
    /// 3. `~/.config/canvo/config.toml` (user-global)
    /// 4. Default values
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or merge.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI and
    /// tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or merge.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Load configuration with additional external overrides.
    ///
    /// Each `(key, value)` pair is a `CANVO_`-style variable name (e.g.
    /// `CANVO_GEMINI__API_KEY`) applied beneath process environment
    /// variables, so real env vars still win.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or merge.
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let mut figment = Self::figment_base();
        for (key, value) in overrides {
            if let Some(path) = Self::env_key_to_path(key) {
                figment = figment.merge(Serialized::default(&path, value.clone()));
            }
        }
        figment
            .merge(Env::prefixed("CANVO_").split("__"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_base().merge(Env::prefixed("CANVO_").split("__"))
    }

    /// Provider chain without the environment layer.
    fn figment_base() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".canvo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
    }

    /// The Gemini section, required to be configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when the API key is missing and
    /// [`ConfigError::InvalidValue`] for a zero request timeout.
    pub fn require_gemini(&self) -> Result<&GeminiConfig, ConfigError> {
        if !self.gemini.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "gemini".to_string(),
            });
        }
        if self.general.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(&self.gemini)
    }

    /// Map `CANVO_GEMINI__API_KEY` to `gemini.api_key`.
    fn env_key_to_path(key: &str) -> Option<String> {
        let stripped = key.strip_prefix("CANVO_")?;
        Some(stripped.to_ascii_lowercase().replace("__", "."))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("canvo").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        // In tests/build: CARGO_MANIFEST_DIR points to the crate dir.
        // Walk up to find workspace root's .env.
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> workspace root)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}

use anyhow::Context;
use canvo_config::CanvoConfig;

use crate::cli::GlobalFlags;

/// Handle `cnv config`.
pub fn handle(_flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = CanvoConfig::load_with_dotenv().context("failed to load configuration")?;

    println!("gemini.api_key   = {}", mask(&config.gemini.api_key));
    println!("gemini.model     = {}", config.gemini.model);
    println!("gemini.base_url  = {}", config.gemini.base_url);
    println!("general.timeout_secs = {}", config.general.timeout_secs);
    println!("general.free_limit   = {}", config.general.free_limit);
    Ok(())
}

/// Mask a secret, keeping a short recognizable prefix.
fn mask(secret: &str) -> String {
    if secret.is_empty() {
        return "(not set)".to_string();
    }
    let prefix: String = secret.chars().take(6).collect();
    format!("{prefix}...")
}

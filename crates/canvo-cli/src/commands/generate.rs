use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use canvo_config::CanvoConfig;
use canvo_core::CanvasRecord;
use canvo_gen::{CanvasGenerator, GeminiClient};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::output;

/// Handle `cnv generate`.
///
/// Input validation lives here, upstream of the generator: the generator
/// itself accepts its arguments as-is.
pub async fn handle(args: &GenerateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.idea.trim().is_empty() {
        bail!("--idea must not be empty");
    }
    if args.industry.trim().is_empty() {
        bail!("--industry must not be empty");
    }

    let config = CanvoConfig::load_with_dotenv().context("failed to load configuration")?;
    let gemini = config.require_gemini().context(
        "set CANVO_GEMINI__API_KEY or gemini.api_key in .canvo/config.toml",
    )?;

    let backend = GeminiClient::with_timeout(
        gemini.api_key.clone(),
        Duration::from_secs(config.general.timeout_secs),
    )
    .with_model(gemini.model.clone())
    .with_base_url(gemini.base_url.clone());

    tracing::debug!(model = %gemini.model, "generating canvas");
    let generator = CanvasGenerator::new(Arc::new(backend));
    let canvas = generator.generate(&args.idea, &args.industry).await;

    let title = args
        .title
        .clone()
        .unwrap_or_else(|| CanvasRecord::default_title(&args.industry));
    output::print_canvas(&canvas, &title, flags.format)
}

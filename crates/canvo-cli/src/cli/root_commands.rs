use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate a Business Model Canvas from a business idea.
    Generate(GenerateArgs),
    /// Show the resolved configuration (API key masked).
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Free-text description of the business idea.
    #[arg(long)]
    pub idea: String,

    /// Industry label (e.g., "Food & Beverage").
    #[arg(long)]
    pub industry: String,

    /// Canvas title. Defaults to "<industry> Business Model Canvas".
    #[arg(long)]
    pub title: Option<String>,
}

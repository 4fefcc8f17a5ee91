use clap::Parser;
use content_embed_config::OutputFormat;
use std::path::PathBuf;

/// Insert structured content blocks from free-form input.
///
/// With no inputs an interactive editor starts. With inputs, each one is
/// inserted in order and the rendered document is printed.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "content-embed-cli", version, long_about = None)]
pub struct Args {
    /// Path to configuration file (default: ~/.config/content-embed/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for batch mode: text, html, email, mdx or json
    #[arg(long, value_name = "FORMAT", requires = "inputs")]
    pub format: Option<OutputFormat>,

    /// Write the default configuration file and exit
    #[arg(long, conflicts_with_all = ["format", "inputs"])]
    pub init_config: bool,

    /// Inputs to insert, in order
    pub inputs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Batch,
    InitConfig,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.init_config {
            Mode::InitConfig
        } else if self.inputs.is_empty() {
            Mode::Interactive
        } else {
            Mode::Batch
        }
    }
}

//! `cms resolve` command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Request path to resolve (e.g. `/news/launch`).
    path: String,

    /// Path to configuration file (default: auto-discover cms.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML content seed file (overrides config).
    #[arg(short, long)]
    seed_file: Option<PathBuf>,
}

impl ResolveArgs {
    /// Execute the resolve command, printing the resolution as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or content loading fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let menu = super::load_menu(self.config.as_deref(), self.seed_file)?;

        let resolution = menu.resolve(&self.path)?;
        if resolution.is_not_found() {
            output.error(&format!("No content at {}", self.path));
        }
        output.result(&serde_json::to_string_pretty(&resolution)?);

        Ok(())
    }
}

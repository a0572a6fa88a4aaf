//! `cms serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use cms_config::{CliSettings, Config};
use cms_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover cms.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML content seed file (overrides config).
    #[arg(short, long)]
    seed_file: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and resolution logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            seed_file: self.seed_file,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Using config: {}", path.display()));
        }
        output.info(&format!(
            "Content: {}",
            config.content.seed_file.display()
        ));

        let server_config = server_config_from_config(&config);
        output.success(&format!(
            "cms {version} listening on http://{}:{}{}",
            server_config.host, server_config.port, server_config.api_prefix
        ));
        output.info("Press Ctrl+C to stop.");

        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))
    }
}

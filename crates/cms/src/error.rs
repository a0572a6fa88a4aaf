//! CLI error types.

use cms_config::ConfigError;
use cms_menu::MenuError;
use cms_storage::SeedError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Seed(#[from] SeedError),

    #[error("{0}")]
    Menu(#[from] MenuError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Server(String),
}

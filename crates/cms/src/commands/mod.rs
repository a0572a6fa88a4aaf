//! CLI command implementations.

pub(crate) mod menu;
pub(crate) mod resolve;
pub(crate) mod serve;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use cms_config::{CliSettings, Config};
use cms_menu::Menu;
use cms_storage::{ContentLookup, MemoryStore, MenuStore, Seed};

pub(crate) use menu::MenuArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use serve::ServeArgs;

use crate::error::CliError;

/// Load config with an optional seed file override and build a menu engine
/// over the seeded store.
fn load_menu(config_path: Option<&Path>, seed_file: Option<PathBuf>) -> Result<Menu, CliError> {
    let cli_settings = CliSettings {
        seed_file,
        ..CliSettings::default()
    };
    let config = Config::load(config_path, Some(&cli_settings))?;

    let seed = Seed::load(&config.content.seed_file)?;
    tracing::debug!(
        seed = %config.content.seed_file.display(),
        entries = seed.menu.len(),
        "Loaded content"
    );
    let store = Arc::new(MemoryStore::from_seed(seed));
    Ok(Menu::new(
        Arc::clone(&store) as Arc<dyn MenuStore>,
        store as Arc<dyn ContentLookup>,
    ))
}

//! Configuration for the CMS.
//!
//! Settings live in a `cms.toml` file. When no path is given the file is
//! looked up in the working directory and then in each parent directory;
//! without one, defaults apply relative to the working directory.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 7980
//!
//! [content]
//! seed_file = "content.yaml"   # relative to the config file
//!
//! [api]
//! prefix = "/api"              # "" mounts routes at the root
//! ```
//!
//! `server.host` and `content.seed_file` accept `${VAR}` and
//! `${VAR:-default}` references, expanded before relative paths are
//! resolved. [`CliSettings`] override file values after loading.

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "cms.toml";

/// Seed document used when `content.seed_file` is not set.
const DEFAULT_SEED_FILE: &str = "content.yaml";

/// Command line overrides. `None` keeps the configured value.
#[derive(Debug, Default)]
pub struct CliSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Used as given, not resolved against the config directory.
    pub seed_file: Option<PathBuf>,
}

/// Loaded configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub api: ApiConfig,
    /// File the configuration was read from, `None` for defaults.
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// `[server]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7980,
        }
    }
}

/// `[content]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// YAML document the in-memory store is seeded from. Absolute once
    /// loaded from a file.
    pub seed_file: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            seed_file: PathBuf::from(DEFAULT_SEED_FILE),
        }
    }
}

/// `[api]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Path prefix for all routes.
    pub prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            prefix: "/api".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// One or more values are out of range. Lists every problem found.
    #[error("Invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Cannot expand {field}: {message}")]
    EnvVar {
        /// Config key, e.g. `server.host`.
        field: String,
        message: String,
    },
}

/// Find `cms.toml` in `start` or the nearest ancestor that has one.
fn discover(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"))
}

impl Config {
    /// Load the configuration and apply CLI overrides.
    ///
    /// An explicit `config_path` must exist. Without one, `cms.toml` is
    /// discovered from the working directory upwards, falling back to
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, malformed
    /// or invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let cwd = std::env::current_dir().unwrap_or_default();
        let file = match config_path {
            Some(path) if !path.is_file() => return Err(ConfigError::NotFound(path.into())),
            Some(path) => Some(path.to_path_buf()),
            None => discover(&cwd),
        };

        let mut config = match file {
            Some(path) => Self::from_file(&path)?,
            None => Self::default_with_base(&cwd),
        };
        if let Some(settings) = cli_settings {
            config.apply(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Defaults with the seed file resolved against `base`.
    #[must_use]
    pub fn default_with_base(base: &Path) -> Self {
        let mut config = Self::default();
        config.content.seed_file = base.join(DEFAULT_SEED_FILE);
        config
    }

    /// Read, expand and resolve a config file. Validation happens in
    /// [`Config::load`] once overrides are applied.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text)?;

        config.expand()?;
        let dir = path.parent().unwrap_or(Path::new("."));
        config.content.seed_file = dir.join(&config.content.seed_file);
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn apply(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(seed_file) = &settings.seed_file {
            self.content.seed_file.clone_from(seed_file);
        }
    }

    fn expand(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;

        let seed_file = self.content.seed_file.to_string_lossy();
        self.content.seed_file = expand::expand_env(&seed_file, "content.seed_file")?.into();
        Ok(())
    }

    /// Check every value and report all problems at once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] listing each invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.server.host.is_empty() {
            problems.push("server.host cannot be empty".to_owned());
        }
        // Port 0 would bind a random port, never what a config file means
        if self.server.port == 0 {
            problems.push("server.port cannot be 0".to_owned());
        }
        if !is_yaml(&self.content.seed_file) {
            problems.push(format!(
                "content.seed_file must be a .yaml or .yml file, got {}",
                self.content.seed_file.display()
            ));
        }
        let prefix = &self.api.prefix;
        if !prefix.is_empty() && (!prefix.starts_with('/') || prefix.ends_with('/')) {
            problems.push(format!(
                "api.prefix must start with / and not end with /, got {prefix}"
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(problems))
        }
    }
}

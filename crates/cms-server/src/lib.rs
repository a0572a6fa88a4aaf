//! HTTP server for the CMS menu engine.
//!
//! This crate exposes the menu engine over axum:
//! - public endpoints for the resolved menu, the navigation tree,
//!   breadcrumbs and request path resolution
//! - admin endpoints for menu entry CRUD and atomic reordering
//!
//! Every response uses the envelope `{"success": true, "data": ...}` or
//! `{"success": false, "error": "..."}`.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use cms_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7980,
//!         seed_file: PathBuf::from("content.yaml"),
//!         api_prefix: "/api".to_owned(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Client ──HTTP──► axum router (cms-server)
//!                      │
//!                      ├─► /menu, /resolve ──► Menu (cms-menu) ──► ContentLookup, MenuStore
//!                      │
//!                      └─► /admin/menu/* ────► MenuAdmin
//!                                                  │
//!                                                  └─► MemoryStore (seeded from YAML)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use cms_storage::{MemoryStore, Seed};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// YAML document the content store is seeded from.
    pub seed_file: PathBuf,
    /// Path prefix for all API routes.
    pub api_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7980,
            seed_file: PathBuf::from("content.yaml"),
            api_prefix: "/api".to_owned(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the seed can't be loaded or the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let seed = Seed::load(&config.seed_file)?;
    let store = Arc::new(MemoryStore::from_seed(seed));
    tracing::info!(seed = %config.seed_file.display(), "Loaded content");

    let state = Arc::new(AppState::new(store));
    let app = app::create_router(state, &config.api_prefix);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, prefix = %config.api_prefix, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from CMS config.
#[must_use]
pub fn server_config_from_config(config: &cms_config::Config) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        seed_file: config.content.seed_file.clone(),
        api_prefix: config.api.prefix.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let mut config = cms_config::Config::default_with_base(Path::new("/site"));
        config.server.port = 9000;
        config.api.prefix = "/v1".to_owned();

        let server = server_config_from_config(&config);

        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 9000);
        assert_eq!(server.seed_file, PathBuf::from("/site/content.yaml"));
        assert_eq!(server.api_prefix, "/v1");
    }

    #[tokio::test]
    async fn test_run_server_missing_seed_fails() {
        let config = ServerConfig {
            seed_file: PathBuf::from("/nonexistent/content.yaml"),
            ..ServerConfig::default()
        };

        let err = run_server(config).await.unwrap_err();

        assert!(err.to_string().contains("/nonexistent/content.yaml"));
    }

    #[tokio::test]
    async fn test_run_server_invalid_host_fails_after_seed_loads() {
        let dir = tempfile::tempdir().unwrap();
        let seed_file = dir.path().join("content.yaml");
        std::fs::write(&seed_file, "pages: []\nmenu: []\n").unwrap();
        let config = ServerConfig {
            host: "not a host".to_owned(),
            seed_file,
            ..ServerConfig::default()
        };

        let err = run_server(config).await.unwrap_err();

        assert!(err.downcast_ref::<std::net::AddrParseError>().is_some());
    }
}

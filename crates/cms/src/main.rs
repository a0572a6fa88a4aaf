//! CMS CLI - Menu-driven URL resolution.
//!
//! Provides commands for:
//! - `serve`: Start the HTTP API server
//! - `resolve`: Resolve a request path against the menu and print the result
//! - `menu`: Print the navigation tree with computed paths

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{MenuArgs, ResolveArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CMS - Menu-driven URL resolution engine.
#[derive(Parser)]
#[command(name = "cms", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server.
    Serve(ServeArgs),
    /// Resolve a request path and print the result as JSON.
    Resolve(ResolveArgs),
    /// Print the navigation tree.
    Menu(MenuArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(|e| CliError::Server(format!("Failed to create tokio runtime: {e}")))
            .and_then(|rt| rt.block_on(args.execute(VERSION))),
        Commands::Resolve(args) => args.execute(),
        Commands::Menu(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

//! # folio CLI
//!
//! Command-line interface for folio - a personal portfolio site for your
//! terminal.
//!
//! ## Usage
//!
//! - `folio` - Browse the site interactively
//! - `folio /about` - Browse starting at a specific path
//! - `folio render /` - Print a single page and exit
//! - `folio routes` - Show the route table
//!
//! The interactive browser is a full-screen terminal UI powered by iocraft.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod ui;

use commands::{browse_command, render_command, routes_command};

/// folio - a personal portfolio site for your terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A personal portfolio site for your terminal")]
#[command(long_about = None)]
struct Cli {
    /// Path to open the browser at (one of the route table's paths)
    path: Option<String>,

    /// Disable entrance animations
    #[arg(long)]
    no_animation: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single page to stdout and exit
    Render {
        /// Path of the page to render
        #[arg(default_value = "/")]
        path: String,
    },

    /// Show the route table
    Routes {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so they never land in the
    // rendered output
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match (cli.path, cli.command) {
        // A start path only makes sense for the browser
        (Some(_), Some(_)) => {
            tracing::error!("Error: Cannot specify both a path and a subcommand");
            std::process::exit(1);
        }
        (None, Some(Commands::Render { path })) => render_command(&path).await,
        (None, Some(Commands::Routes { json })) => routes_command(json).await,
        // Default to the interactive browser
        (path, None) => browse_command(path.as_deref().unwrap_or("/"), !cli.no_animation).await,
    }
}

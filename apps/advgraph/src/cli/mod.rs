//! # Advancement Graph CLI Module
//!
//! This module implements the CLI interface.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `show` - Print the stored graph document
//! - `load` - Replace the stored graph document from a file
//! - `dump` - Write the stored graph document to a file
//! - `check` - Report duplicate ids and dangling edges

mod commands;

use advgraph_core::AdvGraphError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

/// Default store when `REDIS_URI` is not set.
pub const DEFAULT_STORE_URI: &str = "redis://127.0.0.1:6379";

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Advancement graph server
///
/// Persists the advancement editor's dependency graph in a key-value store
/// and serves it over HTTP.
#[derive(Parser, Debug)]
#[command(name = "advgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Store connection string (redis://..., memory://)
    #[arg(
        short = 'S',
        long = "store",
        env = "REDIS_URI",
        global = true,
        default_value = DEFAULT_STORE_URI,
        hide_env_values = true
    )]
    pub store_uri: String,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Print the stored graph document
    Show,

    /// Replace the stored graph document with the contents of a file
    Load {
        /// Path to the JSON document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Write the stored graph document to a file
    Dump {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Report duplicate ids and dangling edges in the stored document
    Check,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), AdvGraphError> {
    let json_mode = cli.json_mode;
    let store = crate::store::open_store(&cli.store_uri).await?;

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(store, &cli.store_uri, &host, port).await,
        Some(Commands::Show) | None => cmd_show(store.as_ref()).await,
        Some(Commands::Load { input }) => cmd_load(store.as_ref(), &input, json_mode).await,
        Some(Commands::Dump { output }) => cmd_dump(store.as_ref(), &output, json_mode).await,
        Some(Commands::Check) => cmd_check(store.as_ref(), json_mode).await,
    }
}

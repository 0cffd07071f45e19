//! # advgraph - Advancement Graph Server
//!
//! The main binary for the advancement graph store.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 apps/advgraph (THE BINARY)               │
//! │                                                          │
//! │   ┌─────────────┐        ┌──────────────────────────┐    │
//! │   │   CLI       │        │   HTTP API (axum)        │    │
//! │   │  (clap)     │        │   GET/PUT /api/advance.. │    │
//! │   └──────┬──────┘        └────────────┬─────────────┘    │
//! │          └──────────────┬─────────────┘                  │
//! │                         ▼                                │
//! │              ┌─────────────────────┐    ┌─────────────┐  │
//! │              │ GraphStore (Redis)  │    │advgraph-core│  │
//! │              └─────────────────────┘    └─────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! REDIS_URI=redis://127.0.0.1:6379 advgraph server --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! advgraph show
//! advgraph load -i graph.json
//! advgraph check
//! ```

use advgraph::cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // ADVGRAPH_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("ADVGRAPH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "advgraph=info,tower_http=debug".into());

    // Logs go to stderr so `show` output stays clean on stdout.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet && matches!(cli.command, Some(cli::Commands::Server { .. })) {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
   ┌─┐┌┬┐┬  ┬┌─┐┬─┐┌─┐┌─┐┬ ┬
   ├─┤ ││└┐┌┘│ ┬├┬┘├─┤├─┘├─┤
   ┴ ┴─┴┘ └┘ └─┘┴└─┴ ┴┴  ┴ ┴

  Advancement Graph Server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}

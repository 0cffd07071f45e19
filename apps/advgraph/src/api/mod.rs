//! # Advancement Graph HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /api/advancements` - Stored graph document, or `{"nodes":[],"edges":[]}`
//! - `PUT /api/advancements` - Replace the graph document (204, no body)
//! - `GET /api/advancements/integrity` - Duplicate ids and dangling edges
//! - `GET /health` - Health check (pings the store)
//!
//! ## Configuration (Environment Variables)
//!
//! - `ADVGRAPH_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)

mod error;
mod handlers;
mod types;

// Re-export handlers and types for integration tests (via `advgraph::api::*`)
pub use error::ApiError;
pub use handlers::{get_graph_handler, health_handler, integrity_handler, put_graph_handler};
pub use types::{ErrorResponse, HealthResponse};

use crate::store::SharedStore;
use advgraph_core::{AdvGraphError, MAX_DOCUMENT_SIZE};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Path of the single graph resource.
pub const GRAPH_PATH: &str = "/api/advancements";

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state holding the injected store handle.
#[derive(Clone)]
pub struct AppState {
    /// The store every request reads from and writes to.
    pub store: SharedStore,
}

impl AppState {
    /// Create new app state around a store handle.
    #[must_use]
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build CORS layer from environment configuration.
///
/// Reads `ADVGRAPH_CORS_ORIGINS`:
/// - If "*": allows all origins
/// - If not set: defaults to localhost only
/// - Otherwise: parses comma-separated list of allowed origins
fn build_cors_layer() -> CorsLayer {
    let origins_env = std::env::var("ADVGRAPH_CORS_ORIGINS").ok();

    match origins_env.as_deref() {
        Some("*") => {
            tracing::warn!("CORS: Allowing ALL origins (ADVGRAPH_CORS_ORIGINS=*)");
            CorsLayer::permissive()
        }
        Some(origins) => {
            let allowed_origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|s| {
                    let trimmed = s.trim();
                    match trimmed.parse::<HeaderValue>() {
                        Ok(hv) => {
                            tracing::info!("CORS: Allowing origin: {}", trimmed);
                            Some(hv)
                        }
                        Err(e) => {
                            tracing::warn!("CORS: Invalid origin '{}': {}", trimmed, e);
                            None
                        }
                    }
                })
                .collect();

            if allowed_origins.is_empty() {
                tracing::warn!(
                    "CORS: No valid origins in ADVGRAPH_CORS_ORIGINS, defaulting to localhost only"
                );
                build_localhost_cors()
            } else {
                editor_cors(allowed_origins)
            }
        }
        None => {
            tracing::info!("CORS: No ADVGRAPH_CORS_ORIGINS set, defaulting to localhost only");
            build_localhost_cors()
        }
    }
}

/// Build a restrictive CORS layer that only allows localhost origins.
fn build_localhost_cors() -> CorsLayer {
    let localhost_origins = [
        "http://localhost:5173",
        "http://localhost:4173",
        "http://localhost:3000",
        "http://127.0.0.1:5173",
        "http://127.0.0.1:3000",
    ];
    let origins: Vec<HeaderValue> = localhost_origins
        .iter()
        .filter_map(|o| o.parse::<HeaderValue>().ok())
        .collect();

    editor_cors(origins)
}

/// Methods and headers the editor uses.
fn editor_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit - caps graph documents at `MAX_DOCUMENT_SIZE`
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer();

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            GRAPH_PATH,
            get(handlers::get_graph_handler).put(handlers::put_graph_handler),
        )
        .route(
            "/api/advancements/integrity",
            get(handlers::integrity_handler),
        )
        .layer(axum::extract::DefaultBodyLimit::max(MAX_DOCUMENT_SIZE))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl-C.
pub async fn run_server(addr: &str, store: SharedStore) -> Result<(), AdvGraphError> {
    let state = AppState::new(store);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AdvGraphError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("Advancement graph server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AdvGraphError::Io(format!("Server error: {}", e)))
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

// =============================================================================
// TESTS
// =============================================================================

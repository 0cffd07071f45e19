//! # API Request/Response Types
//!
//! JSON structures for the HTTP API other than the graph document itself,
//! which travels as raw bytes.

use advgraph_core::AdvGraphError;
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when the store answered a ping, `degraded` otherwise.
    pub status: String,
    pub version: String,
    /// Backend name, e.g. `redis`.
    pub store: String,
}

impl HealthResponse {
    pub fn ok(store: &str) -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: store.to_string(),
        }
    }

    pub fn degraded(store: &str) -> Self {
        Self {
            status: "degraded".to_string(),
            ..Self::ok(store)
        }
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Body of every non-2xx response produced by the graph endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Failure class, see `AdvGraphError::kind`.
    pub error: String,
    pub message: String,
}

impl From<&AdvGraphError> for ErrorResponse {
    fn from(err: &AdvGraphError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

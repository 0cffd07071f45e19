//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{AppState, error::ApiError, types::HealthResponse};
use crate::store::{check_graph, read_graph, replace_graph};
use advgraph_core::IntegrityReport;
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint. Pings the store.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let backend = state.store.backend_name();
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::ok(backend))),
        Err(e) => {
            tracing::warn!("Health check: store ping failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::degraded(backend)),
            )
        }
    }
}

// =============================================================================
// GRAPH HANDLERS
// =============================================================================

/// Return the stored graph document verbatim, or the empty default.
pub async fn get_graph_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let body = read_graph(state.store.as_ref()).await?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    ))
}

/// Replace the stored graph document. Full replace, never a merge.
///
/// The request `Content-Type` is ignored; the body only has to be a JSON
/// object.
pub async fn put_graph_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    replace_graph(state.store.as_ref(), &body).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// INTEGRITY HANDLER
// =============================================================================

/// Report duplicate ids and dangling edges in the stored document.
pub async fn integrity_handler(
    State(state): State<AppState>,
) -> Result<Json<IntegrityReport>, ApiError> {
    let report = check_graph(state.store.as_ref()).await?;
    Ok(Json(report))
}

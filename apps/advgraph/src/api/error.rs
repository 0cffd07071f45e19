//! # API Error Mapping
//!
//! Turns `AdvGraphError` into an HTTP response with a distinct status per
//! failure class and an `ErrorResponse` body.

use super::types::ErrorResponse;
use advgraph_core::AdvGraphError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Handler error wrapper.
#[derive(Debug)]
pub struct ApiError(pub AdvGraphError);

impl From<AdvGraphError> for ApiError {
    fn from(err: AdvGraphError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AdvGraphError::MalformedDocument(_) | AdvGraphError::NotAnObject(_) => {
                StatusCode::BAD_REQUEST
            }
            AdvGraphError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AdvGraphError::StoreIo(_)
            | AdvGraphError::Serialization(_)
            | AdvGraphError::Config(_)
            | AdvGraphError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_client_error() {
            tracing::warn!(kind = self.0.kind(), "Rejected request: {}", self.0);
        } else {
            tracing::error!(kind = self.0.kind(), "Request failed: {}", self.0);
        }
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}

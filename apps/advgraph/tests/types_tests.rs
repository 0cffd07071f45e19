//! Unit tests for API types serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use advgraph::api::{ErrorResponse, HealthResponse};
use advgraph_core::AdvGraphError;

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_ok() {
    let health = HealthResponse::ok("redis");
    assert_eq!(health.status, "ok");
    assert_eq!(health.store, "redis");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_health_response_degraded_keeps_version() {
    let health = HealthResponse::degraded("redis");
    assert_eq!(health.status, "degraded");
    assert!(!health.version.is_empty());
}

#[test]
fn test_health_response_serialization() {
    let health = HealthResponse {
        status: "ok".to_string(),
        version: "0.1.0".to_string(),
        store: "memory".to_string(),
    };

    let json = serde_json::to_string(&health).unwrap();
    assert_eq!(json, r#"{"status":"ok","version":"0.1.0","store":"memory"}"#);
}

// =============================================================================
// ERROR RESPONSE TESTS
// =============================================================================

#[test]
fn test_error_response_from_store_error() {
    let err = AdvGraphError::StoreUnavailable("connection refused".to_string());
    let response = ErrorResponse::from(&err);

    assert_eq!(response.error, "store_unavailable");
    assert_eq!(response.message, "Store unavailable: connection refused");
}

#[test]
fn test_error_response_from_parse_error() {
    let err = AdvGraphError::NotAnObject("array");
    let response = ErrorResponse::from(&err);

    assert_eq!(response.error, "not_an_object");
    assert!(response.message.contains("array"));
}

#[test]
fn test_error_response_deserialization() {
    let json = r#"{"error":"store_io","message":"Store I/O error: boom"}"#;
    let response: ErrorResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.error, "store_io");
    assert_eq!(response.message, "Store I/O error: boom");
}

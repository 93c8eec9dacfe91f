//! Error types for the three services
//!
//! Provides unified error handling using thiserror. Each service has its own
//! error enum; all of them render as `{"error": message}` JSON bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by the cache tier, in-process or over HTTP.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache service unreachable, timed out, or answered with a failure status
    #[error("Cache unavailable: {0}")]
    Unavailable(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.to_string())
    }
}

// == Record Error Enum ==
/// Errors raised by the record store, local or remote.
#[derive(Error, Debug)]
pub enum RecordError {
    /// No record with the requested id or name
    #[error("User not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Record service unreachable, timed out, or answered with a failure status
    #[error("Record service unavailable: {0}")]
    Unavailable(String),

    /// Backing database failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<tokio_rusqlite::Error> for RecordError {
    fn from(err: tokio_rusqlite::Error) -> Self {
        RecordError::Storage(err.to_string())
    }
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        let status = match &self {
            RecordError::NotFound(_) => StatusCode::NOT_FOUND,
            RecordError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RecordError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            RecordError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        error_response(status, self.to_string())
    }
}

// == Gateway Error Enum ==
/// Errors surfaced by the gateway to its callers.
///
/// Cache failures never appear here; the coordinator absorbs them.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The record store reported the user as missing
    #[error("User not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The record store failed: transport error, timeout, or failure status
    #[error("Database service error: {0}")]
    Dependency(String),
}

impl From<RecordError> for GatewayError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::NotFound(what) => GatewayError::NotFound(what),
            other => GatewayError::Dependency(other.to_string()),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Dependency(_) => StatusCode::BAD_GATEWAY,
        };
        error_response(status, self.to_string())
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    let body = Json(json!({
        "error": message
    }));

    (status, body).into_response()
}

// == Result Type Aliases ==
/// Convenience Result type for the cache tier.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Result type for record store operations.
pub type RecordResult<T> = std::result::Result<T, RecordError>;

/// Result type for gateway operations.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_found_maps_to_gateway_not_found() {
        let err: GatewayError = RecordError::NotFound("id 999".to_string()).into();
        assert!(matches!(err, GatewayError::NotFound(_)));
    }

    #[test]
    fn test_record_transport_failure_maps_to_dependency() {
        let err: GatewayError = RecordError::Unavailable("connection refused".to_string()).into();
        assert!(matches!(err, GatewayError::Dependency(ref msg) if msg.contains("connection refused")));

        let err: GatewayError = RecordError::Storage("disk I/O error".to_string()).into();
        assert!(matches!(err, GatewayError::Dependency(_)));
    }

    #[test]
    fn test_gateway_status_codes() {
        let not_found = GatewayError::NotFound("x".into()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let dependency = GatewayError::Dependency("x".into()).into_response();
        assert_eq!(dependency.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_cache_status_codes() {
        assert_eq!(
            CacheError::NotFound("k".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CacheError::InvalidRequest("k".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}

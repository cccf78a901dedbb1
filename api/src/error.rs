//! Unified error types for the Catalog API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Storage and invariant errors raised below the service ports
//! - `SeedError` / `ConfigError`: Startup errors
//! - `ServiceError`: A failed `OperationResult`, as a `std::error::Error`
//! - `AppError`: Application layer errors (rendered as HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::operation_result::ErrorCode;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors loading catalog seed data
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed data: {0}")]
    Invalid(#[from] DomainError),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Failure reported by a service through `OperationResult::Failure`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", .code, .message.as_deref().unwrap_or("no details"))]
pub struct ServiceError {
    pub code: ErrorCode,
    pub message: Option<String>,
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected before the service was called
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("{0}")]
    Service(#[from] ServiceError),
}

/// HTTP status for a service failure code.
///
/// New codes must be added here explicitly; 500 is the conservative default.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidData => StatusCode::BAD_REQUEST,
        ErrorCode::ResourceNotFound => StatusCode::NOT_FOUND,
        ErrorCode::GeneralException => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Service(e) => status_for(e.code),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            AppError::Validation(msg) => ErrorResponse {
                error: "Validation error".to_string(),
                code: None,
                details: Some(msg),
            },
            AppError::Service(ServiceError { code, message }) => {
                if status.is_server_error() {
                    tracing::error!(%code, details = ?message, "Service failure");
                } else {
                    tracing::debug!(%code, details = ?message, "Service rejected request");
                }
                let error = match code {
                    ErrorCode::InvalidData => "Invalid data",
                    ErrorCode::ResourceNotFound => "Not found",
                    ErrorCode::GeneralException => "Internal server error",
                };
                ErrorResponse {
                    error: error.to_string(),
                    code: Some(code),
                    details: message,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_code_has_a_status() {
        assert_eq!(status_for(ErrorCode::InvalidData), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorCode::ResourceNotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(ErrorCode::GeneralException),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_error_is_bad_request() {
        let response = AppError::Validation("pageIndex must be positive".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn service_error_uses_code_status() {
        let response = AppError::from(ServiceError {
            code: ErrorCode::ResourceNotFound,
            message: Some("Product brand 1000 not found".to_string()),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn service_error_display_includes_message() {
        let err = ServiceError {
            code: ErrorCode::GeneralException,
            message: Some("storage unavailable".to_string()),
        };
        assert_eq!(err.to_string(), "generalException: storage unavailable");

        let bare = ServiceError {
            code: ErrorCode::InvalidData,
            message: None,
        };
        assert_eq!(bare.to_string(), "invalidData: no details");
    }

    #[test]
    fn error_body_omits_missing_fields() {
        let body = ErrorResponse {
            error: "Validation error".to_string(),
            code: None,
            details: None,
        };

        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Validation error"}"#);
    }
}

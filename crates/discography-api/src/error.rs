//! Discography — API error types.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use discography_core::entity::EntityKind;
use discography_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::validation::ValidationError;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error that implements `IntoResponse`.
#[derive(Debug)]
pub enum ApiError {
    /// A core lookup failed.
    Domain(DomainError),
    /// The path or payload was rejected before reaching the core.
    InvalidRequest(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidRequest(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidRequest(format!("invalid path param: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            Self::Domain(err) => {
                let code = match err.kind() {
                    EntityKind::Performer => "performer_not_found",
                    EntityKind::Release => "release_not_found",
                };
                (StatusCode::NOT_FOUND, code, err.to_string())
            }
            Self::InvalidRequest(message) => (StatusCode::BAD_REQUEST, "invalid_request", message),
        };

        warn!(status = status.as_u16(), error = error_code, %message, "request failed");

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: ApiError) -> StatusCode {
        let response = err.into_response();
        response.status()
    }

    #[test]
    fn test_release_not_found_maps_to_404() {
        assert_eq!(
            status_of(ApiError::Domain(DomainError::NotFound {
                kind: EntityKind::Release,
                id: 1
            })),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_performer_not_found_maps_to_404() {
        assert_eq!(
            status_of(ApiError::Domain(DomainError::NotFound {
                kind: EntityKind::Performer,
                id: 999
            })),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_invalid_request_maps_to_400() {
        assert_eq!(
            status_of(ApiError::InvalidRequest("bad input".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validation_error_becomes_invalid_request() {
        let err = ApiError::from(ValidationError::Missing("title"));

        match err {
            ApiError::InvalidRequest(message) => assert_eq!(message, "title is required"),
            other @ ApiError::Domain(_) => panic!("expected InvalidRequest, got {other:?}"),
        }
    }
}

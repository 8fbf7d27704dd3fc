//! HTTP error mapping
//!
//! Translates store errors into status codes and a JSON error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::StrataError;

/// Wrapper turning a [`StrataError`] into an HTTP response
#[derive(Debug)]
pub struct ApiError(pub StrataError);

impl From<StrataError> for ApiError {
    fn from(err: StrataError) -> Self {
        ApiError(err)
    }
}

/// JSON body for every error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            // Missing resource
            StrataError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),

            // Rejected input
            StrataError::MissingField { .. } => (StatusCode::BAD_REQUEST, "MISSING_FIELD"),
            StrataError::UniqueViolation { .. } => (StatusCode::CONFLICT, "UNIQUE_VIOLATION"),
            StrataError::Relationship { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "RELATIONSHIP_VIOLATION")
            }

            // Upstream failures
            StrataError::OriginUnavailable(_) | StrataError::Decode { .. } => {
                (StatusCode::BAD_GATEWAY, "ORIGIN_FAILURE")
            }

            // Everything else is a generic server failure
            StrataError::SnapshotMissing { .. }
            | StrataError::Persistence(_)
            | StrataError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL"),
        };

        let body = ErrorBody {
            error: code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

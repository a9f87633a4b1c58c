//! API error types with HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ontograph_core::TermError;
use ontograph_store::StoreError;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Error type surfaced at the HTTP boundary.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Store layer error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Identifier failed term validation
    #[error("invalid identifier: {0}")]
    Term(#[from] TermError),

    /// Generic bad request error
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    /// Map error to HTTP status code. Store faults are never reported as
    /// client errors: only validation failures map to 400.
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 502 - store unreachable
            ApiError::Store(StoreError::Connection(_)) => StatusCode::BAD_GATEWAY,

            // 500 - store faults and local storage failures
            ApiError::Store(StoreError::Query { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(StoreError::Serialization(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(StoreError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 - client errors
            ApiError::Store(StoreError::InvalidFilename(_)) => StatusCode::BAD_REQUEST,
            ApiError::Term(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = ErrorResponse {
            error: self.to_string(),
            status: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

//! # REST API Errors
//!
//! Error types for the route layer and their HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::models::ValidationError;
use crate::store::{RecordId, StoreError};

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No record under the requested id
    #[error("{label} {id} not found")]
    NotFound { label: &'static str, id: RecordId },

    /// Body is not valid JSON or does not match the model's types
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Path parameter could not be parsed
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    /// Query string could not be parsed or holds an unusable value
    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Body decoded but a field validator rejected it
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Internal error, e.g. a stored record no longer matching its model
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Translate a store failure for a collection whose records are called `label`
    pub fn from_store(label: &'static str, err: StoreError) -> Self {
        RestError::NotFound {
            label,
            id: err.id(),
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidBody(_) | RestError::InvalidPath(_) | RestError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the request was refused before reaching the store
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RestError::InvalidBody(_)
                | RestError::InvalidPath(_)
                | RestError::InvalidQuery(_)
                | RestError::Validation(_)
        )
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

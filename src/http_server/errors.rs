//! # HTTP adapter errors
//!
//! Input the adapter refuses before the engine runs. Engine failures are
//! not errors here: they come back as 200 with an error result.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for HTTP handlers
pub type ServeResult<T> = Result<T, ServeError>;

/// Refused requests
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServeError {
    /// Body has no `question` field
    #[error("No question provided")]
    MissingQuestion,

    /// `question` is empty or whitespace
    #[error("Question is empty")]
    EmptyQuestion,

    /// `question` exceeds the configured limit
    #[error("Question is {len} characters long; the limit is {max}")]
    QuestionTooLong { len: usize, max: usize },

    /// Body is not a JSON object of the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl ServeError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ServeError::MissingQuestion => "STEP_HTTP_MISSING_QUESTION",
            ServeError::EmptyQuestion => "STEP_HTTP_EMPTY_QUESTION",
            ServeError::QuestionTooLong { .. } => "STEP_HTTP_QUESTION_TOO_LONG",
            ServeError::InvalidBody(_) => "STEP_HTTP_INVALID_BODY",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServeError::MissingQuestion
            | ServeError::EmptyQuestion
            | ServeError::QuestionTooLong { .. }
            | ServeError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl From<&ServeError> for ErrorResponse {
    fn from(err: &ServeError) -> Self {
        Self {
            error: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

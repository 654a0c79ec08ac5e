use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Job submission rejected: {0}")]
    Submission(String),

    #[error("Job failed: {0}")]
    JobFailed(String),

    #[error("Job timed out: {0}")]
    JobTimeout(String),

    #[error("Result retrieval failed: {0}")]
    Fetch(String),

    #[error("Stream read failed: {0}")]
    StreamRead(String),

    #[error("Voice service error: {0}")]
    Upstream(String),

    #[error("Request cancelled: {0}")]
    Cancelled(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure - a single textual `error` field
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::JobTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Submission(_)
            | Self::JobFailed(_)
            | Self::Fetch(_)
            | Self::StreamRead(_)
            | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Cancelled(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to simplified error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        // Create simplified error response
        let error_response = self.to_response();

        (status, Json(error_response)).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

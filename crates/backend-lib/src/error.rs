// crates/backend-lib/src/error.rs

//! Central error type + Axum integration.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use passgen_common::ErrorBody;
use thiserror::Error;

/// Request rejections. Each one ends the request with a JSON error body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid Key provided!")]
    InvalidKey,

    #[error("A Password max size must be provided and it must be a number of at least {min}")]
    InvalidMaxSize { min: u64 },

    #[error("A Password max size must not be bigger than {max}")]
    MaxSizeTooLarge { max: u64 },

    #[error("At least one Password Option must be set")]
    NoOptions,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidKey => StatusCode::UNAUTHORIZED,
            AppError::InvalidMaxSize { .. }
            | AppError::MaxSizeTooLarge { .. }
            | AppError::NoOptions => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidKey => "AUTH_001",
            AppError::InvalidMaxSize { .. } => "VAL_001",
            AppError::MaxSizeTooLarge { .. } => "VAL_002",
            AppError::NoOptions => "VAL_003",
            AppError::Internal(_) => "INT_001",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = match &self {
            AppError::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorBody { error };

        (status, Json(body)).into_response()
    }
}

//! Custom error types and handling
//!
//! This module defines the application's error types and implements
//! conversion to HTTP responses for the Axum framework.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unsupported language id: {0}")]
    InvalidLanguage(i32),

    // Resource errors
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Access gate errors
    #[error("Practical is locked for this batch")]
    PracticalLocked,

    #[error("Submission deadline has passed")]
    DeadlinePassed,

    #[error("An accepted submission already exists for this practical")]
    AlreadySubmitted,

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("Failed to persist evaluation result: {0}")]
    Persistence(String),

    // External service errors
    #[error("Judge service unavailable: {0}")]
    JudgeUnavailable(String),

    #[error("Judge service is throttling requests")]
    JudgeThrottled,

    #[error("Evaluation timed out before the judge returned a result")]
    EvaluationTimeout,

    #[error("Redis error: {0}")]
    Redis(String),

    // Rate limiting
    #[error("Too many requests")]
    TooManyRequests,

    // Internal errors
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

/// Error details in response
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::InvalidLanguage(_) => "INVALID_LANGUAGE",
            Self::NotFound(_) => "NOT_FOUND",
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::Conflict(_) => "CONFLICT",
            Self::PracticalLocked => "PRACTICAL_LOCKED",
            Self::DeadlinePassed => "DEADLINE_PASSED",
            Self::AlreadySubmitted => "ALREADY_SUBMITTED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::JudgeUnavailable(_) => "JUDGE_UNAVAILABLE",
            Self::JudgeThrottled => "JUDGE_THROTTLED",
            Self::EvaluationTimeout => "EVALUATION_TIMEOUT",
            Self::Redis(_) => "REDIS_ERROR",
            Self::TooManyRequests => "TOO_MANY_REQUESTS",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidToken | Self::TokenExpired | Self::Unauthorized => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden(_) | Self::PracticalLocked | Self::DeadlinePassed => {
                StatusCode::FORBIDDEN
            }
            Self::Validation(_) | Self::InvalidInput(_) | Self::InvalidLanguage(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AlreadyExists(_) | Self::Conflict(_) | Self::AlreadySubmitted => {
                StatusCode::CONFLICT
            }
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::JudgeUnavailable(_) => StatusCode::BAD_GATEWAY,
            Self::JudgeThrottled => StatusCode::SERVICE_UNAVAILABLE,
            Self::EvaluationTimeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Database(_) | Self::Persistence(_) | Self::Redis(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors but don't expose details to clients
        let message = match &self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "A database error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.error_code().to_string(),
                message,
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

// Implement From for common error types
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                // Check for unique constraint violations
                if db_err.is_unique_violation() {
                    AppError::AlreadyExists("Resource already exists".to_string())
                } else {
                    AppError::Database(db_err.to_string())
                }
            }
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Redis(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::InvalidToken,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_errors_are_distinct() {
        assert_ne!(
            AppError::PracticalLocked.error_code(),
            AppError::DeadlinePassed.error_code()
        );
        assert_eq!(AppError::PracticalLocked.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::DeadlinePassed.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::AlreadySubmitted.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_upstream_errors_are_not_client_errors() {
        assert!(AppError::JudgeUnavailable("down".into())
            .status_code()
            .is_server_error());
        assert!(AppError::JudgeThrottled.status_code().is_server_error());
        assert!(AppError::EvaluationTimeout.status_code().is_server_error());
    }
}

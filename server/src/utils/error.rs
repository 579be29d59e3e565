//! Unified error handling
//!
//! Application-level error type and response shape:
//! - [`AppError`] - error enum, one variant per taxonomy class
//! - [`FieldIssue`] - one offending field inside a validation failure
//!
//! # Error code scheme
//!
//! | Prefix | Class | Example |
//! |--------|-------|---------|
//! | E0xxx  | request errors | E0002 validation failed |
//! | E2xxx  | permission errors | E2001 forbidden |
//! | E3xxx  | auth token errors | E3002 invalid token |
//! | E9xxx  | system errors | E9002 database error |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// One offending field in a validation failure. Validation errors carry
/// every bad field, not just the first one found.
#[derive(Debug, Clone, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error response body
///
/// ```json
/// {
///   "code": "E0002",
///   "message": "Validation failed",
///   "issues": [{ "field": "customer_email", "message": "..." }]
/// }
/// ```
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    issues: Option<Vec<FieldIssue>>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Auth errors (4xx) ==========
    #[error("Authentication required")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Permission denied: {0}")]
    Forbidden(String),

    // ========== Request errors (4xx) ==========
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    Conflict(String),

    #[error("Validation failed")]
    Validation(Vec<FieldIssue>),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Invalid request: {0}")]
    Invalid(String),

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, issues) = match self {
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "E3001",
                "Please login first".to_string(),
                None,
            ),
            AppError::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                "E3003",
                "Token expired".to_string(),
                None,
            ),
            AppError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "E3002",
                "Invalid token".to_string(),
                None,
            ),
            AppError::Forbidden(msg) => (StatusCode::FORBIDDEN, "E2001", msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg, None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg, None),
            AppError::Validation(issues) => (
                StatusCode::BAD_REQUEST,
                "E0002",
                "Validation failed".to_string(),
                Some(issues),
            ),
            AppError::BusinessRule(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "E0005", msg, None),
            AppError::Invalid(msg) => (StatusCode::BAD_REQUEST, "E0006", msg, None),

            // 5xx messages are sanitized; full detail goes to the log only
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9002",
                    "Database error".to_string(),
                    None,
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorBody {
            code,
            message,
            issues,
        });

        (status, body).into_response()
    }
}

// ========== Helper constructors ==========

impl AppError {
    /// Validation failure on a single field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldIssue::new(field, message)])
    }

    /// Validation failure listing every offending field.
    pub fn validation_issues(issues: Vec<FieldIssue>) -> Self {
        Self::Validation(issues)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Unified message used for login failures so usernames cannot be
    /// enumerated.
    pub fn invalid_credentials() -> Self {
        Self::Invalid("Invalid username or password".to_string())
    }
}

/// Result type used by HTTP handlers and application logic
pub type AppResult<T> = Result<T, AppError>;

//! Type-safe error codes attached to every translated error.
//!
//! Codes never reach the response body (clients only see `status` and
//! `message`); they are emitted as the `error_code` field of the log event
//! written when an error is translated, so failures can be grouped in log
//! search and alerting.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! ```

use serde::{Deserialize, Serialize};

/// Standardized error codes.
///
/// Ranges:
/// - 1000-1999: client and generic server errors
/// - 2000-2999: storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Request body, path or query failed validation
    ValidationError,

    /// Requested resource or route was not found
    NotFound,

    /// An unexpected internal error occurred
    InternalError,

    /// API credentials are missing or invalid
    Unauthorized,

    /// The storage layer reported a failure
    DatabaseError,
}

impl ErrorCode {
    /// SCREAMING_SNAKE_CASE identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::DatabaseError => "DATABASE_ERROR",
        }
    }

    /// Integer code for logs and metrics.
    pub fn code(&self) -> i32 {
        match self {
            Self::ValidationError => 1001,
            Self::NotFound => 1004,
            Self::InternalError => 1005,
            Self::Unauthorized => 1006,
            Self::DatabaseError => 2003,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.code())
    }
}

pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Message returned to clients for every non-operational failure.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

/// Coarse outcome reported in the `status` field of an error body.
///
/// `fail` marks a problem with the request (4xx), `error` a problem on the
/// server (5xx).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStatus {
    Fail,
    Error,
}

impl ErrorStatus {
    pub fn for_status(status: StatusCode) -> Self {
        if status.is_client_error() {
            ErrorStatus::Fail
        } else {
            ErrorStatus::Error
        }
    }
}

/// Body of every error response.
///
/// ```json
/// { "status": "fail", "message": "Product with ID 42 not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// `fail` for client errors, `error` for server errors
    pub status: ErrorStatus,
    /// Human-readable message
    pub message: String,
}

/// Application error type, translated into an HTTP response in exactly one
/// place: its [`IntoResponse`] implementation.
///
/// Every variant except [`AppError::Unexpected`] is *operational*: an
/// anticipated failure whose status and message are safe to send to the
/// client verbatim. `Unexpected` covers everything else; the client only
/// sees a generic 500 while the full report is logged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Database(String),

    #[error(transparent)]
    Unexpected(#[from] eyre::Report),
}

impl AppError {
    /// HTTP status this error translates to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Authentication(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error is anticipated and safe to expose to clients.
    pub fn is_operational(&self) -> bool {
        !matches!(self, AppError::Unexpected(_))
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::Authentication(_) => ErrorCode::Unauthorized,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Unexpected(_) => ErrorCode::InternalError,
        }
    }

    /// Log the error and build the client-facing body.
    fn to_error_response(&self) -> (StatusCode, ErrorResponse) {
        let status = self.status_code();
        let code = self.error_code();

        let message = if self.is_operational() {
            if status.is_server_error() {
                tracing::error!(error_code = code.code(), error = %code.as_str(), "{}", self);
            } else {
                tracing::info!(error_code = code.code(), error = %code.as_str(), "{}", self);
            }
            self.to_string()
        } else {
            tracing::error!(
                error_code = code.code(),
                error = %code.as_str(),
                "Unexpected error: {:?}",
                self
            );
            GENERIC_ERROR_MESSAGE.to_string()
        };

        (
            status,
            ErrorResponse {
                status: ErrorStatus::for_status(status),
                message,
            },
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.to_error_response();
        (status, Json(body)).into_response()
    }
}

//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user name or wrong password. Deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Session not found, expired, or token tampered with
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Two seeded identities share an id or a name
    #[error("Duplicate identity: {0}")]
    DuplicateIdentity(String),

    /// User name fails validation
    #[error("Invalid user name: {0}")]
    InvalidUserName(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::InvalidUserName(_) => StatusCode::BAD_REQUEST,
            AuthError::DuplicateIdentity(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::InvalidUserName(_) => ErrorKind::BadRequest,
            AuthError::DuplicateIdentity(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::InvalidCredentials => AppError::unauthorized(self.to_string())
                .with_action("Check your username and password and try again"),
            AuthError::SessionInvalid => {
                AppError::unauthorized(self.to_string()).with_action("Please sign in again")
            }
            AuthError::InvalidUserName(_) => AppError::bad_request(self.to_string()),
            // Don't leak internal details
            AuthError::DuplicateIdentity(_) | AuthError::Internal(_) => {
                AppError::internal("Something went wrong")
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::DuplicateIdentity(name) => {
                tracing::error!(identity = %name, "Duplicate identity in store");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

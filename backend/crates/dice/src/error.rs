//! Dice Error Types
//!
//! This module provides dice-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Dice-specific result type alias
pub type DiceResult<T> = Result<T, DiceError>;

/// Dice-specific error variants
#[derive(Debug, Error)]
pub enum DiceError {
    /// Bad roll parameters (zero dice, zero sides, over the per-roll cap)
    #[error("{0}")]
    InvalidArgument(String),

    /// More dice than one roll may hold
    #[error("Cannot roll more than {max} dice at once")]
    TooManyDice { max: u32 },

    /// Request body that is not a usable roll request
    #[error("{0}")]
    MalformedRequest(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DiceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DiceError::InvalidArgument(_)
            | DiceError::TooManyDice { .. }
            | DiceError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            DiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DiceError::InvalidArgument(_)
            | DiceError::TooManyDice { .. }
            | DiceError::MalformedRequest(_) => ErrorKind::BadRequest,
            DiceError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            DiceError::Internal(msg) => {
                tracing::error!(message = %msg, "Dice internal error");
            }
            DiceError::InvalidArgument(_)
            | DiceError::TooManyDice { .. }
            | DiceError::MalformedRequest(_) => {
                tracing::debug!(error = %self, "Rejected roll parameters");
            }
        }
    }
}

impl From<DiceError> for AppError {
    fn from(err: DiceError) -> Self {
        let message = err.to_string();
        match err {
            DiceError::InvalidArgument(_) => AppError::bad_request(message)
                .with_action("Roll at least one die with at least one side"),
            DiceError::TooManyDice { max } => AppError::bad_request(message)
                .with_action(format!("Roll at most {max} dice at a time")),
            DiceError::MalformedRequest(_) => AppError::bad_request(message)
                .with_action("Send numDice and sides as whole numbers"),
            // Don't leak internal details
            DiceError::Internal(_) => AppError::internal("Something went wrong"),
        }
    }
}

impl From<JsonRejection> for DiceError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) => {
                DiceError::MalformedRequest("numDice and sides must be integers".to_string())
            }
            JsonRejection::JsonSyntaxError(_) => {
                DiceError::MalformedRequest("Request body is not valid JSON".to_string())
            }
            JsonRejection::MissingJsonContentType(_) => {
                DiceError::MalformedRequest("Expected a JSON request body".to_string())
            }
            other => DiceError::MalformedRequest(other.body_text()),
        }
    }
}

impl IntoResponse for DiceError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

//! # API Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Parcel Desk                            │
//! │                                                                         │
//! │  Operator                    Rust                                       │
//! │  ────────                    ────                                       │
//! │                                                                         │
//! │  "accept x"                                                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command::parse ─── bad input? ── INVALID_INPUT ──┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  AppState::dispatch ─── CoreError ────────────► ApiError ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄─── "! [INVALID_INPUT] accept expects a request id, got 'x'"         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors never end the session; the loop prints them and reads the next line.

use std::fmt;
use std::io;

use parcel_core::CoreError;
use serde::Serialize;
use thiserror::Error;

use crate::state::ConfigError;

/// Error returned from console commands.
///
/// ## Serialization
/// With `--format json` the operator receives:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Delivery item not found: 9"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown item or request id
    NotFound,

    /// The action's precondition does not hold (e.g. empty cart)
    Precondition,

    /// The input line could not be parsed
    InvalidInput,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Precondition => "PRECONDITION",
            ErrorCode::InvalidInput => "INVALID_INPUT",
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidInput, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = if err.is_not_found() {
            ErrorCode::NotFound
        } else {
            ErrorCode::Precondition
        };
        ApiError::new(code, err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

/// Errors that end the session.
///
/// Command errors are [`ApiError`]s and never reach this type.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::ItemNotFound(9));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "[NOT_FOUND] Delivery item not found: 9");

        let err = ApiError::from(CoreError::RequestNotFound(4));
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = ApiError::from(CoreError::EmptyCart);
        assert_eq!(err.code, ErrorCode::Precondition);
    }

    #[test]
    fn test_serialized_code() {
        let value = serde_json::to_value(ApiError::invalid_input("bad")).unwrap();
        assert_eq!(value["code"], "INVALID_INPUT");
        assert_eq!(value["message"], "bad");
    }
}

//! Error types for the Nightrader client
//!
//! Every fallible operation in the crate returns [`AppError`]. The taxonomy
//! mirrors how failures are surfaced to a user: validation errors are rejected
//! before any network call, backend errors carry the backend message verbatim,
//! and nothing in here encodes a retry policy — every failure is terminal for
//! the attempted call.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Request parameters rejected client-side before any network call
    InvalidInput(String),
    /// Invalid credentials or expired session, with the backend message
    Unauthorized(String),
    /// The backend reported a failure; the message is forwarded verbatim
    Backend(String),
    /// The request never produced a response (connection, DNS, timeout)
    Network(String),
    /// The response body could not be decoded
    Deserialization(String),
    /// Non-success HTTP status without a decodable failure envelope
    Unexpected(StatusCode),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {msg}"),
            AppError::Backend(msg) => write!(f, "{msg}"),
            AppError::Network(msg) => write!(f, "Network error: {msg}"),
            AppError::Deserialization(msg) => write!(f, "Failed to decode response: {msg}"),
            AppError::Unexpected(status) => write!(f, "Unexpected response status: {status}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Deserialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_is_forwarded_verbatim() {
        let err = AppError::Backend("Insufficient funds".to_string());
        assert_eq!(err.to_string(), "Insufficient funds");
    }

    #[test]
    fn display_variants() {
        assert_eq!(
            AppError::InvalidInput("quantity must be positive".into()).to_string(),
            "Invalid input: quantity must be positive"
        );
        assert_eq!(
            AppError::Unauthorized("Token expired".into()).to_string(),
            "Unauthorized: Token expired"
        );
        assert_eq!(
            AppError::Unexpected(StatusCode::BAD_GATEWAY).to_string(),
            "Unexpected response status: 502 Bad Gateway"
        );
    }

    #[test]
    fn from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let app: AppError = err.into();
        assert!(matches!(app, AppError::Deserialization(_)));
    }
}

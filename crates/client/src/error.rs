//! Failure taxonomy for the cafenet client.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when calling the cafenet backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login rejected. The server's error detail is deliberately
    /// discarded so callers can only surface a generic message.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The request never reached the backend or never returned.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("server error: HTTP {status}")]
    Server {
        /// HTTP status code of the response.
        status: u16,
    },

    /// The response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rejected client-side; no request was dispatched.
    #[error("validation error: {0}")]
    Validation(String),
}

/// Errors from the persisted session store.
///
/// Only `save` and `clear` can fail; `load` treats a missing or
/// malformed record as "no session".
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to write session file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove session file {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "invalid credentials"
        );
        assert_eq!(
            ApiError::Server { status: 503 }.to_string(),
            "server error: HTTP 503"
        );
        assert_eq!(
            ApiError::Validation("cart is empty".to_string()).to_string(),
            "validation error: cart is empty"
        );
    }
}

//! Error types for backend API operations.

use thiserror::Error;

/// Errors that can occur while talking to the analytics backend.
#[derive(Error, Debug)]
pub enum ApiClientError {
    /// Transport-level failure (connection refused, timeout, TLS, ...).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status code.
    #[error("Backend returned status {code}")]
    Status {
        /// HTTP status code as returned by the backend
        code: u16,
    },

    /// The response body did not match the expected document shape.
    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ApiClientError>;

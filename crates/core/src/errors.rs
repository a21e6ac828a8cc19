use thiserror::Error;

use fundlens_api_client::ApiClientError;

// Type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Backend API operation failed: {0}")]
    Api(#[from] ApiClientError),

    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input validation failed: {0}")]
    Validation(String),
}

//! Error types for the application.

use thiserror::Error;

/// Application error type.
#[derive(Error, Debug)]
pub enum Error {
    /// RPC endpoint is not a valid HTTP(S) URL.
    #[error("Invalid RPC endpoint: {0}")]
    InvalidEndpoint(String),

    /// Private key failed the format check. Never carries the key itself.
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(&'static str),

    /// HTTP client could not be built.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

/// Result type alias for application operations.
pub type Result<T> = std::result::Result<T, Error>;

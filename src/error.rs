//! Error types for the Spirius SMS client library.

use thiserror::Error;

/// The main error type for all client operations.
#[derive(Error, Debug)]
pub enum SmsError {
    /// The shared secret cannot be used as an HMAC key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// A hash or MAC primitive is not available
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    TransportMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The same key was added twice to a request body
    #[error("Duplicate body key: {0}")]
    DuplicateKey(String),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// A request path or base URL that cannot be sent as signed
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// The account id cannot appear in the `Authorization` header
    #[error("Invalid account id: {0}")]
    InvalidAccountId(String),

    /// A header value could not be built
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

impl SmsError {
    /// Check if this error came from the network layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::TransportMiddleware(_))
    }

    /// Check if this error is a body serialization problem.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization(_) | Self::DuplicateKey(_))
    }
}

//! Error types for staticpub-admin

use thiserror::Error;

/// Errors raised while building or sending publication requests
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure or undecodable response body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The publication endpoint answered with a non-success status
    #[error("publication endpoint returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// An item reference without a numeric identifier
    #[error("malformed item reference: {0}")]
    MalformedItem(String),

    /// Conflicting or unreadable publication options
    #[error("invalid publication options: {0}")]
    InvalidOptions(String),

    /// Begin-publication invoked without publication options
    #[error("no publication options available in this context")]
    MissingOptions,

    /// Begin-publication invoked while its view is not ready
    #[error("publication view is not ready")]
    NotReady,

    /// An action, action set or node registered twice
    #[error("already registered: {0}")]
    DuplicateRegistration(String),

    /// An export did not complete in the allotted time
    #[error("timed out: {0}")]
    Timeout(String),

    /// Invalid client configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

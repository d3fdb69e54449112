//! Errors raised while fetching the light collection.

use thiserror::Error;

/// Errors that can occur during the light collection fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request target is not an absolute URL (e.g. empty endpoint)
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Failed to reach the light server or read its response
    #[error("Connection failed to '{url}': {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The light server answered with a non-2xx status
    #[error("Light server returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// The response body is not a sequence of lights
    #[error("Malformed light collection from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// Short error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Connection { .. } => "connection_error",
            FetchError::Status { .. } => "status_error",
            FetchError::Decode { .. } => "decode_error",
            FetchError::Client(_) => "client_error",
        }
    }
}

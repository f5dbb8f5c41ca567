//! Error types for the harvest module

use thiserror::Error;

/// Errors that can occur while harvesting
#[derive(Debug, Error)]
pub enum HarvestError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request did not complete within the client timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The configured proxy refused or dropped the connection
    #[error("Proxy unreachable: {0}")]
    Proxy(String),

    /// Endpoint returned an error response
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl HarvestError {
    /// Map a reqwest error, attributing connect failures to the proxy when one is in use
    pub fn from_reqwest(err: reqwest::Error, proxied: bool) -> Self {
        if err.is_timeout() {
            HarvestError::Timeout(err.to_string())
        } else if err.is_connect() && proxied {
            HarvestError::Proxy(err.to_string())
        } else if err.is_builder() {
            HarvestError::InvalidConfig(err.to_string())
        } else if err.is_decode() {
            HarvestError::ParseError(err.to_string())
        } else {
            HarvestError::RequestFailed(err.to_string())
        }
    }

    /// Systematic failures that will repeat for every request of the run
    pub fn is_fatal(&self) -> bool {
        matches!(self, HarvestError::Proxy(_) | HarvestError::InvalidConfig(_))
    }
}

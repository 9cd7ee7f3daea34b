//! Error types for schema loading.

use thiserror::Error;

/// Error type for schema loading operations.
#[derive(Debug, Error)]
pub enum LoadError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-200 status.
    #[error("non-200 OK status code: {status} body: {body:?}")]
    Status {
        /// Response status.
        status: reqwest::StatusCode,
        /// Response body, for diagnosis.
        body: String,
    },

    /// The response body is not a usable introspection document.
    #[error("decode error: {0}")]
    Parse(#[from] gqlbind_schema::ParseError),

    /// The endpoint is not a valid absolute URL.
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint {
        /// Endpoint as given.
        endpoint: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Authentication settings are inconsistent or missing.
    #[error("authentication error: {message}")]
    Auth {
        /// Error message.
        message: String,
    },
}

impl LoadError {
    /// Creates an authentication configuration error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }
}

//! Infrastructure-level errors (HTTP transport)

use thiserror::Error;

/// Infrastructure errors cover the HTTP transport.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("HTTP error: {context}")]
    Http {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP client setup failed: {message}")]
    Client { message: String },
}

impl InfraError {
    /// Create an HTTP error with context.
    pub fn http(context: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            context: context.into(),
            source,
        }
    }
}

/// Result type for infrastructure layer operations.
pub type InfraResult<T> = Result<T, InfraError>;

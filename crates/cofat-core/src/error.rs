//! Error types for cofat-core

use thiserror::Error;

/// Result type alias using cofat-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cofat-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Required identifiers or site context are absent; no request was made
    #[error("Missing precondition: {0}")]
    MissingPrecondition(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level HTTP failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the list item API; `detail` is the whole
    /// trimmed response body, or the status text when the body is empty
    #[error("{operation} failed with HTTP {status}: {detail}")]
    Api {
        operation: &'static str,
        status: u16,
        detail: String,
    },

    /// Response body did not have the expected shape
    #[error("Invalid response payload: {0}")]
    InvalidPayload(String),

    /// One or more attachment deletes failed with a non-conflict status
    #[error("{failed} of {total} attachment deletes failed")]
    AttachmentDeletion { failed: usize, total: usize },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// HTTP status of an API error, if this is one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

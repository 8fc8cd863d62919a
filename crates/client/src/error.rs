//! Error types for the submission client and local cache.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while POSTing a submission.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The endpoint URL could not be used.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Returns the HTTP status if the endpoint produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) => None,
        }
    }
}

/// Errors raised by a [`crate::SubmissionCache`] implementation.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Failed to access submission cache at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to (de)serialize submission cache: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Submission cache lock poisoned")]
    Poisoned,
}

//! Error types for backend communication.

use reqwest::StatusCode;

/// Result type alias for gallery-backend operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while talking to the ArtworkDB backend.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid backend configuration.
    #[error("configuration error: {0}")]
    Config(String),
    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// The response body was not the expected JSON shape.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {body}")]
    Status {
        /// Upstream HTTP status.
        status: StatusCode,
        /// Upstream response body, truncated.
        body: String,
    },
}

impl Error {
    /// Returns the upstream status code, if the backend answered at all.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Reqwest(err) => err.status(),
            _ => None,
        }
    }

    /// Returns whether the backend reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Returns whether the request timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Reqwest(err) if err.is_timeout())
    }

    /// Returns whether the backend could not be reached at all.
    #[must_use]
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Reqwest(err) if err.is_connect())
    }
}

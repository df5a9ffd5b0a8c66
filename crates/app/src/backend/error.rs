//! Backend transport errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when communicating with the backend service.
#[derive(Debug, Error)]
pub enum BackendError {
    /// An HTTP transport, timeout or body-decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-2xx response.
    #[error("backend returned status {status}: {body}")]
    Status {
        /// HTTP status of the response.
        status: StatusCode,
        /// Response body, verbatim.
        body: String,
    },

    /// The backend returned a 2xx response with an unusable body.
    #[error("unexpected response from backend: {0}")]
    UnexpectedResponse(String),
}

impl BackendError {
    /// The HTTP status of a [`BackendError::Status`] error.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(error) => error.status(),
            Self::UnexpectedResponse(_) => None,
        }
    }
}

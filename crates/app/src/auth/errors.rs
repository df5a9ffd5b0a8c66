//! Auth errors.

use thiserror::Error;

use crate::backend::BackendError;

/// Errors surfaced by the auth plane.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The credential exchange was rejected.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Registration was rejected because the email is taken.
    #[error("email is already registered")]
    EmailTaken,

    /// Any other backend failure.
    #[error("backend error")]
    Backend(#[source] BackendError),
}

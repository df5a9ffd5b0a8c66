//! Users service errors.

use reqwest::StatusCode;
use thiserror::Error;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("profile already exists")]
    AlreadyExists,

    #[error("not allowed")]
    PermissionDenied,

    #[error("backend error")]
    Backend(#[source] BackendError),
}

impl From<BackendError> for UsersServiceError {
    fn from(error: BackendError) -> Self {
        match error.status() {
            Some(StatusCode::CONFLICT) => Self::AlreadyExists,
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => Self::PermissionDenied,
            Some(_) | None => Self::Backend(error),
        }
    }
}

//! Products service errors.

use reqwest::StatusCode;
use thiserror::Error;

use shopfront::prices::PriceError;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("not allowed")]
    PermissionDenied,

    #[error("invalid price value")]
    InvalidPrice(#[from] PriceError),

    #[error("backend error")]
    Backend(#[source] BackendError),
}

impl From<BackendError> for ProductsServiceError {
    fn from(error: BackendError) -> Self {
        match error.status() {
            Some(StatusCode::NOT_FOUND) => Self::NotFound,
            Some(StatusCode::CONFLICT) => Self::AlreadyExists,
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => Self::PermissionDenied,
            Some(_) | None => Self::Backend(error),
        }
    }
}

//! Orders service errors.

use reqwest::StatusCode;
use thiserror::Error;

use shopfront::prices::PriceError;

use crate::backend::BackendError;

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("order not found")]
    NotFound,

    #[error("not allowed")]
    PermissionDenied,

    #[error("invalid amount value")]
    InvalidAmount(#[from] PriceError),

    #[error("backend error")]
    Backend(#[source] BackendError),
}

impl From<BackendError> for OrdersServiceError {
    fn from(error: BackendError) -> Self {
        match error.status() {
            Some(StatusCode::NOT_FOUND) => Self::NotFound,
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) => Self::PermissionDenied,
            Some(_) | None => Self::Backend(error),
        }
    }
}

//! Auth plane implementation over the backend client.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    auth::{
        api::{AuthApi, AuthSession},
        errors::AuthError,
    },
    backend::{BackendClient, BackendError},
};

/// [`AuthApi`] over the hosted backend's auth endpoints.
///
/// Shares its [`BackendClient`] with the data-plane services so that the
/// session token attached here is carried by every subsequent request.
#[derive(Debug, Clone)]
pub struct RestAuthApi {
    client: BackendClient,
}

impl RestAuthApi {
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for RestAuthApi {
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError> {
        self.client
            .sign_up(email, password)
            .await
            .map_err(sign_up_error)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let tokens = self
            .client
            .sign_in_with_password(email, password)
            .await
            .map_err(sign_in_error)?;

        self.client.set_access_token(tokens.access_token.clone());

        Ok(AuthSession {
            access_token: tokens.access_token,
            email: tokens.user.email,
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let result = self.client.sign_out().await;

        // The local token is dropped either way; a failure only means the
        // server-side session may outlive it.
        self.client.clear_access_token();

        match result {
            Ok(()) => Ok(()),
            Err(error) if error.status() == Some(StatusCode::UNAUTHORIZED) => Ok(()),
            Err(error) => Err(AuthError::Backend(error)),
        }
    }

    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError> {
        let Some(access_token) = self.client.access_token() else {
            return Ok(None);
        };

        match self.client.fetch_auth_user().await {
            Ok(user) => Ok(Some(AuthSession {
                access_token,
                email: user.email,
            })),
            Err(error) if error.status() == Some(StatusCode::UNAUTHORIZED) => {
                self.client.clear_access_token();

                Ok(None)
            }
            Err(error) => Err(AuthError::Backend(error)),
        }
    }
}

fn sign_in_error(error: BackendError) -> AuthError {
    match error.status() {
        Some(StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED) => AuthError::InvalidCredentials,
        _ => AuthError::Backend(error),
    }
}

fn sign_up_error(error: BackendError) -> AuthError {
    match error.status() {
        Some(StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY) => AuthError::EmailTaken,
        _ => AuthError::Backend(error),
    }
}

//! Auth plane contract.

use async_trait::async_trait;
use mockall::automock;

use crate::auth::errors::AuthError;

/// An established session with the auth plane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    /// Bearer token attached to subsequent data-plane requests.
    pub access_token: String,

    /// Email of the authenticated subject; keys the profile lookup.
    pub email: String,
}

#[automock]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Register new credentials.
    async fn sign_up(&self, email: &str, password: &str) -> Result<(), AuthError>;

    /// Exchange credentials for a session and attach its token to the client.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, AuthError>;

    /// Revoke the current session and detach its token.
    async fn sign_out(&self) -> Result<(), AuthError>;

    /// The previously established session, if one exists and is still valid.
    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError>;
}

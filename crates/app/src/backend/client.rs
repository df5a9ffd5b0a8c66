//! HTTP client for the backend's data and auth planes.

use std::{
    sync::{Arc, RwLock},
    time::Duration,
};

use reqwest::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};

use crate::backend::{error::BackendError, query::TableQuery};

/// Configuration for connecting to the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Service base address, e.g. `"https://project.example.co"`.
    pub base_url: String,

    /// Publishable API key sent with every request.
    pub api_key: String,

    /// Access token from a previously established session, if any.
    pub access_token: Option<String>,

    /// Per-request timeout applied to every backend call.
    pub timeout: Duration,
}

impl BackendConfig {
    /// Default per-request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Typed HTTP client for the backend service.
///
/// Carries the publishable key on every request and, once a session is
/// established, the session's bearer token. Cloning is cheap and clones share
/// the session token.
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    api_key: String,
    http: Client,
    access_token: Arc<RwLock<Option<String>>>,
}

impl BackendClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            http,
            access_token: Arc::new(RwLock::new(config.access_token)),
        })
    }

    pub(crate) fn set_access_token(&self, token: String) {
        // Poisoning only happens if a holder panicked; dropping the update is
        // equivalent to staying signed out.
        if let Ok(mut guard) = self.access_token.write() {
            *guard = Some(token);
        }
    }

    pub(crate) fn clear_access_token(&self) {
        if let Ok(mut guard) = self.access_token.write() {
            *guard = None;
        }
    }

    pub(crate) fn access_token(&self) -> Option<String> {
        self.access_token
            .read()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }

    fn bearer(&self) -> String {
        self.access_token().unwrap_or_else(|| self.api_key.clone())
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        let response = request
            .header("apikey", &self.api_key)
            .bearer_auth(self.bearer())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(BackendError::Status { status, body });
        }

        Ok(response)
    }

    pub(crate) async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &TableQuery,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .execute(self.http.get(self.table_url(table)).query(query.params()))
            .await?;

        Ok(response.json().await?)
    }

    /// Insert one row (an object) or many (an array); returns the created
    /// rows.
    pub(crate) async fn insert<B, T>(&self, table: &str, rows: &B) -> Result<Vec<T>, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(
                self.http
                    .post(self.table_url(table))
                    .header("Prefer", "return=representation")
                    .json(rows),
            )
            .await?;

        Ok(response.json().await?)
    }

    /// Update the rows matched by `query`; returns the updated rows.
    pub(crate) async fn update<B, T>(
        &self,
        table: &str,
        query: &TableQuery,
        changes: &B,
    ) -> Result<Vec<T>, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(
                self.http
                    .patch(self.table_url(table))
                    .query(query.params())
                    .header("Prefer", "return=representation")
                    .json(changes),
            )
            .await?;

        Ok(response.json().await?)
    }

    /// Delete the rows matched by `query`; returns the deleted rows.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &TableQuery,
    ) -> Result<Vec<T>, BackendError> {
        let response = self
            .execute(
                self.http
                    .delete(self.table_url(table))
                    .query(query.params())
                    .header("Prefer", "return=representation"),
            )
            .await?;

        Ok(response.json().await?)
    }

    pub(crate) async fn sign_up(&self, email: &str, password: &str) -> Result<(), BackendError> {
        let body = serde_json::json!({ "email": email, "password": password });

        self.execute(self.http.post(self.auth_url("signup")).json(&body))
            .await?;

        Ok(())
    }

    pub(crate) async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SessionTokens, BackendError> {
        let body = serde_json::json!({ "email": email, "password": password });

        let response = self
            .execute(
                self.http
                    .post(self.auth_url("token"))
                    .query(&[("grant_type", "password")])
                    .json(&body),
            )
            .await?;

        Ok(response.json().await?)
    }

    pub(crate) async fn sign_out(&self) -> Result<(), BackendError> {
        self.execute(self.http.post(self.auth_url("logout"))).await?;

        Ok(())
    }

    pub(crate) async fn fetch_auth_user(&self) -> Result<AuthUserRecord, BackendError> {
        let response = self.execute(self.http.get(self.auth_url("user"))).await?;

        Ok(response.json().await?)
    }
}

/// Token bundle returned by the auth plane's password grant.
#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct SessionTokens {
    pub access_token: String,
    pub user: AuthUserRecord,
}

/// Identity subject as known to the auth plane.
#[derive(Debug, Clone, serde::Deserialize)]
pub(crate) struct AuthUserRecord {
    pub email: String,
}

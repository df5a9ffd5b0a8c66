//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::RestAuthApi,
    backend::{BackendClient, BackendConfig, BackendError},
    domain::{
        orders::{OrdersService, RestOrdersService},
        products::{ProductsService, RestProductsService},
        users::{RestUsersService, UsersService},
    },
    session::SessionManager,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to initialize backend client")]
    Backend(#[source] BackendError),
}

/// Wired-up services over one shared backend client.
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub orders: Arc<dyn OrdersService>,
    pub users: Arc<dyn UsersService>,
    pub session: Arc<SessionManager>,
}

impl AppContext {
    /// Build the application context from backend configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn from_config(config: BackendConfig) -> Result<Self, AppInitError> {
        let client = BackendClient::new(config).map_err(AppInitError::Backend)?;

        let users: Arc<dyn UsersService> = Arc::new(RestUsersService::new(client.clone()));
        let auth = Arc::new(RestAuthApi::new(client.clone()));

        Ok(Self {
            products: Arc::new(RestProductsService::new(client.clone())),
            orders: Arc::new(RestOrdersService::new(client)),
            users: Arc::clone(&users),
            session: Arc::new(SessionManager::new(auth, users)),
        })
    }
}

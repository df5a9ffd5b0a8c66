//! Users service.

use async_trait::async_trait;
use mockall::automock;

use shopfront::users::User;

use crate::{
    backend::{BackendClient, BackendError},
    domain::users::{
        errors::UsersServiceError, models::NewUser, records::NewUserRecord,
        repository::RestUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct RestUsersService {
    repository: RestUsersRepository,
}

impl RestUsersService {
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self {
            repository: RestUsersRepository::new(client),
        }
    }
}

#[async_trait]
impl UsersService for RestUsersService {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UsersServiceError> {
        let record = self.repository.find_by_email(email).await?;

        Ok(record.map(User::from))
    }

    async fn create_profile(&self, user: NewUser) -> Result<User, UsersServiceError> {
        let created = self.repository.insert(&NewUserRecord::from(user)).await?;

        let record = created.into_iter().next().ok_or_else(|| {
            UsersServiceError::Backend(BackendError::UnexpectedResponse(
                "created profile missing from response".to_string(),
            ))
        })?;

        Ok(User::from(record))
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Looks up a profile row by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UsersServiceError>;

    /// Inserts the profile row for a newly registered user.
    async fn create_profile(&self, user: NewUser) -> Result<User, UsersServiceError>;
}

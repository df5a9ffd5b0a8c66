//! Users Repository

use crate::{
    backend::{BackendClient, BackendError, TableQuery},
    domain::users::records::{NewUserRecord, UserRecord},
};

const TABLE: &str = "users";

#[derive(Debug, Clone)]
pub(crate) struct RestUsersRepository {
    client: BackendClient,
}

impl RestUsersRepository {
    #[must_use]
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub(crate) async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, BackendError> {
        let rows: Vec<UserRecord> = self
            .client
            .select(TABLE, &TableQuery::new().eq("email", email).limit(1))
            .await?;

        Ok(rows.into_iter().next())
    }

    pub(crate) async fn insert(
        &self,
        record: &NewUserRecord,
    ) -> Result<Vec<UserRecord>, BackendError> {
        self.client.insert(TABLE, record).await
    }
}

//! Products Repository

use uuid::Uuid;

use crate::{
    backend::{BackendClient, BackendError, TableQuery},
    domain::products::records::{ProductRecord, ProductWriteRecord},
};

const TABLE: &str = "products";

#[derive(Debug, Clone)]
pub(crate) struct RestProductsRepository {
    client: BackendClient,
}

impl RestProductsRepository {
    #[must_use]
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub(crate) async fn list_all(&self) -> Result<Vec<ProductRecord>, BackendError> {
        self.client.select(TABLE, &TableQuery::new()).await
    }

    pub(crate) async fn list_in_stock(&self) -> Result<Vec<ProductRecord>, BackendError> {
        self.client
            .select(TABLE, &TableQuery::new().gt("stock_quantity", 0))
            .await
    }

    pub(crate) async fn insert(
        &self,
        record: &ProductWriteRecord,
    ) -> Result<Vec<ProductRecord>, BackendError> {
        self.client.insert(TABLE, record).await
    }

    pub(crate) async fn update(
        &self,
        product: Uuid,
        changes: &ProductWriteRecord,
    ) -> Result<Vec<ProductRecord>, BackendError> {
        self.client
            .update(TABLE, &TableQuery::new().eq("id", product), changes)
            .await
    }

    pub(crate) async fn delete(&self, product: Uuid) -> Result<u64, BackendError> {
        let deleted: Vec<ProductRecord> = self
            .client
            .delete(TABLE, &TableQuery::new().eq("id", product))
            .await?;

        Ok(deleted.len() as u64)
    }
}

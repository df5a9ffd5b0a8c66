//! Orders Repository

use uuid::Uuid;

use crate::{
    backend::{BackendClient, BackendError, TableQuery},
    domain::orders::records::{NewOrderItemRecord, NewOrderRecord, OrderItemRecord, OrderRecord},
};

const ORDERS_TABLE: &str = "orders";
const ORDER_ITEMS_TABLE: &str = "order_items";

#[derive(Debug, Clone)]
pub(crate) struct RestOrdersRepository {
    client: BackendClient,
}

impl RestOrdersRepository {
    #[must_use]
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    pub(crate) async fn insert_order(
        &self,
        record: &NewOrderRecord,
    ) -> Result<Vec<OrderRecord>, BackendError> {
        self.client.insert(ORDERS_TABLE, record).await
    }

    pub(crate) async fn insert_items(
        &self,
        records: &[NewOrderItemRecord],
    ) -> Result<Vec<OrderItemRecord>, BackendError> {
        self.client.insert(ORDER_ITEMS_TABLE, records).await
    }

    pub(crate) async fn delete_order(&self, order: Uuid) -> Result<u64, BackendError> {
        let deleted: Vec<OrderRecord> = self
            .client
            .delete(ORDERS_TABLE, &TableQuery::new().eq("id", order))
            .await?;

        Ok(deleted.len() as u64)
    }

    pub(crate) async fn list_by_user(&self, user: Uuid) -> Result<Vec<OrderRecord>, BackendError> {
        self.client
            .select(
                ORDERS_TABLE,
                &TableQuery::new().eq("user_id", user).order_desc("created_at"),
            )
            .await
    }
}

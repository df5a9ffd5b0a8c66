//! Orders service.

use async_trait::async_trait;
use mockall::automock;

use shopfront::{
    orders::{Order, OrderId, OrderItem},
    users::UserId,
};

use crate::{
    backend::{BackendClient, BackendError},
    domain::orders::{
        errors::OrdersServiceError,
        models::{NewOrder, NewOrderItem},
        records::{NewOrderItemRecord, NewOrderRecord},
        repository::RestOrdersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct RestOrdersService {
    repository: RestOrdersRepository,
}

impl RestOrdersService {
    #[must_use]
    pub fn new(client: BackendClient) -> Self {
        Self {
            repository: RestOrdersRepository::new(client),
        }
    }
}

#[async_trait]
impl OrdersService for RestOrdersService {
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError> {
        let created = self
            .repository
            .insert_order(&NewOrderRecord::from(&order))
            .await?;

        let record = created.into_iter().next().ok_or_else(|| {
            OrdersServiceError::Backend(BackendError::UnexpectedResponse(
                "created order missing from response".to_string(),
            ))
        })?;

        Ok(Order::try_from(record)?)
    }

    async fn add_order_items(
        &self,
        items: Vec<NewOrderItem>,
    ) -> Result<Vec<OrderItem>, OrdersServiceError> {
        let records: Vec<NewOrderItemRecord> =
            items.iter().map(NewOrderItemRecord::from).collect();

        let created = self.repository.insert_items(&records).await?;

        created
            .into_iter()
            .map(|record| OrderItem::try_from(record).map_err(OrdersServiceError::from))
            .collect()
    }

    async fn delete_order(&self, order: OrderId) -> Result<(), OrdersServiceError> {
        let rows_affected = self.repository.delete_order(order.into_uuid()).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        Ok(())
    }

    async fn list_orders(&self, user: UserId) -> Result<Vec<Order>, OrdersServiceError> {
        let records = self.repository.list_by_user(user.into_uuid()).await?;

        records
            .into_iter()
            .map(|record| Order::try_from(record).map_err(OrdersServiceError::from))
            .collect()
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Creates an order header.
    async fn create_order(&self, order: NewOrder) -> Result<Order, OrdersServiceError>;

    /// Bulk-creates the line items of an order.
    async fn add_order_items(
        &self,
        items: Vec<NewOrderItem>,
    ) -> Result<Vec<OrderItem>, OrdersServiceError>;

    /// Deletes an order header. Used only as compensating cleanup when the
    /// line items could not be written.
    async fn delete_order(&self, order: OrderId) -> Result<(), OrdersServiceError>;

    /// Retrieves a user's orders, most recent first.
    async fn list_orders(&self, user: UserId) -> Result<Vec<Order>, OrdersServiceError>;
}

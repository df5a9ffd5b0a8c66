//! Order wire records.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopfront::{
    orders::{Order, OrderId, OrderItem, OrderItemId, OrderStatus},
    prices::{Price, PriceError},
    products::ProductId,
    users::UserId,
};

use crate::domain::orders::models::{NewOrder, NewOrderItem};

/// Order header row as returned by the `orders` resource.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OrderRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}

impl TryFrom<OrderRecord> for Order {
    type Error = PriceError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: OrderId::from_uuid(record.id),
            user_id: UserId::from_uuid(record.user_id),
            total_amount: Price::from_decimal(record.total_amount)?,
            status: record.status,
            created_at: record.created_at,
        })
    }
}

/// Insert payload for the `orders` resource.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewOrderRecord {
    pub user_id: Uuid,
    pub total_amount: Decimal,
    pub status: OrderStatus,
}

impl From<&NewOrder> for NewOrderRecord {
    fn from(order: &NewOrder) -> Self {
        Self {
            user_id: order.user_id.into_uuid(),
            total_amount: order.total_amount.to_decimal(),
            status: order.status,
        }
    }
}

/// Order line row as returned by the `order_items` resource.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OrderItemRecord {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    pub price_at_purchase: Decimal,
}

impl TryFrom<OrderItemRecord> for OrderItem {
    type Error = PriceError;

    fn try_from(record: OrderItemRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: OrderItemId::from_uuid(record.id),
            order_id: OrderId::from_uuid(record.order_id),
            product_id: ProductId::from_uuid(record.product_id),
            quantity: record.quantity,
            price_at_purchase: Price::from_decimal(record.price_at_purchase)?,
        })
    }
}

/// Bulk-insert payload for the `order_items` resource.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewOrderItemRecord {
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    pub price_at_purchase: Decimal,
}

impl From<&NewOrderItem> for NewOrderItemRecord {
    fn from(item: &NewOrderItem) -> Self {
        Self {
            order_id: item.order_id.into_uuid(),
            product_id: item.product_id.into_uuid(),
            quantity: item.quantity,
            price_at_purchase: item.price_at_purchase.to_decimal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn header_record_converts_to_the_domain_model() -> TestResult {
        let record: OrderRecord = serde_json::from_str(
            r#"{
                "id": "0192aa6b-2222-7abc-8def-0123456789ab",
                "user_id": "0192aa6b-3333-7abc-8def-0123456789ab",
                "total_amount": "25.00",
                "status": "completed",
                "created_at": "2025-03-01T12:00:00Z"
            }"#,
        )?;

        let order = Order::try_from(record)?;

        assert_eq!(order.total_amount, Price::from_minor(2500));
        assert_eq!(order.status, OrderStatus::Completed);

        Ok(())
    }
}

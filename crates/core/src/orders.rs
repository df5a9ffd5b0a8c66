//! Order Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{ids::TypedUuid, prices::Price, products::ProductId, users::UserId};

/// Order UUID
pub type OrderId = TypedUuid<Order>;

/// Order Item UUID
pub type OrderItemId = TypedUuid<OrderItem>;

/// Lifecycle status of an order.
///
/// Checkout writes `completed` directly; `pending` and `cancelled` remain
/// representable for history rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Completed => f.write_str("completed"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Order header summarizing a purchase, distinct from its line items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub total_amount: Price,
    pub status: OrderStatus,
    pub created_at: Timestamp,
}

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price_at_purchase: Price,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_spellings_match_the_wire() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Completed).expect("serialize status"),
            "\"completed\""
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"cancelled\"").expect("deserialize status"),
            OrderStatus::Cancelled
        );
    }
}

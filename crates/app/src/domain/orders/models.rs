//! Order input models.

use shopfront::{
    orders::{OrderId, OrderStatus},
    prices::Price,
    products::ProductId,
    users::UserId,
};

/// New order header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: UserId,
    pub total_amount: Price,
    pub status: OrderStatus,
}

/// New order line, referencing an already-created header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: u32,
    pub price_at_purchase: Price,
}

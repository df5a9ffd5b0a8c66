//! Shared fixtures for service-level tests.

use jiff::Timestamp;

use shopfront::{
    orders::{Order, OrderItem, OrderItemId},
    users::{User, UserId, UserRole},
};

use crate::domain::orders::models::{NewOrder, NewOrderItem};

/// The order the backend would return for the given insert payload.
pub(crate) fn order_from(order: &NewOrder) -> Order {
    Order {
        id: shopfront::orders::OrderId::new(),
        user_id: order.user_id,
        total_amount: order.total_amount,
        status: order.status,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

/// The line items the backend would return for the given bulk insert.
pub(crate) fn placed_items_from(items: &[NewOrderItem]) -> Vec<OrderItem> {
    items
        .iter()
        .map(|item| OrderItem {
            id: OrderItemId::new(),
            order_id: item.order_id,
            product_id: item.product_id,
            quantity: item.quantity,
            price_at_purchase: item.price_at_purchase,
        })
        .collect()
}

/// A profile row for session tests.
pub(crate) fn profile(email: &str, role: UserRole) -> User {
    User {
        id: UserId::new(),
        email: email.to_string(),
        full_name: "Test Shopper".to_string(),
        role,
        created_at: Timestamp::UNIX_EPOCH,
    }
}

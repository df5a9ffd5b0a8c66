//! Checkout
//!
//! The order submission flow. A [`Checkout`] is created when the shopper
//! leaves the catalog view: it takes ownership of the cart and snapshots the
//! catalog prices, so the hand-off between views is an explicit typed value
//! rather than ambient shared state.

use std::{sync::Arc, time::Duration};

use thiserror::Error;
use tracing::{info, warn};

use shopfront::{
    cart::Cart,
    orders::{Order, OrderItem, OrderStatus},
    prices::Price,
    pricing::{PriceList, cart_total},
    products::Product,
    users::UserId,
};

use crate::domain::orders::{
    OrdersService, OrdersServiceError,
    models::{NewOrder, NewOrderItem},
};

/// How long the caller should display the confirmation before navigating to
/// order history.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Errors surfaced by the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart had no lines; there is nothing to submit.
    #[error("cart is empty")]
    EmptyCart,

    /// A submission is already in flight.
    #[error("submission already in progress")]
    SubmissionInProgress,

    /// The order was already placed through this checkout.
    #[error("order already placed")]
    AlreadySubmitted,

    /// The collaborator rejected a write.
    #[error(transparent)]
    Orders(#[from] OrdersServiceError),
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    /// The created order header.
    pub order: Order,

    /// The created line items, one per cart line.
    pub items: Vec<OrderItem>,

    /// Display delay before navigating to order history.
    pub redirect_after: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmissionState {
    Unsubmitted,
    Submitting,
    Submitted,
}

/// One checkout attempt: owns the cart and a price snapshot, and drives the
/// two-step order write.
pub struct Checkout {
    orders: Arc<dyn OrdersService>,
    user_id: UserId,
    cart: Cart,
    prices: PriceList,
    state: SubmissionState,
}

impl Checkout {
    /// Starts a checkout for the given user, taking ownership of the cart and
    /// snapshotting prices from the currently loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when the cart has no lines.
    pub fn begin(
        orders: Arc<dyn OrdersService>,
        user_id: UserId,
        cart: Cart,
        catalog: &[Product],
    ) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        Ok(Self {
            orders,
            user_id,
            cart,
            prices: PriceList::from_products(catalog),
            state: SubmissionState::Unsubmitted,
        })
    }

    /// The cart being checked out.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The total that will be written on the order header.
    #[must_use]
    pub fn total(&self) -> Price {
        cart_total(&self.cart, &self.prices)
    }

    /// Whether the order was placed.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Submits the order: creates the header, then bulk-creates one line item
    /// per cart line with the unit price captured from the price snapshot.
    ///
    /// Re-submission is rejected while a submission is in flight and after a
    /// successful one; a failed submission returns the checkout to its
    /// unsubmitted state so the shopper can retry.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::SubmissionInProgress`] or
    /// [`CheckoutError::AlreadySubmitted`] per the guard above, and
    /// [`CheckoutError::Orders`] when a collaborator write fails. If the
    /// header was created but the items were not, a compensating header
    /// delete is attempted before returning the error.
    pub async fn submit(&mut self) -> Result<PlacedOrder, CheckoutError> {
        match self.state {
            SubmissionState::Submitting => return Err(CheckoutError::SubmissionInProgress),
            SubmissionState::Submitted => return Err(CheckoutError::AlreadySubmitted),
            SubmissionState::Unsubmitted => {}
        }

        self.state = SubmissionState::Submitting;

        let order = match self
            .orders
            .create_order(NewOrder {
                user_id: self.user_id,
                total_amount: self.total(),
                status: OrderStatus::Completed,
            })
            .await
        {
            Ok(order) => order,
            Err(error) => {
                self.state = SubmissionState::Unsubmitted;

                return Err(error.into());
            }
        };

        let items: Vec<NewOrderItem> = self
            .cart
            .lines()
            .map(|line| NewOrderItem {
                order_id: order.id,
                product_id: line.product_id,
                quantity: line.quantity,
                price_at_purchase: self
                    .prices
                    .price_of(line.product_id)
                    .unwrap_or(Price::ZERO),
            })
            .collect();

        match self.orders.add_order_items(items).await {
            Ok(items) => {
                self.state = SubmissionState::Submitted;

                info!(order = %order.id, total = %order.total_amount, "order placed");

                Ok(PlacedOrder {
                    order,
                    items,
                    redirect_after: REDIRECT_DELAY,
                })
            }
            Err(items_error) => {
                // The header exists without lines; remove it so no orphan is
                // left behind. Failure here leaves the orphan for the store
                // to reconcile.
                if let Err(cleanup_error) = self.orders.delete_order(order.id).await {
                    warn!(
                        order = %order.id,
                        error = %cleanup_error,
                        "failed to remove orphaned order header"
                    );
                }

                self.state = SubmissionState::Unsubmitted;

                Err(items_error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use shopfront::fixtures;

    use crate::{
        backend::BackendError,
        domain::orders::MockOrdersService,
        test::{order_from, placed_items_from},
    };

    use super::*;

    fn backend_failure() -> OrdersServiceError {
        OrdersServiceError::Backend(BackendError::UnexpectedResponse(
            "boom".to_string(),
        ))
    }

    #[test]
    fn empty_cart_is_rejected_before_any_write() {
        let orders = MockOrdersService::new();

        let result = Checkout::begin(
            Arc::new(orders),
            UserId::new(),
            Cart::new(),
            &fixtures::catalog(),
        );

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[tokio::test]
    async fn submit_writes_one_header_and_one_item_per_line() -> TestResult {
        let user = UserId::new();

        let mut cart = Cart::new();
        let a = fixtures::product("Widget", 1000, 5, "tools");
        let b = fixtures::product("Gadget", 500, 5, "tools");
        let catalog = vec![a.clone(), b.clone()];
        cart.add(a.id);
        cart.add(a.id);
        cart.add(b.id);

        let expected_total = a.price.saturating_mul(2).saturating_add(b.price);

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .withf(move |order| {
                order.total_amount == expected_total && order.status == OrderStatus::Completed
            })
            .times(1)
            .returning(move |order| Ok(order_from(&order)));

        orders
            .expect_add_order_items()
            .withf(move |items| {
                items.len() == 2
                    && items
                        .iter()
                        .any(|i| i.product_id == a.id && i.quantity == 2)
                    && items
                        .iter()
                        .any(|i| i.product_id == b.id && i.quantity == 1)
            })
            .times(1)
            .returning(|items| Ok(placed_items_from(&items)));

        let mut checkout = Checkout::begin(Arc::new(orders), user, cart, &catalog)?;
        let placed = checkout.submit().await?;

        assert_eq!(placed.order.total_amount, expected_total);
        assert_eq!(placed.items.len(), 2);
        assert_eq!(placed.redirect_after, REDIRECT_DELAY);
        assert!(checkout.is_submitted());

        Ok(())
    }

    #[tokio::test]
    async fn price_at_purchase_is_captured_from_the_snapshot() -> TestResult {
        let product = fixtures::product("Widget", 1999, 5, "tools");
        let unit_price = product.price;
        let catalog = vec![product.clone()];

        let mut cart = Cart::new();
        cart.add(product.id);

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .returning(move |order| Ok(order_from(&order)));

        orders
            .expect_add_order_items()
            .withf(move |items| items.iter().all(|i| i.price_at_purchase == unit_price))
            .times(1)
            .returning(|items| Ok(placed_items_from(&items)));

        let mut checkout = Checkout::begin(Arc::new(orders), UserId::new(), cart, &catalog)?;
        checkout.submit().await?;

        Ok(())
    }

    #[tokio::test]
    async fn header_failure_writes_no_items() -> TestResult {
        let product = fixtures::product("Widget", 1000, 5, "tools");
        let catalog = vec![product.clone()];
        let mut cart = Cart::new();
        cart.add(product.id);

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .times(1)
            .returning(|_| Err(backend_failure()));
        orders.expect_add_order_items().times(0);
        orders.expect_delete_order().times(0);

        let mut checkout = Checkout::begin(Arc::new(orders), UserId::new(), cart, &catalog)?;
        let result = checkout.submit().await;

        assert!(matches!(result, Err(CheckoutError::Orders(_))));
        assert!(!checkout.is_submitted());

        Ok(())
    }

    #[tokio::test]
    async fn items_failure_removes_the_orphaned_header() -> TestResult {
        let product = fixtures::product("Widget", 1000, 5, "tools");
        let catalog = vec![product.clone()];
        let mut cart = Cart::new();
        cart.add(product.id);

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .returning(move |order| Ok(order_from(&order)));
        orders
            .expect_add_order_items()
            .times(1)
            .returning(|_| Err(backend_failure()));
        orders
            .expect_delete_order()
            .times(1)
            .returning(|_| Ok(()));

        let mut checkout = Checkout::begin(Arc::new(orders), UserId::new(), cart, &catalog)?;
        let result = checkout.submit().await;

        assert!(matches!(result, Err(CheckoutError::Orders(_))));
        assert!(!checkout.is_submitted(), "a failed submission is retryable");

        Ok(())
    }

    #[tokio::test]
    async fn failed_submission_can_be_retried() -> TestResult {
        let product = fixtures::product("Widget", 1000, 5, "tools");
        let catalog = vec![product.clone()];
        let mut cart = Cart::new();
        cart.add(product.id);

        let mut orders = MockOrdersService::new();
        let mut attempts = 0;

        orders.expect_create_order().times(2).returning(move |order| {
            attempts += 1;

            if attempts == 1 {
                Err(backend_failure())
            } else {
                Ok(order_from(&order))
            }
        });
        orders
            .expect_add_order_items()
            .times(1)
            .returning(|items| Ok(placed_items_from(&items)));

        let mut checkout = Checkout::begin(Arc::new(orders), UserId::new(), cart, &catalog)?;

        assert!(checkout.submit().await.is_err());
        assert!(checkout.submit().await.is_ok());

        Ok(())
    }

    #[tokio::test]
    async fn resubmission_after_success_is_rejected() -> TestResult {
        let product = fixtures::product("Widget", 1000, 5, "tools");
        let catalog = vec![product.clone()];
        let mut cart = Cart::new();
        cart.add(product.id);

        let mut orders = MockOrdersService::new();

        orders
            .expect_create_order()
            .times(1)
            .returning(move |order| Ok(order_from(&order)));
        orders
            .expect_add_order_items()
            .times(1)
            .returning(|items| Ok(placed_items_from(&items)));

        let mut checkout = Checkout::begin(Arc::new(orders), UserId::new(), cart, &catalog)?;

        checkout.submit().await?;
        let second = checkout.submit().await;

        assert!(matches!(second, Err(CheckoutError::AlreadySubmitted)));

        Ok(())
    }
}

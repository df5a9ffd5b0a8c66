//! Pricing Aggregator
//!
//! Pure, deterministic derivation of a cart total from a price snapshot.

use rustc_hash::FxHashMap;

use crate::{
    cart::Cart,
    prices::Price,
    products::{Product, ProductId},
};

/// Snapshot of unit prices keyed by product, taken from a loaded catalog.
#[derive(Debug, Clone, Default)]
pub struct PriceList {
    prices: FxHashMap<ProductId, Price>,
}

impl PriceList {
    /// Builds a snapshot from the given products.
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self {
            prices: products
                .into_iter()
                .map(|product| (product.id, product.price))
                .collect(),
        }
    }

    /// The unit price for a product, if it is in the snapshot.
    #[must_use]
    pub fn price_of(&self, product_id: ProductId) -> Option<Price> {
        self.prices.get(&product_id).copied()
    }
}

/// Calculates the total of a cart against a price snapshot.
///
/// Lines whose product is missing from the snapshot contribute zero; money
/// arithmetic saturates rather than wraps.
#[must_use]
pub fn cart_total(cart: &Cart, prices: &PriceList) -> Price {
    cart.lines().fold(Price::ZERO, |total, line| {
        let unit = prices.price_of(line.product_id).unwrap_or(Price::ZERO);

        total.saturating_add(unit.saturating_mul(line.quantity))
    })
}

//! Cart Store
//!
//! The cart is a transient, exclusively-owned value: created empty when the
//! catalog view opens, handed to checkout by value, and discarded on
//! successful order placement. It is never persisted.

use rustc_hash::FxHashMap;

use crate::{prices::Price, pricing::PriceList, products::ProductId};

/// One cart entry: a product and the requested quantity (always ≥ 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Mapping from product to requested quantity.
///
/// There is deliberately no removal or quantity-decrement operation, and no
/// upper bound against available stock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: FxHashMap<ProductId, u32>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of the given product, inserting the line if absent.
    pub fn add(&mut self, product_id: ProductId) {
        let quantity = self.lines.entry(product_id).or_insert(0);
        *quantity = quantity.saturating_add(1);
    }

    /// The quantity requested for a product, zero if absent.
    #[must_use]
    pub fn quantity(&self, product_id: ProductId) -> u32 {
        self.lines.get(&product_id).copied().unwrap_or(0)
    }

    /// Whether the cart holds any lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Iterates the cart's lines. No ordering is guaranteed.
    pub fn lines(&self) -> impl Iterator<Item = CartLine> + '_ {
        self.lines.iter().map(|(product_id, quantity)| CartLine {
            product_id: *product_id,
            quantity: *quantity,
        })
    }

    /// The cart total against the given price list.
    ///
    /// Lines whose product is missing from the list contribute zero.
    #[must_use]
    pub fn total(&self, prices: &PriceList) -> Price {
        crate::pricing::cart_total(self, prices)
    }
}

#[cfg(test)]
mod tests {
    use crate::{fixtures, pricing::PriceList};

    use super::*;

    #[test]
    fn adding_same_product_twice_yields_one_line_of_two() {
        let product = ProductId::new();
        let mut cart = Cart::new();

        cart.add(product);
        cart.add(product);

        assert_eq!(cart.quantity(product), 2);
        assert_eq!(cart.len(), 1, "no other lines should exist");
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new();

        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
    }

    #[test]
    fn adding_distinct_products_creates_distinct_lines() {
        let (a, b) = (ProductId::new(), ProductId::new());
        let mut cart = Cart::new();

        cart.add(a);
        cart.add(b);
        cart.add(b);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity(a), 1);
        assert_eq!(cart.quantity(b), 2);
    }

    #[test]
    fn quantity_of_absent_product_is_zero() {
        let cart = Cart::new();

        assert_eq!(cart.quantity(ProductId::new()), 0);
    }

    #[test]
    fn lines_reflect_the_mapping() {
        let product = ProductId::new();
        let mut cart = Cart::new();

        cart.add(product);
        cart.add(product);
        cart.add(product);

        let lines: Vec<CartLine> = cart.lines().collect();

        assert_eq!(lines.len(), 1);
        assert!(
            lines.contains(&CartLine {
                product_id: product,
                quantity: 3
            }),
            "line should carry the accumulated quantity"
        );
    }

    #[test]
    fn total_delegates_to_the_aggregator() {
        let catalog = fixtures::catalog();
        let prices = PriceList::from_products(&catalog);
        let first = catalog.first().expect("fixture catalog is non-empty");

        let mut cart = Cart::new();
        cart.add(first.id);

        assert_eq!(cart.total(&prices), first.price);
    }
}

//! Product Models

use jiff::Timestamp;

use crate::{ids::TypedUuid, prices::Price, users::UserId};

/// Product UUID
pub type ProductId = TypedUuid<Product>;

/// Catalog product. Immutable from the shopper's perspective; mutated only
/// through the admin surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub stock_quantity: u32,
    pub category: String,
    pub image_url: Option<String>,
    pub created_by: Option<UserId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Product {
    /// Whether the product is orderable from the shopper catalog.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }
}

//! Product input models.

use shopfront::{prices::Price, users::UserId};

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub stock_quantity: u32,
    pub category: String,
    pub image_url: Option<String>,
    pub created_by: UserId,
}

/// Product Update Data
///
/// Full replacement of the editable fields; the creator audit field is never
/// rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub stock_quantity: u32,
    pub category: String,
    pub image_url: Option<String>,
}

//! Product wire records.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shopfront::{
    prices::{Price, PriceError},
    products::{Product, ProductId},
};

use crate::domain::products::models::{NewProduct, ProductUpdate};

/// Product row as returned by the `products` resource.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProductRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: u32,
    pub category: String,
    pub image_url: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ProductRecord> for Product {
    type Error = PriceError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ProductId::from_uuid(record.id),
            name: record.name,
            description: record.description,
            price: Price::from_decimal(record.price)?,
            stock_quantity: record.stock_quantity,
            category: record.category,
            image_url: record.image_url,
            created_by: record.created_by.map(Into::into),
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

/// Insert/update payload for the `products` resource.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ProductWriteRecord {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: u32,
    pub category: String,
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
}

impl From<NewProduct> for ProductWriteRecord {
    fn from(product: NewProduct) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price.to_decimal(),
            stock_quantity: product.stock_quantity,
            category: product.category,
            image_url: product.image_url,
            created_by: Some(product.created_by.into_uuid()),
        }
    }
}

impl From<ProductUpdate> for ProductWriteRecord {
    fn from(update: ProductUpdate) -> Self {
        Self {
            name: update.name,
            description: update.description,
            price: update.price.to_decimal(),
            stock_quantity: update.stock_quantity,
            category: update.category,
            image_url: update.image_url,
            created_by: None,
        }
    }
}

//! Sample catalog data for tests, demos and seeding.

use jiff::Timestamp;

use crate::{
    prices::Price,
    products::{Product, ProductId},
};

/// Builds a product with the given name, price in minor units, stock and
/// category. Ids are fresh; timestamps are fixed so fixtures stay
/// deterministic.
#[must_use]
pub fn product(name: &str, price_minor: u64, stock_quantity: u32, category: &str) -> Product {
    Product {
        id: ProductId::new(),
        name: name.to_string(),
        description: format!("{name} ({category})"),
        price: Price::from_minor(price_minor),
        stock_quantity,
        category: category.to_string(),
        image_url: None,
        created_by: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A small mixed catalog: three categories, one out-of-stock product.
#[must_use]
pub fn catalog() -> Vec<Product> {
    vec![
        product("Espresso Machine", 24_900, 3, "kitchen"),
        product("Burr Grinder", 7_900, 8, "kitchen"),
        product("Desk Lamp", 3_500, 10, "office"),
        product("Desk Chair", 12_900, 0, "furniture"),
    ]
}

//! Terminal table rendering.

use tabled::{Table, Tabled, settings::Style};

use shopfront::{cart::Cart, orders::Order, products::Product};

#[derive(Tabled)]
struct ProductRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Stock")]
    stock: u32,
    #[tabled(rename = "Category")]
    category: String,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            stock: product.stock_quantity,
            category: product.category.clone(),
        }
    }
}

#[derive(Tabled)]
struct OrderRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Placed at")]
    placed_at: String,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            status: order.status.to_string(),
            total: order.total_amount.to_string(),
            placed_at: order.created_at.to_string(),
        }
    }
}

#[derive(Tabled)]
struct CartLineRow {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Unit price")]
    unit_price: String,
}

pub(crate) fn product_table<'a>(products: impl IntoIterator<Item = &'a Product>) -> String {
    render(products.into_iter().map(ProductRow::from))
}

pub(crate) fn order_table(orders: &[Order]) -> String {
    render(orders.iter().map(OrderRow::from))
}

/// Cart summary with names and unit prices resolved from the catalog.
pub(crate) fn cart_table(cart: &Cart, catalog: &[Product]) -> String {
    render(cart.lines().map(|line| {
        let product = catalog.iter().find(|p| p.id == line.product_id);

        CartLineRow {
            product: product.map_or_else(|| line.product_id.to_string(), |p| p.name.clone()),
            quantity: line.quantity,
            unit_price: product.map_or_else(String::new, |p| p.price.to_string()),
        }
    }))
}

fn render<R: Tabled>(rows: impl Iterator<Item = R>) -> String {
    Table::new(rows).with(Style::sharp()).to_string()
}

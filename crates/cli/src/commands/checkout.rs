//! Cart building and order submission.

use std::sync::Arc;

use clap::Args;
use tokio::time::sleep;
use uuid::Uuid;

use shopfront::{cart::Cart, products::ProductId};
use shopfront_app::{context::AppContext, domain::checkout::Checkout};

use crate::{
    commands::{CliError, signed_in_user},
    config::AccountArgs,
    output,
};

#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Product to order; repeat the flag to add one unit per occurrence
    #[arg(long = "item", value_name = "PRODUCT_ID", required = true)]
    pub items: Vec<Uuid>,
}

pub(crate) async fn run(
    ctx: &AppContext,
    account: &AccountArgs,
    args: CheckoutArgs,
) -> Result<(), CliError> {
    let user = signed_in_user(ctx, account).await?;

    let catalog = ctx.products.list_available().await?;

    let mut cart = Cart::new();

    for id in &args.items {
        let product_id = ProductId::from_uuid(*id);

        if !catalog.iter().any(|product| product.id == product_id) {
            return Err(CliError::UnknownProduct(*id));
        }

        cart.add(product_id);
    }

    let mut checkout = Checkout::begin(Arc::clone(&ctx.orders), user.id, cart, &catalog)?;

    println!("{}", output::cart_table(checkout.cart(), &catalog));
    println!("Total: {}", checkout.total());

    let placed = checkout.submit().await?;

    println!(
        "Order placed successfully! ({}, total {})",
        placed.order.id, placed.order.total_amount
    );

    // Linger on the confirmation, then show order history.
    sleep(placed.redirect_after).await;

    let orders = ctx.orders.list_orders(user.id).await?;

    println!("{}", output::order_table(&orders));

    Ok(())
}

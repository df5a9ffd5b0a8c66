//! Order history.

use shopfront_app::context::AppContext;

use crate::{
    commands::{CliError, signed_in_user},
    config::AccountArgs,
    output,
};

pub(crate) async fn run(ctx: &AppContext, account: &AccountArgs) -> Result<(), CliError> {
    let user = signed_in_user(ctx, account).await?;

    let orders = ctx.orders.list_orders(user.id).await?;

    if orders.is_empty() {
        println!("No orders yet");
    } else {
        println!("{}", output::order_table(&orders));
    }

    Ok(())
}

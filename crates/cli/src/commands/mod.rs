//! CLI commands.

use std::path::PathBuf;

use clap::Subcommand;
use thiserror::Error;
use uuid::Uuid;

use shopfront::{prices::PriceError, users::User};
use shopfront_app::{
    context::AppContext,
    domain::{checkout::CheckoutError, orders::OrdersServiceError, products::ProductsServiceError},
    session::SessionError,
};

use crate::config::AccountArgs;

mod account;
mod admin;
mod catalog;
mod checkout;
mod orders;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the shopper catalog
    Catalog(catalog::CatalogArgs),

    /// Build a cart and place an order
    Checkout(checkout::CheckoutArgs),

    /// Show your order history
    Orders,

    /// Register a new account and sign in
    Signup(account::SignupArgs),

    /// Show the signed-in profile
    Profile,

    /// Manage the product catalog (admin only)
    #[command(subcommand)]
    Admin(admin::AdminCommand),
}

/// Errors surfaced to the terminal, verbatim.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("email and password are required (set SHOPFRONT_EMAIL / SHOPFRONT_PASSWORD)")]
    MissingCredentials,

    #[error("this command requires an admin account")]
    AdminRequired,

    #[error("product {0} is not in the catalog")]
    UnknownProduct(Uuid),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Products(#[from] ProductsServiceError),

    #[error(transparent)]
    Orders(#[from] OrdersServiceError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error("failed to read seed file {}", path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {}", path.display())]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_norway::Error,
    },

    #[error("invalid price for seed product {name}")]
    SeedPrice {
        name: String,
        #[source]
        source: PriceError,
    },
}

pub(crate) async fn dispatch(
    ctx: &AppContext,
    account: &AccountArgs,
    command: Command,
) -> Result<(), CliError> {
    match command {
        Command::Catalog(args) => catalog::run(ctx, args).await,
        Command::Checkout(args) => checkout::run(ctx, account, args).await,
        Command::Orders => orders::run(ctx, account).await,
        Command::Signup(args) => account::signup(ctx, account, args).await,
        Command::Profile => account::profile(ctx, account).await,
        Command::Admin(command) => admin::run(ctx, account, command).await,
    }
}

/// The restored session's user, or a fresh sign-in with the configured
/// credentials.
pub(crate) async fn signed_in_user(
    ctx: &AppContext,
    account: &AccountArgs,
) -> Result<User, CliError> {
    if let Some(user) = ctx.session.current_user() {
        return Ok(user);
    }

    let (email, password) = account.credentials().ok_or(CliError::MissingCredentials)?;

    Ok(ctx.session.sign_in(email, password.as_str()).await?)
}

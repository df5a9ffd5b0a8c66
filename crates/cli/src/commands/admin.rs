//! Admin product management.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use shopfront::{
    prices::Price,
    products::ProductId,
    users::User,
};
use shopfront_app::{
    context::AppContext,
    domain::products::models::{NewProduct, ProductUpdate},
};

use crate::{
    commands::{CliError, signed_in_user},
    config::AccountArgs,
    output,
};

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List every product, including out-of-stock ones
    List,

    /// Create a product
    Create(ProductArgs),

    /// Replace a product's editable fields
    Update {
        /// Product to update
        #[arg(long)]
        id: Uuid,

        #[command(flatten)]
        product: ProductArgs,
    },

    /// Delete a product
    Delete {
        /// Product to delete
        #[arg(long)]
        id: Uuid,
    },

    /// Create products from a YAML fixture file
    Seed {
        /// Fixture file with a list of products
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
pub struct ProductArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Product description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Unit price in major units, e.g. "19.99"
    #[arg(long)]
    pub price: Price,

    /// Units in stock
    #[arg(long)]
    pub stock: u32,

    /// Category label
    #[arg(long)]
    pub category: String,

    /// Image reference
    #[arg(long)]
    pub image_url: Option<String>,
}

pub(crate) async fn run(
    ctx: &AppContext,
    account: &AccountArgs,
    command: AdminCommand,
) -> Result<(), CliError> {
    let user = signed_in_user(ctx, account).await?;

    if !user.role.is_admin() {
        return Err(CliError::AdminRequired);
    }

    match command {
        AdminCommand::List => {
            let products = ctx.products.list_products().await?;

            println!("{}", output::product_table(&products));

            Ok(())
        }
        AdminCommand::Create(args) => {
            let product = ctx
                .products
                .create_product(NewProduct {
                    name: args.name,
                    description: args.description,
                    price: args.price,
                    stock_quantity: args.stock,
                    category: args.category,
                    image_url: args.image_url,
                    created_by: user.id,
                })
                .await?;

            println!("Created product {} ({})", product.name, product.id);

            Ok(())
        }
        AdminCommand::Update { id, product: args } => {
            let product = ctx
                .products
                .update_product(
                    ProductId::from_uuid(id),
                    ProductUpdate {
                        name: args.name,
                        description: args.description,
                        price: args.price,
                        stock_quantity: args.stock,
                        category: args.category,
                        image_url: args.image_url,
                    },
                )
                .await?;

            println!("Updated product {} ({})", product.name, product.id);

            Ok(())
        }
        AdminCommand::Delete { id } => {
            ctx.products.delete_product(ProductId::from_uuid(id)).await?;

            println!("Deleted product {id}");

            Ok(())
        }
        AdminCommand::Seed { file } => seed(ctx, &user, file).await,
    }
}

/// One product entry in a seed fixture file.
#[derive(Debug, Deserialize)]
struct SeedProduct {
    name: String,
    #[serde(default)]
    description: String,
    price: Decimal,
    stock_quantity: u32,
    category: String,
    #[serde(default)]
    image_url: Option<String>,
}

async fn seed(ctx: &AppContext, user: &User, path: PathBuf) -> Result<(), CliError> {
    let raw = std::fs::read_to_string(&path).map_err(|source| CliError::SeedRead {
        path: path.clone(),
        source,
    })?;

    let seeds: Vec<SeedProduct> =
        serde_norway::from_str(&raw).map_err(|source| CliError::SeedParse {
            path: path.clone(),
            source,
        })?;

    let mut created = 0_usize;

    for entry in seeds {
        let price = Price::from_decimal(entry.price).map_err(|source| CliError::SeedPrice {
            name: entry.name.clone(),
            source,
        })?;

        let product = ctx
            .products
            .create_product(NewProduct {
                name: entry.name,
                description: entry.description,
                price,
                stock_quantity: entry.stock_quantity,
                category: entry.category,
                image_url: entry.image_url,
                created_by: user.id,
            })
            .await?;

        info!(product = %product.id, name = %product.name, "seeded product");

        created += 1;
    }

    println!("Seeded {created} products");

    Ok(())
}

//! Catalog browsing.

use clap::Args;

use shopfront::catalog::{CatalogFilter, categories};
use shopfront_app::context::AppContext;

use crate::{commands::CliError, output};

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Case-insensitive search across name and description
    #[arg(long)]
    pub search: Option<String>,

    /// Exact category filter
    #[arg(long)]
    pub category: Option<String>,

    /// List the distinct categories instead of products
    #[arg(long)]
    pub categories: bool,
}

pub(crate) async fn run(ctx: &AppContext, args: CatalogArgs) -> Result<(), CliError> {
    let products = ctx.products.list_available().await?;

    if args.categories {
        for category in categories(&products) {
            println!("{category}");
        }

        return Ok(());
    }

    let mut filter = CatalogFilter::new();

    if let Some(term) = args.search {
        filter = filter.with_search(term);
    }

    if let Some(category) = args.category {
        filter = filter.with_category(category);
    }

    let visible = filter.apply(&products);

    if visible.is_empty() {
        println!("No products found");
    } else {
        println!("{}", output::product_table(visible));
    }

    Ok(())
}

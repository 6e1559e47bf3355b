use clap::Subcommand;

use business::domain::catalog::model::{Language, ProductCategory};
use business::domain::catalog::use_cases::get_product::GetProductParams;
use business::domain::catalog::use_cases::list_products::ListProductsParams;

use crate::setup::dependency_injection::DependencyContainer;

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List catalog products
    List {
        /// Restrict to one merchandising category
        #[arg(long)]
        category: Option<ProductCategory>,
        /// Display language for product names
        #[arg(long, default_value = "ko")]
        lang: Language,
    },
    /// Show one product in detail
    Show {
        id: u32,
        #[arg(long, default_value = "ko")]
        lang: Language,
    },
}

pub fn run(command: CatalogCommand, container: &DependencyContainer) -> anyhow::Result<()> {
    match command {
        CatalogCommand::List { category, lang } => {
            let products = container
                .list_products
                .execute(ListProductsParams { category });

            for product in &products {
                let sale_mark = if product.on_sale { "  (sale)" } else { "" };
                println!(
                    "{:>3}  {:<30} {:>9} KRW{}",
                    product.id,
                    product.name.get(lang),
                    product.sale_price,
                    sale_mark
                );
            }
            println!("{} products", products.len());
            Ok(())
        }
        CatalogCommand::Show { id, lang } => {
            let product = container.get_product.execute(GetProductParams { id })?;

            println!("{} (#{})", product.name.get(lang), product.id);
            println!("  category:       {}", product.category);
            println!("  price:          {} KRW", product.sale_price);
            if product.on_sale {
                println!(
                    "  original price: {} KRW (-{}%)",
                    product.original_price,
                    product.discount_percent()
                );
            }
            println!(
                "  reviews: {}   likes: {}",
                product.review_count, product.like_count
            );
            Ok(())
        }
    }
}

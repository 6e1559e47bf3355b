use clap::Subcommand;

use business::domain::cart::model::Cart;
use business::domain::cart::use_cases::add::AddToCartParams;
use business::domain::cart::use_cases::remove::RemoveFromCartParams;
use business::domain::cart::use_cases::set_quantity::SetQuantityParams;
use business::domain::catalog::model::Language;
use business::domain::catalog::use_cases::get_product::GetProductParams;

use crate::setup::dependency_injection::DependencyContainer;

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    /// Show the cart contents and totals
    Show {
        #[arg(long, default_value = "ko")]
        lang: Language,
    },
    /// Add a catalog product to the cart
    Add {
        id: u32,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product line from the cart
    Remove { id: u32 },
    /// Overwrite a line's quantity (0 removes the line)
    SetQuantity { id: u32, quantity: u32 },
    /// Empty the cart
    Clear,
}

fn print_summary(cart: &Cart) {
    println!("{} items, {} KRW total", cart.item_count(), cart.total());
}

pub fn run(command: CartCommand, container: &DependencyContainer) -> anyhow::Result<()> {
    match command {
        CartCommand::Show { lang } => {
            let cart = container.get_cart.execute();

            if cart.is_empty() {
                println!("Cart is empty");
                return Ok(());
            }
            for line in cart.lines() {
                println!(
                    "{:>3}  {:<30} x{:<3} {:>9} KRW",
                    line.product.id,
                    line.product.name.get(lang),
                    line.quantity,
                    line.line_total()
                );
            }
            print_summary(&cart);
            Ok(())
        }
        CartCommand::Add { id, quantity } => {
            // The cart expects a full product value, resolved here against
            // the catalog.
            let product = container.get_product.execute(GetProductParams { id })?;
            let cart = container
                .add_to_cart
                .execute(AddToCartParams { product, quantity });

            print_summary(&cart);
            Ok(())
        }
        CartCommand::Remove { id } => {
            let cart = container
                .remove_from_cart
                .execute(RemoveFromCartParams { product_id: id });

            print_summary(&cart);
            Ok(())
        }
        CartCommand::SetQuantity { id, quantity } => {
            let cart = container.set_quantity.execute(SetQuantityParams {
                product_id: id,
                quantity,
            });

            print_summary(&cart);
            Ok(())
        }
        CartCommand::Clear => {
            let cart = container.clear_cart.execute();

            print_summary(&cart);
            Ok(())
        }
    }
}

use crate::domain::cart::model::Cart;
use crate::domain::catalog::model::Product;

pub struct AddToCartParams {
    /// Full product value, resolved by the caller against the catalog.
    pub product: Product,
    pub quantity: u32,
}

/// Adds a product to the cart, merging into an existing line for the same
/// product id. Returns the mutated cart; persistence failures are logged
/// and swallowed.
pub trait AddToCartUseCase: Send + Sync {
    fn execute(&self, params: AddToCartParams) -> Cart;
}

use crate::domain::cart::model::Cart;

/// Replaces the cart with an empty one.
pub trait ClearCartUseCase: Send + Sync {
    fn execute(&self) -> Cart;
}

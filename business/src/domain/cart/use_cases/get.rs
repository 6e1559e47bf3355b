use crate::domain::cart::model::Cart;

/// Reads the current cart. A storage read failure yields an empty cart;
/// this operation never fails.
pub trait GetCartUseCase: Send + Sync {
    fn execute(&self) -> Cart;
}

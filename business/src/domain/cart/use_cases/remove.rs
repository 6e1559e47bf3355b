use crate::domain::cart::model::Cart;

pub struct RemoveFromCartParams {
    pub product_id: u32,
}

/// Removes the line for a product id; a no-op when absent.
pub trait RemoveFromCartUseCase: Send + Sync {
    fn execute(&self, params: RemoveFromCartParams) -> Cart;
}

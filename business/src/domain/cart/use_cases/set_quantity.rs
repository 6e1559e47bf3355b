use crate::domain::cart::model::Cart;

pub struct SetQuantityParams {
    pub product_id: u32,
    /// Zero deletes the line instead of erroring.
    pub quantity: u32,
}

/// Overwrites the quantity of an existing line; never creates one.
pub trait SetQuantityUseCase: Send + Sync {
    fn execute(&self, params: SetQuantityParams) -> Cart;
}

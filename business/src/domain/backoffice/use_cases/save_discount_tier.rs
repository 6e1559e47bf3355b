use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::DiscountTier;

pub struct SaveDiscountTierParams {
    pub token: String,
    pub tier: DiscountTier,
}

#[async_trait]
pub trait SaveDiscountTierUseCase: Send + Sync {
    async fn execute(&self, params: SaveDiscountTierParams) -> Result<DiscountTier, BackendError>;
}

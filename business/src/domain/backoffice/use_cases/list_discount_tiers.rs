use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::DiscountTier;

pub struct ListDiscountTiersParams {
    pub token: String,
}

#[async_trait]
pub trait ListDiscountTiersUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListDiscountTiersParams,
    ) -> Result<Vec<DiscountTier>, BackendError>;
}

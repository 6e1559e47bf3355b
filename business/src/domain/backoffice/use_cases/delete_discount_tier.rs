use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::backoffice::errors::BackendError;

pub struct DeleteDiscountTierParams {
    pub token: String,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteDiscountTierUseCase: Send + Sync {
    async fn execute(&self, params: DeleteDiscountTierParams) -> Result<(), BackendError>;
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::backoffice::errors::BackendError;

pub struct DeleteCommissionParams {
    pub token: String,
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteCommissionUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCommissionParams) -> Result<(), BackendError>;
}

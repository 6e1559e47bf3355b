use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::Commission;

pub struct SaveCommissionParams {
    pub token: String,
    pub commission: Commission,
}

#[async_trait]
pub trait SaveCommissionUseCase: Send + Sync {
    async fn execute(&self, params: SaveCommissionParams) -> Result<Commission, BackendError>;
}

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::Commission;

pub struct ListCommissionsParams {
    pub token: String,
}

#[async_trait]
pub trait ListCommissionsUseCase: Send + Sync {
    async fn execute(&self, params: ListCommissionsParams) -> Result<Vec<Commission>, BackendError>;
}

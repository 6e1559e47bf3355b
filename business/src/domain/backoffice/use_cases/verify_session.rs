use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::AdminSession;

pub struct VerifySessionParams {
    pub token: String,
}

#[async_trait]
pub trait VerifySessionUseCase: Send + Sync {
    async fn execute(&self, params: VerifySessionParams) -> Result<AdminSession, BackendError>;
}

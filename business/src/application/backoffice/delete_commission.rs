use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::services::CommissionService;
use crate::domain::backoffice::use_cases::delete_commission::{
    DeleteCommissionParams, DeleteCommissionUseCase,
};
use crate::domain::logger::Logger;

pub struct DeleteCommissionUseCaseImpl {
    pub service: Arc<dyn CommissionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCommissionUseCase for DeleteCommissionUseCaseImpl {
    async fn execute(&self, params: DeleteCommissionParams) -> Result<(), BackendError> {
        self.logger
            .info(&format!("Deleting commission {}", params.id));

        self.service.delete(&params.token, params.id).await?;

        self.logger
            .info(&format!("Commission deleted: {}", params.id));
        Ok(())
    }
}

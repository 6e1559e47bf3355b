use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::Commission;
use crate::domain::backoffice::services::CommissionService;
use crate::domain::backoffice::use_cases::save_commission::{
    SaveCommissionParams, SaveCommissionUseCase,
};
use crate::domain::logger::Logger;

pub struct SaveCommissionUseCaseImpl {
    pub service: Arc<dyn CommissionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveCommissionUseCase for SaveCommissionUseCaseImpl {
    async fn execute(&self, params: SaveCommissionParams) -> Result<Commission, BackendError> {
        self.logger.info(&format!(
            "Saving commission for {}",
            params.commission.partner_name
        ));

        let saved = self.service.save(&params.token, &params.commission).await?;

        self.logger.info(&format!("Commission saved: {}", saved.id));
        Ok(saved)
    }
}

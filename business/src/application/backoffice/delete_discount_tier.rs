use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::services::DiscountTierService;
use crate::domain::backoffice::use_cases::delete_discount_tier::{
    DeleteDiscountTierParams, DeleteDiscountTierUseCase,
};
use crate::domain::logger::Logger;

pub struct DeleteDiscountTierUseCaseImpl {
    pub service: Arc<dyn DiscountTierService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteDiscountTierUseCase for DeleteDiscountTierUseCaseImpl {
    async fn execute(&self, params: DeleteDiscountTierParams) -> Result<(), BackendError> {
        self.logger
            .info(&format!("Deleting discount tier {}", params.id));

        self.service.delete(&params.token, params.id).await?;

        self.logger
            .info(&format!("Discount tier deleted: {}", params.id));
        Ok(())
    }
}

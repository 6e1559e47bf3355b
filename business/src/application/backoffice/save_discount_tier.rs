use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::DiscountTier;
use crate::domain::backoffice::services::DiscountTierService;
use crate::domain::backoffice::use_cases::save_discount_tier::{
    SaveDiscountTierParams, SaveDiscountTierUseCase,
};
use crate::domain::logger::Logger;

pub struct SaveDiscountTierUseCaseImpl {
    pub service: Arc<dyn DiscountTierService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SaveDiscountTierUseCase for SaveDiscountTierUseCaseImpl {
    async fn execute(&self, params: SaveDiscountTierParams) -> Result<DiscountTier, BackendError> {
        self.logger
            .info(&format!("Saving discount tier {}", params.tier.name));

        let saved = self.service.save(&params.token, &params.tier).await?;

        self.logger
            .info(&format!("Discount tier saved: {}", saved.id));
        Ok(saved)
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::DiscountTier;
use crate::domain::backoffice::services::DiscountTierService;
use crate::domain::backoffice::use_cases::list_discount_tiers::{
    ListDiscountTiersParams, ListDiscountTiersUseCase,
};
use crate::domain::logger::Logger;

pub struct ListDiscountTiersUseCaseImpl {
    pub service: Arc<dyn DiscountTierService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListDiscountTiersUseCase for ListDiscountTiersUseCaseImpl {
    async fn execute(
        &self,
        params: ListDiscountTiersParams,
    ) -> Result<Vec<DiscountTier>, BackendError> {
        self.logger.info("Listing discount tiers");

        let tiers = self.service.list(&params.token).await?;

        self.logger
            .info(&format!("Retrieved {} discount tiers", tiers.len()));
        Ok(tiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub Tiers {}

        #[async_trait]
        impl DiscountTierService for Tiers {
            async fn list(&self, token: &str) -> Result<Vec<DiscountTier>, BackendError>;
            async fn save(&self, token: &str, tier: &DiscountTier) -> Result<DiscountTier, BackendError>;
            async fn delete(&self, token: &str, id: Uuid) -> Result<(), BackendError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_tiers() {
        let mut service = MockTiers::new();
        service.expect_list().returning(|_| {
            Ok(vec![
                DiscountTier::new("Silver", 5, 100_000),
                DiscountTier::new("VIP", 10, 500_000),
            ])
        });

        let use_case = ListDiscountTiersUseCaseImpl {
            service: Arc::new(service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListDiscountTiersParams {
                token: "t".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_propagate_backend_error() {
        let mut service = MockTiers::new();
        service
            .expect_list()
            .returning(|_| Err(BackendError::Unauthorized));

        let use_case = ListDiscountTiersUseCaseImpl {
            service: Arc::new(service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListDiscountTiersParams {
                token: "stale".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), BackendError::Unauthorized);
    }
}

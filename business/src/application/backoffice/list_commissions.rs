use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::Commission;
use crate::domain::backoffice::services::CommissionService;
use crate::domain::backoffice::use_cases::list_commissions::{
    ListCommissionsParams, ListCommissionsUseCase,
};
use crate::domain::logger::Logger;

pub struct ListCommissionsUseCaseImpl {
    pub service: Arc<dyn CommissionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCommissionsUseCase for ListCommissionsUseCaseImpl {
    async fn execute(
        &self,
        params: ListCommissionsParams,
    ) -> Result<Vec<Commission>, BackendError> {
        self.logger.info("Listing commissions");

        let commissions = self.service.list(&params.token).await?;

        self.logger
            .info(&format!("Retrieved {} commissions", commissions.len()));
        Ok(commissions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub Commissions {}

        #[async_trait]
        impl CommissionService for Commissions {
            async fn list(&self, token: &str) -> Result<Vec<Commission>, BackendError>;
            async fn save(&self, token: &str, commission: &Commission) -> Result<Commission, BackendError>;
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
    async fn should_return_commissions() {
        let mut service = MockCommissions::new();
        service
            .expect_list()
            .returning(|_| Ok(vec![Commission::new("Partner A", 7)]));

        let use_case = ListCommissionsUseCaseImpl {
            service: Arc::new(service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListCommissionsParams {
                token: "t".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_propagate_backend_error() {
        let mut service = MockCommissions::new();
        service
            .expect_list()
            .returning(|_| Err(BackendError::Network));

        let use_case = ListCommissionsUseCaseImpl {
            service: Arc::new(service),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ListCommissionsParams {
                token: "t".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), BackendError::Network);
    }
}

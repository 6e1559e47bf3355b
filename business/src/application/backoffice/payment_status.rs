use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::OrderPayment;
use crate::domain::backoffice::services::PaymentService;
use crate::domain::backoffice::use_cases::payment_status::{
    PaymentStatusParams, PaymentStatusUseCase,
};
use crate::domain::logger::Logger;

pub struct PaymentStatusUseCaseImpl {
    pub service: Arc<dyn PaymentService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PaymentStatusUseCase for PaymentStatusUseCaseImpl {
    async fn execute(&self, params: PaymentStatusParams) -> Result<OrderPayment, BackendError> {
        self.logger
            .info(&format!("Looking up payment for order {}", params.order_code));

        let payment = self.service.status(&params.order_code).await?;

        self.logger.info(&format!(
            "Payment for order {} is {}",
            payment.order_code, payment.state
        ));
        Ok(payment)
    }
}

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::OrderPayment;

pub struct PaymentStatusParams {
    pub order_code: String,
}

#[async_trait]
pub trait PaymentStatusUseCase: Send + Sync {
    async fn execute(&self, params: PaymentStatusParams) -> Result<OrderPayment, BackendError>;
}

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use business::domain::backoffice::errors::BackendError;
use business::domain::backoffice::model::{OrderPayment, PaymentState};
use business::domain::backoffice::services::PaymentService;

use crate::client::{BackendClient, error_for_status};

pub struct PaymentServiceHttp {
    client: BackendClient,
}

impl PaymentServiceHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[derive(Deserialize)]
struct OrderPaymentDto {
    order_code: String,
    status: String,
    amount: u64,
    method: String,
    payer_name: String,
    paid_at: Option<DateTime<Utc>>,
}

impl OrderPaymentDto {
    fn into_domain(self) -> Result<OrderPayment, BackendError> {
        let state: PaymentState = self
            .status
            .parse()
            .map_err(|_| BackendError::InvalidResponse)?;
        Ok(OrderPayment {
            order_code: self.order_code,
            state,
            amount: self.amount,
            method: self.method,
            payer_name: self.payer_name,
            paid_at: self.paid_at,
        })
    }
}

#[async_trait]
impl PaymentService for PaymentServiceHttp {
    async fn status(&self, order_code: &str) -> Result<OrderPayment, BackendError> {
        let response = self
            .client
            .client
            .get(self.client.url(&format!("/orders/{}/payment", order_code)))
            .send()
            .await
            .map_err(|_| BackendError::Network)?;

        if !response.status().is_success() {
            return Err(error_for_status(response.status()));
        }

        let dto: OrderPaymentDto = response
            .json()
            .await
            .map_err(|_| BackendError::InvalidResponse)?;
        dto.into_domain()
    }
}

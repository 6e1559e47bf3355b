use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::backoffice::errors::BackendError;
use business::domain::backoffice::model::Commission;
use business::domain::backoffice::services::CommissionService;

use crate::client::{BackendClient, error_for_status};

pub struct CommissionServiceHttp {
    client: BackendClient,
}

impl CommissionServiceHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize, Deserialize)]
struct CommissionDto {
    id: Uuid,
    partner_name: String,
    rate_percent: u32,
    total_sales: u64,
}

impl CommissionDto {
    fn from_domain(commission: &Commission) -> Self {
        Self {
            id: commission.id,
            partner_name: commission.partner_name.clone(),
            rate_percent: commission.rate_percent,
            total_sales: commission.total_sales,
        }
    }

    fn into_domain(self) -> Commission {
        Commission {
            id: self.id,
            partner_name: self.partner_name,
            rate_percent: self.rate_percent,
            total_sales: self.total_sales,
        }
    }
}

#[async_trait]
impl CommissionService for CommissionServiceHttp {
    async fn list(&self, token: &str) -> Result<Vec<Commission>, BackendError> {
        let response = self
            .client
            .client
            .get(self.client.url("/admin/commissions"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|_| BackendError::Network)?;

        if !response.status().is_success() {
            return Err(error_for_status(response.status()));
        }

        let dtos: Vec<CommissionDto> = response
            .json()
            .await
            .map_err(|_| BackendError::InvalidResponse)?;
        Ok(dtos.into_iter().map(CommissionDto::into_domain).collect())
    }

    async fn save(
        &self,
        token: &str,
        commission: &Commission,
    ) -> Result<Commission, BackendError> {
        let response = self
            .client
            .client
            .put(
                self.client
                    .url(&format!("/admin/commissions/{}", commission.id)),
            )
            .bearer_auth(token)
            .json(&CommissionDto::from_domain(commission))
            .send()
            .await
            .map_err(|_| BackendError::Network)?;

        if !response.status().is_success() {
            return Err(error_for_status(response.status()));
        }

        let dto: CommissionDto = response
            .json()
            .await
            .map_err(|_| BackendError::InvalidResponse)?;
        Ok(dto.into_domain())
    }

    async fn delete(&self, token: &str, id: Uuid) -> Result<(), BackendError> {
        let response = self
            .client
            .client
            .delete(self.client.url(&format!("/admin/commissions/{}", id)))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|_| BackendError::Network)?;

        if !response.status().is_success() {
            return Err(error_for_status(response.status()));
        }
        Ok(())
    }
}

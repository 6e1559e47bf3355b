use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::backoffice::errors::BackendError;
use business::domain::backoffice::model::DiscountTier;
use business::domain::backoffice::services::DiscountTierService;

use crate::client::{BackendClient, error_for_status};

pub struct DiscountTierServiceHttp {
    client: BackendClient,
}

impl DiscountTierServiceHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize, Deserialize)]
struct DiscountTierDto {
    id: Uuid,
    name: String,
    rate_percent: u32,
    min_spend: u64,
}

impl DiscountTierDto {
    fn from_domain(tier: &DiscountTier) -> Self {
        Self {
            id: tier.id,
            name: tier.name.clone(),
            rate_percent: tier.rate_percent,
            min_spend: tier.min_spend,
        }
    }

    fn into_domain(self) -> DiscountTier {
        DiscountTier {
            id: self.id,
            name: self.name,
            rate_percent: self.rate_percent,
            min_spend: self.min_spend,
        }
    }
}

#[async_trait]
impl DiscountTierService for DiscountTierServiceHttp {
    async fn list(&self, token: &str) -> Result<Vec<DiscountTier>, BackendError> {
        let response = self
            .client
            .client
            .get(self.client.url("/admin/discount-tiers"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|_| BackendError::Network)?;

        if !response.status().is_success() {
            return Err(error_for_status(response.status()));
        }

        let dtos: Vec<DiscountTierDto> = response
            .json()
            .await
            .map_err(|_| BackendError::InvalidResponse)?;
        Ok(dtos.into_iter().map(DiscountTierDto::into_domain).collect())
    }

    async fn save(&self, token: &str, tier: &DiscountTier) -> Result<DiscountTier, BackendError> {
        let response = self
            .client
            .client
            .put(self.client.url(&format!("/admin/discount-tiers/{}", tier.id)))
            .bearer_auth(token)
            .json(&DiscountTierDto::from_domain(tier))
            .send()
            .await
            .map_err(|_| BackendError::Network)?;

        if !response.status().is_success() {
            return Err(error_for_status(response.status()));
        }

        let dto: DiscountTierDto = response
            .json()
            .await
            .map_err(|_| BackendError::InvalidResponse)?;
        Ok(dto.into_domain())
    }

    async fn delete(&self, token: &str, id: Uuid) -> Result<(), BackendError> {
        let response = self
            .client
            .client
            .delete(self.client.url(&format!("/admin/discount-tiers/{}", id)))
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

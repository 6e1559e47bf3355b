use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::backoffice::errors::BackendError;
use business::domain::backoffice::model::AdminSession;
use business::domain::backoffice::services::AuthService;

use crate::client::{BackendClient, error_for_status};

pub struct AuthServiceHttp {
    client: BackendClient,
}

impl AuthServiceHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[derive(Serialize)]
struct SignInBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SessionDto {
    token: String,
    email: String,
    name: String,
    expires_at: DateTime<Utc>,
}

impl SessionDto {
    fn into_domain(self) -> AdminSession {
        AdminSession {
            token: self.token,
            email: self.email,
            name: self.name,
            expires_at: self.expires_at,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceHttp {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession, BackendError> {
        let response = self
            .client
            .client
            .post(self.client.url("/admin/sign-in"))
            .json(&SignInBody { email, password })
            .send()
            .await
            .map_err(|_| BackendError::Network)?;

        if !response.status().is_success() {
            return Err(error_for_status(response.status()));
        }

        let dto: SessionDto = response
            .json()
            .await
            .map_err(|_| BackendError::InvalidResponse)?;
        Ok(dto.into_domain())
    }

    async fn fetch_session(&self, token: &str) -> Result<AdminSession, BackendError> {
        let response = self
            .client
            .client
            .get(self.client.url("/admin/session"))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|_| BackendError::Network)?;

        if !response.status().is_success() {
            return Err(error_for_status(response.status()));
        }

        let dto: SessionDto = response
            .json()
            .await
            .map_err(|_| BackendError::InvalidResponse)?;
        Ok(dto.into_domain())
    }
}

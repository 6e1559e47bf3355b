use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::AdminSession;
use crate::domain::backoffice::services::AuthService;
use crate::domain::backoffice::use_cases::verify_session::{
    VerifySessionParams, VerifySessionUseCase,
};
use crate::domain::logger::Logger;

pub struct VerifySessionUseCaseImpl {
    pub auth: Arc<dyn AuthService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl VerifySessionUseCase for VerifySessionUseCaseImpl {
    async fn execute(&self, params: VerifySessionParams) -> Result<AdminSession, BackendError> {
        self.logger.debug("Verifying admin session");

        let session = self.auth.fetch_session(&params.token).await?;
        if session.is_expired() {
            self.logger
                .warn(&format!("Session for {} has expired", session.email));
            return Err(BackendError::Unauthorized);
        }
        Ok(session)
    }
}

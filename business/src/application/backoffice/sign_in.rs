use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::AdminSession;
use crate::domain::backoffice::services::AuthService;
use crate::domain::backoffice::use_cases::sign_in::{SignInParams, SignInUseCase};
use crate::domain::logger::Logger;

pub struct SignInUseCaseImpl {
    pub auth: Arc<dyn AuthService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignInUseCase for SignInUseCaseImpl {
    async fn execute(&self, params: SignInParams) -> Result<AdminSession, BackendError> {
        self.logger
            .info(&format!("Signing in admin {}", params.email));

        let session = self.auth.sign_in(&params.email, &params.password).await?;

        self.logger
            .info(&format!("Admin session opened for {}", session.email));
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use mockall::mock;

    mock! {
        pub Auth {}

        #[async_trait]
        impl AuthService for Auth {
            async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession, BackendError>;
            async fn fetch_session(&self, token: &str) -> Result<AdminSession, BackendError>;
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

    fn session() -> AdminSession {
        AdminSession {
            token: "session-token".to_string(),
            email: "admin@brand.kr".to_string(),
            name: "Admin".to_string(),
            expires_at: Utc::now() + Duration::hours(8),
        }
    }

    #[tokio::test]
    async fn should_return_session_on_success() {
        let mut auth = MockAuth::new();
        auth.expect_sign_in().returning(|_, _| Ok(session()));

        let use_case = SignInUseCaseImpl {
            auth: Arc::new(auth),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SignInParams {
                email: "admin@brand.kr".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().token, "session-token");
    }

    #[tokio::test]
    async fn should_propagate_unauthorized() {
        let mut auth = MockAuth::new();
        auth.expect_sign_in()
            .returning(|_, _| Err(BackendError::Unauthorized));

        let use_case = SignInUseCaseImpl {
            auth: Arc::new(auth),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SignInParams {
                email: "admin@brand.kr".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), BackendError::Unauthorized);
    }
}

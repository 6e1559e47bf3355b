use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::{ReportRange, UserReport};

pub struct UserReportParams {
    pub token: String,
    pub range: ReportRange,
}

#[async_trait]
pub trait UserReportUseCase: Send + Sync {
    async fn execute(&self, params: UserReportParams) -> Result<UserReport, BackendError>;
}

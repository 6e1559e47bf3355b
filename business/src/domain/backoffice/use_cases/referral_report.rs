use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::{ReferralReport, ReportRange};

pub struct ReferralReportParams {
    pub token: String,
    pub range: ReportRange,
}

#[async_trait]
pub trait ReferralReportUseCase: Send + Sync {
    async fn execute(&self, params: ReferralReportParams) -> Result<ReferralReport, BackendError>;
}

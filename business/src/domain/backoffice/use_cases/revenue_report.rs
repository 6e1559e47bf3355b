use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::{ReportRange, RevenueReport};

pub struct RevenueReportParams {
    pub token: String,
    pub range: ReportRange,
}

#[async_trait]
pub trait RevenueReportUseCase: Send + Sync {
    async fn execute(&self, params: RevenueReportParams) -> Result<RevenueReport, BackendError>;
}

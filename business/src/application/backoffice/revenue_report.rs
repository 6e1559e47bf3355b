use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::RevenueReport;
use crate::domain::backoffice::services::ReportService;
use crate::domain::backoffice::use_cases::revenue_report::{
    RevenueReportParams, RevenueReportUseCase,
};
use crate::domain::logger::Logger;

pub struct RevenueReportUseCaseImpl {
    pub service: Arc<dyn ReportService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RevenueReportUseCase for RevenueReportUseCaseImpl {
    async fn execute(&self, params: RevenueReportParams) -> Result<RevenueReport, BackendError> {
        self.logger.info(&format!(
            "Fetching revenue report {} to {}",
            params.range.from, params.range.to
        ));

        let report = self.service.revenue(&params.token, params.range).await?;

        self.logger.info(&format!(
            "Revenue report covers {} days",
            report.daily.len()
        ));
        Ok(report)
    }
}

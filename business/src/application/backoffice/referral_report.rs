use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::ReferralReport;
use crate::domain::backoffice::services::ReportService;
use crate::domain::backoffice::use_cases::referral_report::{
    ReferralReportParams, ReferralReportUseCase,
};
use crate::domain::logger::Logger;

pub struct ReferralReportUseCaseImpl {
    pub service: Arc<dyn ReportService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReferralReportUseCase for ReferralReportUseCaseImpl {
    async fn execute(&self, params: ReferralReportParams) -> Result<ReferralReport, BackendError> {
        self.logger.info(&format!(
            "Fetching referral report {} to {}",
            params.range.from, params.range.to
        ));

        let report = self.service.referrals(&params.token, params.range).await?;

        self.logger.info(&format!(
            "Referral report covers {} referrers",
            report.rows.len()
        ));
        Ok(report)
    }
}

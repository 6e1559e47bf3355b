use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::backoffice::errors::BackendError;
use crate::domain::backoffice::model::UserReport;
use crate::domain::backoffice::services::ReportService;
use crate::domain::backoffice::use_cases::user_report::{UserReportParams, UserReportUseCase};
use crate::domain::logger::Logger;

pub struct UserReportUseCaseImpl {
    pub service: Arc<dyn ReportService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UserReportUseCase for UserReportUseCaseImpl {
    async fn execute(&self, params: UserReportParams) -> Result<UserReport, BackendError> {
        self.logger.info(&format!(
            "Fetching user report {} to {}",
            params.range.from, params.range.to
        ));

        let report = self.service.users(&params.token, params.range).await?;

        self.logger
            .info(&format!("User report: {} new users", report.new_users));
        Ok(report)
    }
}

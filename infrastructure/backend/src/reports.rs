use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;

use business::domain::backoffice::errors::BackendError;
use business::domain::backoffice::model::{
    ReferralReport, ReferralRow, ReportRange, RevenueReport, RevenueRow, UserReport, UserRow,
};
use business::domain::backoffice::services::ReportService;

use crate::client::{BackendClient, error_for_status};

pub struct ReportServiceHttp {
    client: BackendClient,
}

impl ReportServiceHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        range: ReportRange,
    ) -> Result<T, BackendError> {
        let response = self
            .client
            .client
            .get(self.client.url(path))
            .bearer_auth(token)
            .query(&[
                ("from", range.from.to_string()),
                ("to", range.to.to_string()),
            ])
            .send()
            .await
            .map_err(|_| BackendError::Network)?;

        if !response.status().is_success() {
            return Err(error_for_status(response.status()));
        }

        response.json().await.map_err(|_| BackendError::InvalidResponse)
    }
}

#[derive(Deserialize)]
struct RevenueRowDto {
    date: NaiveDate,
    revenue: u64,
    orders: u32,
}

#[derive(Deserialize)]
struct RevenueReportDto {
    total_revenue: u64,
    order_count: u32,
    daily: Vec<RevenueRowDto>,
}

#[derive(Deserialize)]
struct UserRowDto {
    date: NaiveDate,
    signups: u32,
}

#[derive(Deserialize)]
struct UserReportDto {
    total_users: u32,
    new_users: u32,
    daily: Vec<UserRowDto>,
}

#[derive(Deserialize)]
struct ReferralRowDto {
    referrer: String,
    signups: u32,
    revenue: u64,
}

#[derive(Deserialize)]
struct ReferralReportDto {
    rows: Vec<ReferralRowDto>,
}

#[async_trait]
impl ReportService for ReportServiceHttp {
    async fn revenue(
        &self,
        token: &str,
        range: ReportRange,
    ) -> Result<RevenueReport, BackendError> {
        let dto: RevenueReportDto = self.fetch("/admin/reports/revenue", token, range).await?;
        Ok(RevenueReport {
            range,
            total_revenue: dto.total_revenue,
            order_count: dto.order_count,
            daily: dto
                .daily
                .into_iter()
                .map(|row| RevenueRow {
                    date: row.date,
                    revenue: row.revenue,
                    orders: row.orders,
                })
                .collect(),
        })
    }

    async fn users(&self, token: &str, range: ReportRange) -> Result<UserReport, BackendError> {
        let dto: UserReportDto = self.fetch("/admin/reports/users", token, range).await?;
        Ok(UserReport {
            range,
            total_users: dto.total_users,
            new_users: dto.new_users,
            daily: dto
                .daily
                .into_iter()
                .map(|row| UserRow {
                    date: row.date,
                    signups: row.signups,
                })
                .collect(),
        })
    }

    async fn referrals(
        &self,
        token: &str,
        range: ReportRange,
    ) -> Result<ReferralReport, BackendError> {
        let dto: ReferralReportDto = self.fetch("/admin/reports/referrals", token, range).await?;
        Ok(ReferralReport {
            range,
            rows: dto
                .rows
                .into_iter()
                .map(|row| ReferralRow {
                    referrer: row.referrer,
                    signups: row.signups,
                    revenue: row.revenue,
                })
                .collect(),
        })
    }
}

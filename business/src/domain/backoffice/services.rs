use async_trait::async_trait;
use uuid::Uuid;

use super::errors::BackendError;
use super::model::{
    AdminSession, Commission, DiscountTier, OrderPayment, ReferralReport, ReportRange,
    RevenueReport, UserReport,
};

/// Service port for admin authentication against the remote backend.
#[async_trait]
pub trait AuthService: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession, BackendError>;
    async fn fetch_session(&self, token: &str) -> Result<AdminSession, BackendError>;
}

/// Service port for the discount tier configuration screens.
///
/// `save` is an upsert keyed on the tier id; tier computation itself is
/// backend-owned.
#[async_trait]
pub trait DiscountTierService: Send + Sync {
    async fn list(&self, token: &str) -> Result<Vec<DiscountTier>, BackendError>;
    async fn save(&self, token: &str, tier: &DiscountTier) -> Result<DiscountTier, BackendError>;
    async fn delete(&self, token: &str, id: Uuid) -> Result<(), BackendError>;
}

/// Service port for the referral commission screens.
#[async_trait]
pub trait CommissionService: Send + Sync {
    async fn list(&self, token: &str) -> Result<Vec<Commission>, BackendError>;
    async fn save(
        &self,
        token: &str,
        commission: &Commission,
    ) -> Result<Commission, BackendError>;
    async fn delete(&self, token: &str, id: Uuid) -> Result<(), BackendError>;
}

/// Service port for payment-status lookup by order code. Public: the
/// checkout result page shows this without an admin session.
#[async_trait]
pub trait PaymentService: Send + Sync {
    async fn status(&self, order_code: &str) -> Result<OrderPayment, BackendError>;
}

/// Service port for the admin report viewers.
#[async_trait]
pub trait ReportService: Send + Sync {
    async fn revenue(
        &self,
        token: &str,
        range: ReportRange,
    ) -> Result<RevenueReport, BackendError>;
    async fn users(&self, token: &str, range: ReportRange) -> Result<UserReport, BackendError>;
    async fn referrals(
        &self,
        token: &str,
        range: ReportRange,
    ) -> Result<ReferralReport, BackendError>;
}

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated admin session returned by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSession {
    pub token: String,
    pub email: String,
    pub name: String,
    pub expires_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// A customer discount tier. All tier computation happens in the backend;
/// this is the shape the admin screens edit.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountTier {
    pub id: Uuid,
    pub name: String,
    pub rate_percent: u32,
    pub min_spend: u64,
}

impl DiscountTier {
    pub fn new(name: impl Into<String>, rate_percent: u32, min_spend: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            rate_percent,
            min_spend,
        }
    }
}

/// A referral partner's commission configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Commission {
    pub id: Uuid,
    pub partner_name: String,
    pub rate_percent: u32,
    pub total_sales: u64,
}

impl Commission {
    pub fn new(partner_name: impl Into<String>, rate_percent: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            partner_name: partner_name.into(),
            rate_percent,
            total_sales: 0,
        }
    }
}

/// Settlement state of an order as reported by the payment backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Paid,
    Pending,
    Failed,
    Cancelled,
}

impl std::fmt::Display for PaymentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentState::Paid => write!(f, "paid"),
            PaymentState::Pending => write!(f, "pending"),
            PaymentState::Failed => write!(f, "failed"),
            PaymentState::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for PaymentState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paid" => Ok(PaymentState::Paid),
            "pending" => Ok(PaymentState::Pending),
            "failed" => Ok(PaymentState::Failed),
            "cancelled" => Ok(PaymentState::Cancelled),
            _ => Err(format!("Invalid payment state: {}", s)),
        }
    }
}

/// Payment record for one order, displayed verbatim by the checkout
/// result page and the admin payment screen.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderPayment {
    pub order_code: String,
    pub state: PaymentState,
    pub amount: u64,
    pub method: String,
    pub payer_name: String,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Inclusive date range for report queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueRow {
    pub date: NaiveDate,
    pub revenue: u64,
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenueReport {
    pub range: ReportRange,
    pub total_revenue: u64,
    pub order_count: u32,
    pub daily: Vec<RevenueRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub date: NaiveDate,
    pub signups: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserReport {
    pub range: ReportRange,
    pub total_users: u32,
    pub new_users: u32,
    pub daily: Vec<UserRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferralRow {
    pub referrer: String,
    pub signups: u32,
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferralReport {
    pub range: ReportRange,
    pub rows: Vec<ReferralRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::str::FromStr;

    #[test]
    fn should_report_session_expiry() {
        let live = AdminSession {
            token: "t".to_string(),
            email: "admin@brand.kr".to_string(),
            name: "Admin".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        };
        let stale = AdminSession {
            expires_at: Utc::now() - Duration::minutes(1),
            ..live.clone()
        };

        assert!(!live.is_expired());
        assert!(stale.is_expired());
    }

    #[test]
    fn should_round_trip_payment_state_through_string() {
        for state in [
            PaymentState::Paid,
            PaymentState::Pending,
            PaymentState::Failed,
            PaymentState::Cancelled,
        ] {
            assert_eq!(PaymentState::from_str(&state.to_string()), Ok(state));
        }
    }

    #[test]
    fn should_reject_unknown_payment_state() {
        assert!(PaymentState::from_str("refunded").is_err());
    }

    #[test]
    fn should_assign_fresh_ids_to_new_tiers() {
        let a = DiscountTier::new("VIP", 10, 500_000);
        let b = DiscountTier::new("VIP", 10, 500_000);

        assert_ne!(a.id, b.id);
    }
}

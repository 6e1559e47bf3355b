use anyhow::Context;
use chrono::NaiveDate;
use clap::Subcommand;
use uuid::Uuid;

use business::domain::backoffice::model::{Commission, DiscountTier, ReportRange};
use business::domain::backoffice::use_cases::delete_commission::DeleteCommissionParams;
use business::domain::backoffice::use_cases::delete_discount_tier::DeleteDiscountTierParams;
use business::domain::backoffice::use_cases::list_commissions::ListCommissionsParams;
use business::domain::backoffice::use_cases::list_discount_tiers::ListDiscountTiersParams;
use business::domain::backoffice::use_cases::payment_status::PaymentStatusParams;
use business::domain::backoffice::use_cases::referral_report::ReferralReportParams;
use business::domain::backoffice::use_cases::revenue_report::RevenueReportParams;
use business::domain::backoffice::use_cases::save_commission::SaveCommissionParams;
use business::domain::backoffice::use_cases::save_discount_tier::SaveDiscountTierParams;
use business::domain::backoffice::use_cases::sign_in::SignInParams;
use business::domain::backoffice::use_cases::user_report::UserReportParams;
use business::domain::backoffice::use_cases::verify_session::VerifySessionParams;

use crate::setup::dependency_injection::DependencyContainer;

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Sign in and print a session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Show the session behind ADMIN_TOKEN
    Whoami,
    /// Discount tier configuration
    #[command(subcommand)]
    Tiers(TierCommand),
    /// Referral commission configuration
    #[command(subcommand)]
    Commissions(CommissionCommand),
    /// Payment status for an order code
    Payment { order_code: String },
    /// Report viewers
    #[command(subcommand)]
    Reports(ReportCommand),
}

#[derive(Debug, Subcommand)]
pub enum TierCommand {
    List,
    Save {
        /// Existing tier id; omit to create a new tier
        #[arg(long)]
        id: Option<Uuid>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        rate_percent: u32,
        #[arg(long)]
        min_spend: u64,
    },
    Delete { id: Uuid },
}

#[derive(Debug, Subcommand)]
pub enum CommissionCommand {
    List,
    Save {
        /// Existing commission id; omit to create a new one
        #[arg(long)]
        id: Option<Uuid>,
        #[arg(long)]
        partner: String,
        #[arg(long)]
        rate_percent: u32,
    },
    Delete { id: Uuid },
}

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    Revenue {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
    Users {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
    Referrals {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
    },
}

fn admin_token() -> anyhow::Result<String> {
    std::env::var("ADMIN_TOKEN").context("ADMIN_TOKEN must be set for admin commands")
}

pub async fn run(command: AdminCommand, container: &DependencyContainer) -> anyhow::Result<()> {
    match command {
        AdminCommand::Login { email, password } => {
            let session = container
                .sign_in
                .execute(SignInParams { email, password })
                .await?;

            println!("Signed in as {} <{}>", session.name, session.email);
            println!("Session expires at {}", session.expires_at);
            println!("export ADMIN_TOKEN={}", session.token);
            Ok(())
        }
        AdminCommand::Whoami => {
            let session = container
                .verify_session
                .execute(VerifySessionParams {
                    token: admin_token()?,
                })
                .await?;

            println!("{} <{}>", session.name, session.email);
            println!("Session expires at {}", session.expires_at);
            Ok(())
        }
        AdminCommand::Tiers(command) => run_tiers(command, container).await,
        AdminCommand::Commissions(command) => run_commissions(command, container).await,
        AdminCommand::Payment { order_code } => {
            let payment = container
                .payment_status
                .execute(PaymentStatusParams { order_code })
                .await?;

            println!("order {}: {}", payment.order_code, payment.state);
            println!("  amount: {} KRW via {}", payment.amount, payment.method);
            println!("  payer:  {}", payment.payer_name);
            if let Some(paid_at) = payment.paid_at {
                println!("  paid at {}", paid_at);
            }
            Ok(())
        }
        AdminCommand::Reports(command) => run_reports(command, container).await,
    }
}

async fn run_tiers(command: TierCommand, container: &DependencyContainer) -> anyhow::Result<()> {
    let token = admin_token()?;
    match command {
        TierCommand::List => {
            let tiers = container
                .list_discount_tiers
                .execute(ListDiscountTiersParams { token })
                .await?;

            for tier in &tiers {
                println!(
                    "{}  {:<16} {:>3}%  from {} KRW",
                    tier.id, tier.name, tier.rate_percent, tier.min_spend
                );
            }
            println!("{} tiers", tiers.len());
            Ok(())
        }
        TierCommand::Save {
            id,
            name,
            rate_percent,
            min_spend,
        } => {
            let tier = match id {
                Some(id) => DiscountTier {
                    id,
                    name,
                    rate_percent,
                    min_spend,
                },
                None => DiscountTier::new(name, rate_percent, min_spend),
            };
            let saved = container
                .save_discount_tier
                .execute(SaveDiscountTierParams { token, tier })
                .await?;

            println!("Saved tier {} ({})", saved.name, saved.id);
            Ok(())
        }
        TierCommand::Delete { id } => {
            container
                .delete_discount_tier
                .execute(DeleteDiscountTierParams { token, id })
                .await?;

            println!("Deleted tier {}", id);
            Ok(())
        }
    }
}

async fn run_commissions(
    command: CommissionCommand,
    container: &DependencyContainer,
) -> anyhow::Result<()> {
    let token = admin_token()?;
    match command {
        CommissionCommand::List => {
            let commissions = container
                .list_commissions
                .execute(ListCommissionsParams { token })
                .await?;

            for commission in &commissions {
                println!(
                    "{}  {:<20} {:>3}%  {} KRW in sales",
                    commission.id,
                    commission.partner_name,
                    commission.rate_percent,
                    commission.total_sales
                );
            }
            println!("{} commissions", commissions.len());
            Ok(())
        }
        CommissionCommand::Save {
            id,
            partner,
            rate_percent,
        } => {
            let commission = match id {
                Some(id) => Commission {
                    id,
                    ..Commission::new(partner, rate_percent)
                },
                None => Commission::new(partner, rate_percent),
            };
            let saved = container
                .save_commission
                .execute(SaveCommissionParams { token, commission })
                .await?;

            println!("Saved commission for {} ({})", saved.partner_name, saved.id);
            Ok(())
        }
        CommissionCommand::Delete { id } => {
            container
                .delete_commission
                .execute(DeleteCommissionParams { token, id })
                .await?;

            println!("Deleted commission {}", id);
            Ok(())
        }
    }
}

async fn run_reports(command: ReportCommand, container: &DependencyContainer) -> anyhow::Result<()> {
    let token = admin_token()?;
    match command {
        ReportCommand::Revenue { from, to } => {
            let report = container
                .revenue_report
                .execute(RevenueReportParams {
                    token,
                    range: ReportRange { from, to },
                })
                .await?;

            for row in &report.daily {
                println!("{}  {:>12} KRW  {:>4} orders", row.date, row.revenue, row.orders);
            }
            println!(
                "total: {} KRW over {} orders",
                report.total_revenue, report.order_count
            );
            Ok(())
        }
        ReportCommand::Users { from, to } => {
            let report = container
                .user_report
                .execute(UserReportParams {
                    token,
                    range: ReportRange { from, to },
                })
                .await?;

            for row in &report.daily {
                println!("{}  {:>5} signups", row.date, row.signups);
            }
            println!(
                "{} new users, {} total",
                report.new_users, report.total_users
            );
            Ok(())
        }
        ReportCommand::Referrals { from, to } => {
            let report = container
                .referral_report
                .execute(ReferralReportParams {
                    token,
                    range: ReportRange { from, to },
                })
                .await?;

            for row in &report.rows {
                println!(
                    "{:<20} {:>5} signups  {:>12} KRW",
                    row.referrer, row.signups, row.revenue
                );
            }
            Ok(())
        }
    }
}

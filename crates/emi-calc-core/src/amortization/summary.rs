use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::params::PERCENT;
use super::schedule::{AmortizationEntry, AmortizationResult};
use crate::types::{Money, Percent};

/// Headline figures shown next to an EMI calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub principal: Money,
    pub tenure_months: u32,
    pub monthly_installment: Money,
    pub final_installment: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    /// Share of total payment that repays principal, in percent (2 dp).
    pub principal_share_pct: Percent,
    /// Share of total payment that is interest; the two shares sum to 100.
    pub interest_share_pct: Percent,
}

/// Year-wise roll-up of a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    /// Calendar year when the schedule is dated, otherwise loan year (1-based).
    pub year: i32,
    pub periods: u32,
    pub opening_balance: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub closing_balance: Money,
}

impl AmortizationResult {
    pub fn summary(&self) -> LoanSummary {
        let principal = self.principal();
        let principal_share_pct = if self.total_payment.is_zero() {
            Decimal::ZERO
        } else {
            (principal / self.total_payment * PERCENT).round_dp(2)
        };

        LoanSummary {
            principal,
            tenure_months: self.schedule.len() as u32,
            monthly_installment: self.monthly_installment,
            final_installment: self.final_installment(),
            total_interest: self.total_interest,
            total_payment: self.total_payment,
            principal_share_pct,
            interest_share_pct: PERCENT - principal_share_pct,
        }
    }
}

fn year_key(entry: &AmortizationEntry) -> i32 {
    match entry.payment_date {
        Some(date) => date.year(),
        None => ((entry.period_index - 1) / 12 + 1) as i32,
    }
}

/// Group consecutive schedule rows by year.
pub fn summarize_by_year(result: &AmortizationResult) -> Vec<YearSummary> {
    let mut years: Vec<YearSummary> = Vec::new();

    for entry in &result.schedule {
        let year = year_key(entry);
        match years.last_mut() {
            Some(current) if current.year == year => {
                current.periods += 1;
                current.principal_paid += entry.principal_component;
                current.interest_paid += entry.interest_component;
                current.closing_balance = entry.closing_balance;
            }
            _ => years.push(YearSummary {
                year,
                periods: 1,
                opening_balance: entry.opening_balance,
                principal_paid: entry.principal_component,
                interest_paid: entry.interest_component,
                closing_balance: entry.closing_balance,
            }),
        }
    }

    years
}

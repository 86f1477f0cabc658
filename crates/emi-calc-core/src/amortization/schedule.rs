use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EmiError;
use crate::types::Money;
use crate::EmiResult;

/// One row of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// 1-based installment number.
    pub period_index: u32,
    pub opening_balance: Money,
    /// Amount actually due this period: interest plus principal.
    pub installment: Money,
    pub interest_component: Money,
    pub principal_component: Money,
    pub closing_balance: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

/// Installment, full schedule and totals for one loan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Nominal EMI. Every period pays this except possibly the last.
    pub monthly_installment: Money,
    pub schedule: Vec<AmortizationEntry>,
    /// Sum of the rounded per-period interest components.
    pub total_interest: Money,
    pub total_payment: Money,
}

impl AmortizationResult {
    /// Principal the schedule amortizes.
    pub fn principal(&self) -> Money {
        self.total_payment - self.total_interest
    }

    /// Installment due in the last period, after it absorbs rounding residue.
    pub fn final_installment(&self) -> Money {
        self.schedule
            .last()
            .map(|entry| entry.installment)
            .unwrap_or(Decimal::ZERO)
    }

    /// Periods that carry no payment because coarse rounding retired the
    /// balance before the final installment.
    pub fn idle_periods(&self) -> usize {
        self.schedule
            .iter()
            .filter(|entry| entry.opening_balance.is_zero())
            .count()
    }

    /// Stamp a due date on every entry. Installment `i` falls `i` months after
    /// disbursal; short months clamp to their last day.
    pub fn with_payment_dates(mut self, disbursal_date: NaiveDate) -> EmiResult<Self> {
        for entry in &mut self.schedule {
            let due = disbursal_date
                .checked_add_months(Months::new(entry.period_index))
                .ok_or_else(|| {
                    EmiError::invalid(
                        "start_date",
                        disbursal_date,
                        "Payment calendar runs past the supported date range",
                    )
                })?;
            entry.payment_date = Some(due);
        }
        Ok(self)
    }
}

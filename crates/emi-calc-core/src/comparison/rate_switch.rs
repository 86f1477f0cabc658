//! Savings from moving an outstanding loan to a lower rate (balance transfer).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use crate::amortization::{AmortizationCalculator, LoanParameters, LoanSummary};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, RoundingPolicy};
use crate::EmiResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateComparisonInput {
    /// Outstanding principal to be moved.
    pub principal: Money,
    /// Remaining tenure in months.
    pub tenure_months: u32,
    pub current_rate_percent: Percent,
    pub offered_rate_percent: Percent,
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateComparison {
    pub current: LoanSummary,
    pub offered: LoanSummary,
    /// Current EMI minus offered EMI. Negative when the offer costs more.
    pub monthly_installment_savings: Money,
    /// Current total interest minus offered total interest.
    pub total_interest_savings: Money,
    /// Interest saved as a percentage of the current total interest (2 dp).
    pub savings_pct: Percent,
}

pub fn compare_rates(input: &RateComparisonInput) -> EmiResult<ComputationOutput<RateComparison>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let current_params = LoanParameters::new(
        input.principal,
        input.current_rate_percent,
        input.tenure_months,
    )?;
    let offered_params = LoanParameters::new(
        input.principal,
        input.offered_rate_percent,
        input.tenure_months,
    )?;

    if input.offered_rate_percent >= input.current_rate_percent {
        warnings.push(format!(
            "Offered rate {}% is not lower than current rate {}%; switching does not save interest",
            input.offered_rate_percent, input.current_rate_percent
        ));
    }

    let calculator = AmortizationCalculator::new(input.rounding)?;
    let current = calculator.build_schedule(&current_params)?.summary();
    let offered = calculator.build_schedule(&offered_params)?.summary();

    let monthly_installment_savings = current.monthly_installment - offered.monthly_installment;
    let total_interest_savings = current.total_interest - offered.total_interest;
    let savings_pct = if current.total_interest.is_zero() {
        Decimal::ZERO
    } else {
        (total_interest_savings / current.total_interest * dec!(100)).round_dp(2)
    };

    debug!(
        monthly_installment_savings = %monthly_installment_savings,
        total_interest_savings = %total_interest_savings,
        "compared rates"
    );

    let output = RateComparison {
        current,
        offered,
        monthly_installment_savings,
        total_interest_savings,
        savings_pct,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Rate switch comparison (same principal and tenure, level payment)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "tenure_months": input.tenure_months,
            "current_rate_percent": input.current_rate_percent.to_string(),
            "offered_rate_percent": input.offered_rate_percent.to_string(),
        }),
        warnings,
        elapsed,
        &input.rounding,
        output,
    ))
}

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::calculator::AmortizationCalculator;
use super::params::LoanParameters;
use super::schedule::{AmortizationEntry, AmortizationResult};
use super::summary::{summarize_by_year, LoanSummary, YearSummary};
use crate::types::{with_metadata, ComputationOutput, RoundingPolicy};
use crate::EmiResult;

/// Caller payload for the EMI and schedule entry points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationInput {
    #[serde(flatten)]
    pub loan: LoanParameters,
    #[serde(default)]
    pub rounding: RoundingPolicy,
    /// Disbursal date; installments fall due monthly after it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl From<LoanParameters> for AmortizationInput {
    fn from(loan: LoanParameters) -> Self {
        Self {
            loan,
            rounding: RoundingPolicy::default(),
            start_date: None,
        }
    }
}

/// Schedule plus the views a calculator page renders from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationReport {
    pub summary: LoanSummary,
    pub schedule: Vec<AmortizationEntry>,
    pub yearly: Vec<YearSummary>,
}

const METHODOLOGY: &str = "Level-payment EMI (reducing balance, monthly compounding)";

fn schedule_warnings(input: &AmortizationInput, result: &AmortizationResult) -> Vec<String> {
    let mut warnings = Vec::new();
    if input.loan.annual_rate_percent > dec!(100) {
        warnings.push(format!(
            "Annual rate {}% is outside the 0-100% range quoted by lenders",
            input.loan.annual_rate_percent
        ));
    }
    let idle = result.idle_periods();
    if idle > 0 {
        warnings.push(format!(
            "Rounded installment retires the loan early; the last {idle} period(s) carry no payment"
        ));
    }
    warnings
}

fn assumptions(input: &AmortizationInput) -> serde_json::Value {
    serde_json::json!({
        "principal": input.loan.principal.to_string(),
        "annual_rate_percent": input.loan.annual_rate_percent.to_string(),
        "tenure_months": input.loan.tenure_months,
        "rounding": input.rounding.describe(),
        "final_period_absorbs_residue": true,
    })
}

fn run(input: &AmortizationInput) -> EmiResult<(AmortizationResult, Vec<String>)> {
    let calculator = AmortizationCalculator::new(input.rounding)?;
    let mut result = calculator.build_schedule(&input.loan)?;
    if let Some(start) = input.start_date {
        result = result.with_payment_dates(start)?;
    }
    let warnings = schedule_warnings(input, &result);
    Ok((result, warnings))
}

/// EMI and totals without the schedule rows.
pub fn calculate_emi(input: &AmortizationInput) -> EmiResult<ComputationOutput<LoanSummary>> {
    let start = Instant::now();
    let (result, warnings) = run(input)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        METHODOLOGY,
        &assumptions(input),
        warnings,
        elapsed,
        &input.rounding,
        result.summary(),
    ))
}

/// Summary, full schedule and year-wise table.
pub fn amortize(input: &AmortizationInput) -> EmiResult<ComputationOutput<AmortizationReport>> {
    let start = Instant::now();
    let (result, warnings) = run(input)?;

    let report = AmortizationReport {
        summary: result.summary(),
        yearly: summarize_by_year(&result),
        schedule: result.schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        METHODOLOGY,
        &assumptions(input),
        warnings,
        elapsed,
        &input.rounding,
        report,
    ))
}

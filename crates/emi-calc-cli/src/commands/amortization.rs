use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use emi_calc_core::amortization::{self, AmortizationInput, LoanParameters};

use super::args::{tenure_months, RoundingArgs};
use crate::input;

/// Loan terms shared by `emi` and `schedule`
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long, allow_hyphen_values = true)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 8.5)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<Decimal>,

    /// Tenure in months
    #[arg(long, conflicts_with = "tenure_years")]
    pub tenure_months: Option<u32>,

    /// Tenure in whole years
    #[arg(long)]
    pub tenure_years: Option<u32>,

    #[command(flatten)]
    pub rounding: RoundingArgs,
}

fn loan_input(args: &LoanArgs) -> Result<AmortizationInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_input(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let principal = args
        .principal
        .ok_or("--principal is required (or provide --input)")?;
    let rate = args.rate.ok_or("--rate is required (or provide --input)")?;
    let tenure = tenure_months(args.tenure_months, args.tenure_years)?
        .ok_or("--tenure-months or --tenure-years is required (or provide --input)")?;

    Ok(AmortizationInput {
        loan: LoanParameters {
            principal,
            annual_rate_percent: rate,
            tenure_months: tenure,
        },
        rounding: args.rounding.policy(),
        start_date: None,
    })
}

pub fn run_emi(args: LoanArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let emi_input = loan_input(&args)?;
    let result = amortization::calculate_emi(&emi_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for a full amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Disbursal date (YYYY-MM-DD); installments fall due monthly after it
    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    /// Print the year-wise table only
    #[arg(long)]
    pub yearly: bool,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let mut schedule_input = loan_input(&args.loan)?;
    if args.start_date.is_some() {
        schedule_input.start_date = args.start_date;
    }

    let result = amortization::amortize(&schedule_input)?;
    let mut value = serde_json::to_value(result)?;
    if args.yearly {
        if let Some(Value::Object(report)) = value.get_mut("result") {
            report.remove("schedule");
        }
    }
    Ok(value)
}

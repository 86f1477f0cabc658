use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use emi_calc_core::comparison::{self, RateComparisonInput};

use super::args::{tenure_months, RoundingArgs};
use crate::input;

/// Arguments for a balance-transfer rate comparison
#[derive(Args)]
pub struct CompareArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Outstanding principal
    #[arg(long, allow_hyphen_values = true)]
    pub principal: Option<Decimal>,

    /// Remaining tenure in months
    #[arg(long, conflicts_with = "tenure_years")]
    pub tenure_months: Option<u32>,

    /// Remaining tenure in whole years
    #[arg(long)]
    pub tenure_years: Option<u32>,

    /// Rate on the existing loan, in percent
    #[arg(long, allow_hyphen_values = true)]
    pub current_rate: Option<Decimal>,

    /// Rate offered by the new lender, in percent
    #[arg(long, allow_hyphen_values = true)]
    pub offered_rate: Option<Decimal>,

    #[command(flatten)]
    pub rounding: RoundingArgs,
}

pub fn run_compare(args: CompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let compare_input: RateComparisonInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RateComparisonInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            tenure_months: tenure_months(args.tenure_months, args.tenure_years)?
                .ok_or("--tenure-months or --tenure-years is required (or provide --input)")?,
            current_rate_percent: args
                .current_rate
                .ok_or("--current-rate is required (or provide --input)")?,
            offered_rate_percent: args
                .offered_rate
                .ok_or("--offered-rate is required (or provide --input)")?,
            rounding: args.rounding.policy(),
        }
    };

    let result = comparison::compare_rates(&compare_input)?;
    Ok(serde_json::to_value(result)?)
}

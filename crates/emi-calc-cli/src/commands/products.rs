use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use emi_calc_core::products::{self, LoanProduct, ProductQuoteInput};

use super::args::{tenure_months, RoundingArgs};
use crate::input;

/// Arguments for a catalogue product quote
#[derive(Args)]
pub struct ProductArgs {
    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Product, e.g. home-loan, gold-loan, loan-against-property
    #[arg(long)]
    pub product: Option<LoanProduct>,

    /// Loan amount (defaults to the product's slider default)
    #[arg(long, allow_hyphen_values = true)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (defaults to the product's rate)
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

pub fn run_product(args: ProductArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let quote_input: ProductQuoteInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let product = args
            .product
            .ok_or("--product is required (or provide --input)")?;

        ProductQuoteInput {
            product,
            principal: args.principal,
            annual_rate_percent: args.rate,
            tenure_months: tenure_months(args.tenure_months, args.tenure_years)?,
            rounding: args.rounding.policy(),
        }
    };

    let result = products::quote_product(&quote_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_list_products() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(products::list_products())?)
}

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::warn;

use super::catalog::{LoanProduct, ProductLimits};
use crate::amortization::{summarize_by_year, AmortizationCalculator, LoanParameters, LoanSummary, YearSummary};
use crate::types::{with_metadata, ComputationOutput, Money, Percent, RoundingPolicy};
use crate::EmiResult;

/// Calculator request for a catalogue product. Missing terms fall back to
/// the product's slider defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductQuoteInput {
    pub product: LoanProduct,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_rate_percent: Option<Percent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenure_months: Option<u32>,
    #[serde(default)]
    pub rounding: RoundingPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductQuote {
    pub product: LoanProduct,
    pub display_name: String,
    pub parameters: LoanParameters,
    pub summary: LoanSummary,
    pub yearly: Vec<YearSummary>,
    /// False when any term falls outside the product's advertised range.
    pub within_limits: bool,
}

/// Out-of-range terms are reported, not rejected: the calculator accepts any
/// valid loan, the catalogue only describes what lenders advertise.
pub fn limit_warnings(product: LoanProduct, params: &LoanParameters) -> Vec<String> {
    let ProductLimits {
        min_principal,
        max_principal,
        min_rate_percent,
        max_rate_percent,
        min_tenure_months,
        max_tenure_months,
        ..
    } = product.limits();
    let name = product.display_name();
    let mut warnings = Vec::new();

    if params.principal < min_principal || params.principal > max_principal {
        warnings.push(format!(
            "{name} amount {} is outside the offered range {min_principal}-{max_principal}",
            params.principal
        ));
    }
    if params.annual_rate_percent < min_rate_percent || params.annual_rate_percent > max_rate_percent {
        warnings.push(format!(
            "{name} rate {}% is outside the offered range {min_rate_percent}%-{max_rate_percent}%",
            params.annual_rate_percent
        ));
    }
    if params.tenure_months < min_tenure_months || params.tenure_months > max_tenure_months {
        warnings.push(format!(
            "{name} tenure {} months is outside the offered range {min_tenure_months}-{max_tenure_months} months",
            params.tenure_months
        ));
    }

    warnings
}

pub fn quote_product(input: &ProductQuoteInput) -> EmiResult<ComputationOutput<ProductQuote>> {
    let start = Instant::now();
    let limits = input.product.limits();

    let params = LoanParameters::new(
        input.principal.unwrap_or(limits.default_principal),
        input.annual_rate_percent.unwrap_or(limits.default_rate_percent),
        input.tenure_months.unwrap_or(limits.default_tenure_months),
    )?;

    let warnings = limit_warnings(input.product, &params);
    if !warnings.is_empty() {
        warn!(product = %input.product, count = warnings.len(), "quote outside product limits");
    }

    let calculator = AmortizationCalculator::new(input.rounding)?;
    let result = calculator.build_schedule(&params)?;

    let quote = ProductQuote {
        product: input.product,
        display_name: input.product.display_name().to_string(),
        summary: result.summary(),
        yearly: summarize_by_year(&result),
        within_limits: warnings.is_empty(),
        parameters: params.clone(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Product EMI quote (level payment, product slider limits)",
        &serde_json::json!({
            "product": input.product.slug(),
            "principal": params.principal.to_string(),
            "annual_rate_percent": params.annual_rate_percent.to_string(),
            "tenure_months": params.tenure_months,
            "defaults_applied": input.principal.is_none()
                || input.annual_rate_percent.is_none()
                || input.tenure_months.is_none(),
        }),
        warnings,
        elapsed,
        &input.rounding,
        quote,
    ))
}

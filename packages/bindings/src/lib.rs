use napi::Result as NapiResult;
use napi_derive::napi;
use serde::de::DeserializeOwned;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse<T: DeserializeOwned>(input_json: &str) -> NapiResult<T> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

/// Rounded EMI alone, for slider callbacks that re-run on every change.
#[napi]
pub fn compute_monthly_installment(input_json: String) -> NapiResult<String> {
    let params: emi_calc_core::LoanParameters = parse(&input_json)?;
    let emi = emi_calc_core::compute_monthly_installment(&params).map_err(to_napi_error)?;
    Ok(emi.to_string())
}

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let input: emi_calc_core::amortization::AmortizationInput = parse(&input_json)?;
    let output =
        emi_calc_core::amortization::calculate_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_schedule(input_json: String) -> NapiResult<String> {
    let input: emi_calc_core::amortization::AmortizationInput = parse(&input_json)?;
    let output = emi_calc_core::amortization::amortize(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[napi]
pub fn quote_product(input_json: String) -> NapiResult<String> {
    let input: emi_calc_core::products::ProductQuoteInput = parse(&input_json)?;
    let output = emi_calc_core::products::quote_product(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn list_products() -> NapiResult<String> {
    serde_json::to_string(&emi_calc_core::products::list_products()).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

#[napi]
pub fn compare_rates(input_json: String) -> NapiResult<String> {
    let input: emi_calc_core::comparison::RateComparisonInput = parse(&input_json)?;
    let output = emi_calc_core::comparison::compare_rates(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

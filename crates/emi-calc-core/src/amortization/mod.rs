//! Level-payment loan amortization.
//!
//! Every money figure is a `rust_decimal::Decimal` rounded under one
//! [`RoundingPolicy`](crate::types::RoundingPolicy) per calculation, and the
//! final period repays the exact remaining balance.

pub mod calculator;
pub mod params;
pub mod report;
pub mod schedule;
pub mod summary;

pub use calculator::{build_schedule, compute_monthly_installment, AmortizationCalculator};
pub use params::LoanParameters;
pub use report::{amortize, calculate_emi, AmortizationInput, AmortizationReport};
pub use schedule::{AmortizationEntry, AmortizationResult};
pub use summary::{summarize_by_year, LoanSummary, YearSummary};

pub mod amortization;
pub mod error;
pub mod types;

#[cfg(feature = "products")]
pub mod products;

#[cfg(feature = "comparison")]
pub mod comparison;

pub use amortization::{
    build_schedule, compute_monthly_installment, AmortizationCalculator, AmortizationEntry,
    AmortizationResult, LoanParameters,
};
pub use error::EmiError;
pub use types::*;

/// Standard result type for all EMI operations
pub type EmiResult<T> = Result<T, EmiError>;

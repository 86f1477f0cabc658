pub mod rate_switch;

pub use rate_switch::{compare_rates, RateComparison, RateComparisonInput};

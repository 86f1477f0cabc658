use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::EmiError;
use crate::EmiResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%).
pub type Rate = Decimal;

/// Rates expressed as percentages (8.5 = 8.5%), the way borrowers quote them.
pub type Percent = Decimal;

/// Largest minor-unit precision a rounding policy may ask for.
pub const MAX_DECIMAL_PLACES: u32 = 8;

/// How midpoints are resolved when a value is rounded to the minor unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// 0.005 -> 0.01
    #[default]
    HalfUp,
    /// 0.005 -> 0.00, 0.015 -> 0.02
    HalfEven,
}

/// Rounding applied to every installment, interest component and total.
///
/// The policy is fixed for the whole of a calculation so that two runs over
/// the same input agree on every field, and so the final period's residue is
/// well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundingPolicy {
    #[serde(default)]
    pub mode: RoundingMode,
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_decimal_places() -> u32 {
    2
}

impl Default for RoundingPolicy {
    fn default() -> Self {
        Self {
            mode: RoundingMode::HalfUp,
            decimal_places: default_decimal_places(),
        }
    }
}

impl RoundingPolicy {
    pub fn new(mode: RoundingMode, decimal_places: u32) -> EmiResult<Self> {
        let policy = Self {
            mode,
            decimal_places,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> EmiResult<()> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(EmiError::invalid(
                "rounding.decimal_places",
                self.decimal_places,
                format!("Must be at most {MAX_DECIMAL_PLACES}"),
            ));
        }
        Ok(())
    }

    pub fn round(&self, value: Decimal) -> Decimal {
        let strategy = match self.mode {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        };
        let mut rounded = value.round_dp_with_strategy(self.decimal_places, strategy);
        // 101000 -> 101000.00 so every figure renders at the minor unit
        rounded.rescale(self.decimal_places);
        rounded
    }

    pub fn describe(&self) -> String {
        let mode = match self.mode {
            RoundingMode::HalfUp => "half-up",
            RoundingMode::HalfEven => "half-even",
        };
        format!("{mode}, {} dp", self.decimal_places)
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    rounding: &RoundingPolicy,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: format!("rust_decimal_128bit, {}", rounding.describe()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_half_up_rounds_midpoint_away() {
        let policy = RoundingPolicy::default();
        assert_eq!(policy.round(dec!(0.125)), dec!(0.13));
        assert_eq!(policy.round(dec!(4166.666666)), dec!(4166.67));
    }

    #[test]
    fn test_half_even_rounds_midpoint_to_even() {
        let policy = RoundingPolicy::new(RoundingMode::HalfEven, 2).unwrap();
        assert_eq!(policy.round(dec!(0.125)), dec!(0.12));
        assert_eq!(policy.round(dec!(0.135)), dec!(0.14));
    }

    #[test]
    fn test_zero_decimal_places() {
        let policy = RoundingPolicy::new(RoundingMode::HalfUp, 0).unwrap();
        assert_eq!(policy.round(dec!(65086.74)), dec!(65087));
    }

    #[test]
    fn test_excessive_precision_rejected() {
        let err = RoundingPolicy::new(RoundingMode::HalfUp, 12).unwrap_err();
        assert_eq!(err.field(), Some("rounding.decimal_places"));
    }

    #[test]
    fn test_policy_deserializes_with_defaults() {
        let policy: RoundingPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, RoundingPolicy::default());
        let policy: RoundingPolicy = serde_json::from_str(r#"{"mode":"half_even"}"#).unwrap();
        assert_eq!(policy.mode, RoundingMode::HalfEven);
        assert_eq!(policy.decimal_places, 2);
    }
}

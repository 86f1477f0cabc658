use clap::{Args, ValueEnum};
use emi_calc_core::{RoundingMode, RoundingPolicy};

/// Midpoint rule for rounding money to the minor unit
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RoundingArg {
    HalfUp,
    HalfEven,
}

/// Rounding flags shared by every calculation
#[derive(Args)]
pub struct RoundingArgs {
    /// Midpoint rounding applied to every money figure
    #[arg(long, value_enum, default_value = "half-up")]
    pub rounding: RoundingArg,

    /// Decimal places of the currency's minor unit
    #[arg(long, default_value_t = 2)]
    pub decimal_places: u32,
}

impl RoundingArgs {
    pub fn policy(&self) -> RoundingPolicy {
        let mode = match self.rounding {
            RoundingArg::HalfUp => RoundingMode::HalfUp,
            RoundingArg::HalfEven => RoundingMode::HalfEven,
        };
        // Validated by the calculator, so out-of-range precision surfaces as a parameter error
        RoundingPolicy {
            mode,
            decimal_places: self.decimal_places,
        }
    }
}

/// Resolve `--tenure-months` / `--tenure-years` into months.
pub fn tenure_months(
    months: Option<u32>,
    years: Option<u32>,
) -> Result<Option<u32>, Box<dyn std::error::Error>> {
    match (months, years) {
        (Some(m), _) => Ok(Some(m)),
        (None, Some(y)) => Ok(Some(
            y.checked_mul(12).ok_or("--tenure-years is too large")?,
        )),
        (None, None) => Ok(None),
    }
}

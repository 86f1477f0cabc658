use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EmiError;
use crate::types::{Money, Percent, Rate};
use crate::EmiResult;

pub(crate) const MONTHS_PER_YEAR: Decimal = dec!(12);
pub(crate) const PERCENT: Decimal = dec!(100);

/// Upper bounds that keep every intermediate value inside the 96-bit decimal range.
pub const MAX_PRINCIPAL: Money = dec!(1000000000000000);
pub const MAX_ANNUAL_RATE_PERCENT: Percent = dec!(1000);
pub const MAX_TENURE_MONTHS: u32 = 1200;

/// Terms of a level-payment loan.
///
/// Fields are public so the struct can be deserialised from caller payloads;
/// every calculator entry point re-validates before doing any work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount disbursed. Must be positive.
    pub principal: Money,
    /// Nominal annual rate as a percentage (8.5 = 8.5% a year). Zero is an interest-free loan.
    pub annual_rate_percent: Percent,
    /// Number of monthly installments. At least one.
    pub tenure_months: u32,
}

impl LoanParameters {
    pub fn new(principal: Money, annual_rate_percent: Percent, tenure_months: u32) -> EmiResult<Self> {
        let params = Self {
            principal,
            annual_rate_percent,
            tenure_months,
        };
        params.validate()?;
        Ok(params)
    }

    /// Tenure given in whole years, as on the calculator sliders.
    pub fn from_years(principal: Money, annual_rate_percent: Percent, years: u32) -> EmiResult<Self> {
        let tenure_months = years.checked_mul(12).ok_or_else(|| {
            EmiError::invalid("tenure_years", years, "Tenure is too long")
        })?;
        Self::new(principal, annual_rate_percent, tenure_months)
    }

    pub fn validate(&self) -> EmiResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(EmiError::invalid(
                "principal",
                self.principal,
                "Principal must be positive",
            ));
        }
        if self.principal > MAX_PRINCIPAL {
            return Err(EmiError::invalid(
                "principal",
                self.principal,
                format!("Principal must not exceed {MAX_PRINCIPAL}"),
            ));
        }
        if self.annual_rate_percent < Decimal::ZERO {
            return Err(EmiError::invalid(
                "annual_rate_percent",
                self.annual_rate_percent,
                "Interest rate cannot be negative",
            ));
        }
        if self.annual_rate_percent > MAX_ANNUAL_RATE_PERCENT {
            return Err(EmiError::invalid(
                "annual_rate_percent",
                self.annual_rate_percent,
                format!("Interest rate must not exceed {MAX_ANNUAL_RATE_PERCENT}%"),
            ));
        }
        if self.tenure_months == 0 {
            return Err(EmiError::invalid(
                "tenure_months",
                self.tenure_months,
                "Tenure must be at least 1 month",
            ));
        }
        if self.tenure_months > MAX_TENURE_MONTHS {
            return Err(EmiError::invalid(
                "tenure_months",
                self.tenure_months,
                format!("Tenure must not exceed {MAX_TENURE_MONTHS} months"),
            ));
        }
        Ok(())
    }

    /// Periodic rate as a decimal: annual percent / 12 / 100.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_percent / MONTHS_PER_YEAR / PERCENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        let params = LoanParameters::new(dec!(100000), dec!(12), 12).unwrap();
        assert_eq!(params.monthly_rate(), dec!(0.01));
    }

    #[test]
    fn test_from_years() {
        let params = LoanParameters::from_years(dec!(7500000), dec!(8.5), 20).unwrap();
        assert_eq!(params.tenure_months, 240);
    }

    #[test]
    fn test_zero_rate_is_valid() {
        assert!(LoanParameters::new(dec!(1000), Decimal::ZERO, 3).is_ok());
    }

    #[test]
    fn test_rejections_name_the_field() {
        let cases = [
            (dec!(0), dec!(10), 12, "principal"),
            (dec!(-100), dec!(10), 12, "principal"),
            (dec!(1000), dec!(-5), 12, "annual_rate_percent"),
            (dec!(1000), dec!(10), 0, "tenure_months"),
            (dec!(1000), dec!(10), 5000, "tenure_months"),
        ];
        for (principal, rate, tenure, field) in cases {
            let err = LoanParameters::new(principal, rate, tenure).unwrap_err();
            assert_eq!(err.field(), Some(field), "case {principal}/{rate}/{tenure}");
        }
    }

    #[test]
    fn test_error_carries_value() {
        let err = LoanParameters::new(dec!(-100), dec!(10), 12).unwrap_err();
        match err {
            EmiError::InvalidParameter { value, .. } => assert_eq!(value, "-100"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use tracing::debug;

use super::params::LoanParameters;
use super::schedule::{AmortizationEntry, AmortizationResult};
use crate::types::{Money, RoundingPolicy};
use crate::EmiResult;

/// Level-payment (EMI) calculator under a fixed rounding policy.
///
/// Stateless apart from the policy; one instance can serve any number of
/// concurrent callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmortizationCalculator {
    rounding: RoundingPolicy,
}

impl AmortizationCalculator {
    pub fn new(rounding: RoundingPolicy) -> EmiResult<Self> {
        rounding.validate()?;
        Ok(Self { rounding })
    }

    pub fn rounding(&self) -> &RoundingPolicy {
        &self.rounding
    }

    /// EMI = P·r·(1+r)^n / ((1+r)^n − 1), or P/n when the loan is interest-free,
    /// rounded to the minor unit.
    pub fn compute_monthly_installment(&self, params: &LoanParameters) -> EmiResult<Money> {
        params.validate()?;
        Ok(self.rounding.round(level_payment(params)))
    }

    /// Full schedule. The last period repays whatever balance remains, so the
    /// loan always closes at exactly zero.
    pub fn build_schedule(&self, params: &LoanParameters) -> EmiResult<AmortizationResult> {
        let installment = self.compute_monthly_installment(params)?;
        let rate = params.monthly_rate();
        let tenure = params.tenure_months;

        let mut schedule = Vec::with_capacity(tenure as usize);
        let mut balance = params.principal;
        let mut total_interest = Decimal::ZERO;

        for period in 1..=tenure {
            let opening = balance;
            let interest = self.rounding.round(opening * rate);

            let principal_paid = if period == tenure {
                opening
            } else {
                // A coarse rounded EMI can retire the balance early
                (installment - interest).min(opening)
            };

            balance = opening - principal_paid;
            total_interest += interest;

            schedule.push(AmortizationEntry {
                period_index: period,
                opening_balance: opening,
                installment: interest + principal_paid,
                interest_component: interest,
                principal_component: principal_paid,
                closing_balance: balance,
                payment_date: None,
            });
        }

        debug!(
            principal = %params.principal,
            annual_rate_percent = %params.annual_rate_percent,
            tenure_months = tenure,
            monthly_installment = %installment,
            total_interest = %total_interest,
            "built amortization schedule"
        );

        Ok(AmortizationResult {
            monthly_installment: installment,
            schedule,
            total_interest,
            total_payment: total_interest + params.principal,
        })
    }
}

/// EMI under the default policy (round half-up to 2 dp).
pub fn compute_monthly_installment(params: &LoanParameters) -> EmiResult<Money> {
    AmortizationCalculator::default().compute_monthly_installment(params)
}

/// Schedule under the default policy (round half-up to 2 dp).
pub fn build_schedule(params: &LoanParameters) -> EmiResult<AmortizationResult> {
    AmortizationCalculator::default().build_schedule(params)
}

/// Unrounded level payment for already validated parameters.
fn level_payment(params: &LoanParameters) -> Money {
    let rate = params.monthly_rate();
    let periods = Decimal::from(params.tenure_months);

    if rate.is_zero() {
        return params.principal / periods;
    }

    match (Decimal::ONE + rate).checked_powu(u64::from(params.tenure_months)) {
        Some(growth) => {
            let accrued = growth - Decimal::ONE;
            if accrued.is_zero() {
                // Rate below decimal resolution over this tenure
                return params.principal / periods;
            }
            params.principal * rate * (growth / accrued)
        }
        // (1+r)^n beyond the decimal range: the discount term vanishes
        None => params.principal * rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RoundingMode;
    use rust_decimal_macros::dec;

    fn params(principal: Decimal, rate: Decimal, tenure: u32) -> LoanParameters {
        LoanParameters::new(principal, rate, tenure).unwrap()
    }

    #[test]
    fn test_emi_twelve_percent_one_year() {
        // 100,000 at 1% a month over 12 months
        let emi = compute_monthly_installment(&params(dec!(100000), dec!(12), 12)).unwrap();
        assert_eq!(emi, dec!(8884.88));
    }

    #[test]
    fn test_emi_home_loan() {
        let emi = compute_monthly_installment(&params(dec!(7500000), dec!(8.5), 240)).unwrap();
        assert_eq!(emi, dec!(65086.74));
    }

    #[test]
    fn test_emi_zero_rate() {
        let emi = compute_monthly_installment(&params(dec!(120000), dec!(0), 12)).unwrap();
        assert_eq!(emi, dec!(10000));
    }

    #[test]
    fn test_emi_single_period_is_principal_plus_one_month_interest() {
        let emi = compute_monthly_installment(&params(dec!(100000), dec!(12), 1)).unwrap();
        assert_eq!(emi, dec!(101000));
    }

    #[test]
    fn test_emi_rejects_invalid_params_without_clamping() {
        let bad = LoanParameters {
            principal: dec!(-100),
            annual_rate_percent: dec!(10),
            tenure_months: 12,
        };
        assert!(compute_monthly_installment(&bad).is_err());
        assert!(build_schedule(&bad).is_err());
    }

    #[test]
    fn test_emi_at_rate_ceiling_does_not_overflow() {
        let emi = compute_monthly_installment(&params(dec!(1000000000000000), dec!(1000), 1200)).unwrap();
        assert!(emi > Decimal::ZERO);
    }

    #[test]
    fn test_schedule_last_period_absorbs_residue() {
        let result = build_schedule(&params(dec!(1000), dec!(0), 3)).unwrap();
        assert_eq!(result.monthly_installment, dec!(333.33));
        let last = &result.schedule[2];
        assert_eq!(last.principal_component, dec!(333.34));
        assert_eq!(last.installment, dec!(333.34));
        assert_eq!(last.closing_balance, Decimal::ZERO);
        assert_eq!(result.total_interest, Decimal::ZERO);
    }

    #[test]
    fn test_schedule_first_row() {
        let result = build_schedule(&params(dec!(100000), dec!(12), 12)).unwrap();
        let first = &result.schedule[0];
        assert_eq!(first.period_index, 1);
        assert_eq!(first.opening_balance, dec!(100000));
        assert_eq!(first.interest_component, dec!(1000));
        assert_eq!(first.principal_component, dec!(7884.88));
        assert_eq!(first.closing_balance, dec!(92115.12));
        assert_eq!(result.total_interest, dec!(6618.53));
        assert_eq!(result.total_payment, dec!(106618.53));
    }

    #[test]
    fn test_schedule_sums_interest_components() {
        let result = build_schedule(&params(dec!(1000), dec!(12), 3)).unwrap();
        assert_eq!(result.monthly_installment, dec!(340.02));
        let summed: Decimal = result.schedule.iter().map(|e| e.interest_component).sum();
        assert_eq!(result.total_interest, summed);
        assert_eq!(result.total_interest, dec!(20.07));
        // EMI * n - P would give 20.06
        assert_ne!(result.total_interest, result.monthly_installment * dec!(3) - dec!(1000));
    }

    #[test]
    fn test_coarse_rounding_never_overpays() {
        // 0.05 over 10 months rounds the EMI up to 0.01, retiring the loan after 5 periods
        let result = build_schedule(&params(dec!(0.05), dec!(0), 10)).unwrap();
        assert_eq!(result.monthly_installment, dec!(0.01));
        assert!(result.schedule.iter().all(|e| e.closing_balance >= Decimal::ZERO));
        assert_eq!(result.schedule[4].closing_balance, Decimal::ZERO);
        assert_eq!(result.idle_periods(), 5);
        assert_eq!(result.final_installment(), Decimal::ZERO);
    }

    #[test]
    fn test_half_even_policy_applies_everywhere() {
        let calc = AmortizationCalculator::new(
            RoundingPolicy::new(RoundingMode::HalfEven, 0).unwrap(),
        )
        .unwrap();
        let result = calc.build_schedule(&params(dec!(1000), dec!(0), 8)).unwrap();
        // 1000 / 8 = 125 exactly; no midpoint involved
        assert_eq!(result.monthly_installment, dec!(125));
        let result = calc.build_schedule(&params(dec!(5), dec!(0), 2)).unwrap();
        // 2.5 rounds to even
        assert_eq!(result.monthly_installment, dec!(2));
        assert_eq!(result.final_installment(), dec!(3));
    }

    #[test]
    fn test_identical_inputs_identical_outputs() {
        let p = params(dec!(2500000), dec!(9.25), 180);
        assert_eq!(build_schedule(&p).unwrap(), build_schedule(&p).unwrap());
    }
}

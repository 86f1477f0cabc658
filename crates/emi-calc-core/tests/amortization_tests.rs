use emi_calc_core::amortization::{
    amortize, build_schedule, calculate_emi, compute_monthly_installment, summarize_by_year,
    AmortizationCalculator, AmortizationInput, LoanParameters,
};
use emi_calc_core::{EmiError, RoundingMode, RoundingPolicy};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn loan(principal: Decimal, rate: Decimal, tenure: u32) -> LoanParameters {
    LoanParameters::new(principal, rate, tenure).unwrap()
}

/// A spread of realistic and awkward loans.
fn sample_loans() -> Vec<LoanParameters> {
    vec![
        loan(dec!(7500000), dec!(8.5), 240),
        loan(dec!(100000), dec!(12), 1),
        loan(dec!(100000), dec!(12), 12),
        loan(dec!(500000), dec!(10), 60),
        loan(dec!(2500000), dec!(9.25), 180),
        loan(dec!(99999.99), dec!(13.75), 37),
        loan(dec!(1000), dec!(0), 3),
        loan(dec!(1), dec!(0), 7),
        loan(dec!(15000000), dec!(6.75), 360),
        loan(dec!(300000), dec!(24), 84),
        loan(dec!(50000), dec!(36), 600),
        loan(dec!(123456.78), dec!(0.01), 120),
    ]
}

// ===========================================================================
// Closed-form installment
// ===========================================================================

#[test]
fn test_zero_interest_identity() {
    let params = loan(dec!(120000), dec!(0), 12);
    let result = build_schedule(&params).unwrap();
    assert_eq!(result.monthly_installment, dec!(10000));
    assert_eq!(result.total_interest, Decimal::ZERO);
    assert!(result.schedule.iter().all(|e| e.interest_component.is_zero()));
}

#[test]
fn test_zero_interest_uneven_split() {
    let params = loan(dec!(1000), dec!(0), 3);
    let emi = compute_monthly_installment(&params).unwrap();
    // 1000 / 3 within rounding
    assert!((emi - dec!(1000) / dec!(3)).abs() <= dec!(0.005));
}

#[test]
fn test_home_loan_scenario() {
    let params = LoanParameters::from_years(dec!(7500000), dec!(8.5), 20).unwrap();
    let result = build_schedule(&params).unwrap();
    assert_eq!(result.monthly_installment, dec!(65086.74));
    assert_eq!(result.schedule.len(), 240);
    assert_eq!(result.schedule[0].interest_component, dec!(53125.00));
    assert_eq!(result.schedule[239].closing_balance, Decimal::ZERO);
    // The last period absorbs a few rupees of drift at most
    assert!((result.final_installment() - result.monthly_installment).abs() < dec!(5));
}

#[test]
fn test_single_period_scenario() {
    let params = loan(dec!(100000), dec!(12), 1);
    let result = build_schedule(&params).unwrap();
    assert_eq!(result.monthly_installment, dec!(100000) + dec!(100000) * dec!(0.01));
    assert_eq!(result.schedule.len(), 1);
    assert_eq!(result.schedule[0].closing_balance, Decimal::ZERO);
    assert_eq!(result.total_interest, dec!(1000));
}

// ===========================================================================
// Schedule invariants
// ===========================================================================

#[test]
fn test_principal_components_sum_to_principal() {
    for params in sample_loans() {
        let result = build_schedule(&params).unwrap();
        let repaid: Decimal = result.schedule.iter().map(|e| e.principal_component).sum();
        assert_eq!(repaid, params.principal, "{params:?}");
    }
}

#[test]
fn test_terminal_balance_is_zero() {
    for params in sample_loans() {
        let result = build_schedule(&params).unwrap();
        let last = result.schedule.last().unwrap();
        assert_eq!(last.period_index, params.tenure_months);
        assert_eq!(last.closing_balance, Decimal::ZERO, "{params:?}");
    }
}

#[test]
fn test_balance_never_increases() {
    for rate in [dec!(0), dec!(0.5), dec!(7.25), dec!(18), dec!(42), dec!(100)] {
        for tenure in [1, 2, 13, 120, 360] {
            let params = loan(dec!(250000), rate, tenure);
            let result = build_schedule(&params).unwrap();
            for entry in &result.schedule {
                assert!(entry.principal_component >= Decimal::ZERO, "{params:?} {entry:?}");
                assert!(entry.closing_balance <= entry.opening_balance, "{params:?} {entry:?}");
                assert!(entry.closing_balance >= Decimal::ZERO, "{params:?} {entry:?}");
            }
        }
    }
}

#[test]
fn test_rows_chain_and_installments_add_up() {
    for params in sample_loans() {
        let result = build_schedule(&params).unwrap();
        let mut expected_opening = params.principal;
        for (i, entry) in result.schedule.iter().enumerate() {
            assert_eq!(entry.period_index as usize, i + 1);
            assert_eq!(entry.opening_balance, expected_opening);
            assert_eq!(entry.installment, entry.interest_component + entry.principal_component);
            assert_eq!(entry.closing_balance, entry.opening_balance - entry.principal_component);
            if entry.period_index < params.tenure_months {
                assert_eq!(entry.installment, result.monthly_installment, "{params:?}");
            }
            expected_opening = entry.closing_balance;
        }
    }
}

#[test]
fn test_total_payment_identity() {
    for params in sample_loans() {
        let result = build_schedule(&params).unwrap();
        let interest: Decimal = result.schedule.iter().map(|e| e.interest_component).sum();
        assert_eq!(result.total_interest, interest);
        assert_eq!(result.total_payment, result.total_interest + params.principal);
    }
}

#[test]
fn test_half_even_policy_keeps_invariants() {
    let calc =
        AmortizationCalculator::new(RoundingPolicy::new(RoundingMode::HalfEven, 2).unwrap()).unwrap();
    for params in sample_loans() {
        let result = calc.build_schedule(&params).unwrap();
        let repaid: Decimal = result.schedule.iter().map(|e| e.principal_component).sum();
        assert_eq!(repaid, params.principal);
        assert_eq!(result.schedule.last().unwrap().closing_balance, Decimal::ZERO);
    }
}

#[test]
fn test_whole_rupee_policy() {
    let calc =
        AmortizationCalculator::new(RoundingPolicy::new(RoundingMode::HalfUp, 0).unwrap()).unwrap();
    let result = calc.build_schedule(&loan(dec!(7500000), dec!(8.5), 240)).unwrap();
    assert_eq!(result.monthly_installment, dec!(65087));
    assert_eq!(result.schedule.last().unwrap().closing_balance, Decimal::ZERO);
}

// ===========================================================================
// Rejection
// ===========================================================================

#[test]
fn test_invalid_inputs_rejected() {
    let cases = [
        (dec!(0), dec!(10), 12, "principal"),
        (dec!(-100), dec!(10), 12, "principal"),
        (dec!(100000), dec!(10), 0, "tenure_months"),
        (dec!(100000), dec!(-5), 12, "annual_rate_percent"),
    ];
    for (principal, annual_rate_percent, tenure_months, field) in cases {
        let params = LoanParameters {
            principal,
            annual_rate_percent,
            tenure_months,
        };
        for err in [
            compute_monthly_installment(&params).unwrap_err(),
            build_schedule(&params).unwrap_err(),
        ] {
            match err {
                EmiError::InvalidParameter { field: f, value, .. } => {
                    assert_eq!(f, field);
                    assert!(!value.is_empty());
                }
                other => panic!("unexpected error {other:?}"),
            }
        }
    }
}

#[test]
fn test_constructor_rejects_same_cases() {
    assert!(LoanParameters::new(dec!(0), dec!(10), 12).is_err());
    assert!(LoanParameters::new(dec!(-100), dec!(10), 12).is_err());
    assert!(LoanParameters::new(dec!(100000), dec!(10), 0).is_err());
    assert!(LoanParameters::new(dec!(100000), dec!(-5), 12).is_err());
}

// ===========================================================================
// Envelope and derived views
// ===========================================================================

#[test]
fn test_amortize_report_consistency() {
    let input = AmortizationInput::from(loan(dec!(500000), dec!(10), 60));
    let out = amortize(&input).unwrap();
    let report = &out.result;
    assert_eq!(report.summary.monthly_installment, dec!(10623.52));
    assert_eq!(report.summary.total_interest, dec!(137411.38));
    assert_eq!(report.schedule.len(), 60);
    assert_eq!(report.yearly.len(), 5);
    assert!(report.yearly.iter().all(|y| y.periods == 12));
    assert_eq!(report.yearly[4].closing_balance, Decimal::ZERO);
}

#[test]
fn test_emi_envelope_matches_schedule() {
    let params = loan(dec!(2500000), dec!(9.25), 180);
    let out = calculate_emi(&AmortizationInput::from(params.clone())).unwrap();
    let result = build_schedule(&params).unwrap();
    assert_eq!(out.result, result.summary());
    assert_eq!(summarize_by_year(&result).len(), 15);
}

#[test]
fn test_report_serializes_decimals_as_strings() {
    let out = calculate_emi(&AmortizationInput::from(loan(dec!(100000), dec!(12), 12))).unwrap();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["result"]["monthly_installment"], "8884.88");
    assert_eq!(json["result"]["total_payment"], "106618.53");
}

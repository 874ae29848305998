pub mod calculator;
pub mod comparison;
pub mod schedule;

pub use calculator::{calculate_emi, AmortizationCalculator};
pub use comparison::ExtraPaymentComparison;
pub use schedule::{AmortizationResult, ChartSeries, MonthlyRecord, PayoffSummary};

use crate::errors::Result;
use crate::types::LoanParameters;

/// compute the amortization schedule at minor-unit precision
pub fn compute_schedule(params: &LoanParameters) -> Result<AmortizationResult> {
    AmortizationCalculator::default().compute(params)
}

/// compare a plan with extra payments against the plain EMI schedule
pub fn compare_with_baseline(params: &LoanParameters) -> Result<ExtraPaymentComparison> {
    AmortizationCalculator::default().compare_with_baseline(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::types::MAX_TENURE_YEARS;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    // extra payment as a share of principal, large enough to pull payoff forward at any tenure
    fn loan_parameters() -> impl Strategy<Value = LoanParameters> {
        (
            1_000i64..50_000_000,
            0u32..=2_400,
            1u32..=MAX_TENURE_YEARS,
            prop_oneof![Just(0u32), 1u32..=20],
        )
            .prop_map(|(principal, rate_bps, years, extra_percent)| {
                let principal = Decimal::from(principal);
                LoanParameters::from_percent(
                    principal,
                    Decimal::new(rate_bps as i64, 2),
                    years,
                    principal * Decimal::from(extra_percent) / Decimal::from(100),
                )
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn schedule_settles_and_conserves_principal(params in loan_parameters()) {
            let result = compute_schedule(&params).unwrap();
            let term = params.number_of_payments();

            prop_assert!(result.months() <= term);
            if !params.has_extra_payment() {
                prop_assert_eq!(result.months(), term);
            } else if !params.annual_rate.is_zero() {
                prop_assert!(result.months() < term);
            }

            let last = result.schedule.last().unwrap();
            prop_assert_eq!(last.remaining_principal, Money::ZERO);
            prop_assert_eq!(result.total_interest, last.cumulative_interest);

            let drift = (result.total_principal_paid() - params.principal).abs();
            prop_assert!(drift <= Money::from_minor(1, 2));
        }

        #[test]
        fn schedule_is_monotonic(params in loan_parameters()) {
            let result = compute_schedule(&params).unwrap();

            prop_assert_eq!(result.schedule[0].month, 1);
            for pair in result.schedule.windows(2) {
                prop_assert_eq!(pair[1].month, pair[0].month + 1);
                prop_assert!(pair[1].remaining_principal <= pair[0].remaining_principal);
                prop_assert!(pair[1].cumulative_interest >= pair[0].cumulative_interest);
            }
        }

        #[test]
        fn total_payment_is_sum_of_rows(params in loan_parameters()) {
            let result = compute_schedule(&params).unwrap();
            let summed: Money = result.schedule.iter().map(|r| r.emi_paid).sum();
            prop_assert_eq!(result.total_payment, summed);
        }

        #[test]
        fn zero_rate_has_no_interest(
            principal in 1_000i64..10_000_000,
            years in 1u32..=MAX_TENURE_YEARS,
        ) {
            let params = LoanParameters::from_percent(
                Decimal::from(principal),
                Decimal::ZERO,
                years,
                Decimal::ZERO,
            );
            let result = compute_schedule(&params).unwrap();

            let expected = Money::from_decimal((Decimal::from(principal) / Decimal::from(years * 12)).round_dp(2));
            prop_assert_eq!(result.baseline_emi, expected);
            prop_assert_eq!(result.months(), years * 12);
            prop_assert!(result.schedule.iter().all(|r| r.interest_paid.is_zero()));
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::LoanParameters;

use super::calculator::AmortizationCalculator;
use super::schedule::AmortizationResult;

/// effect of an extra monthly payment against the plain EMI schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraPaymentComparison {
    pub with_extra: AmortizationResult,
    pub without_extra: AmortizationResult,
    pub months_saved: u32,
    pub interest_saved: Money,
    /// reduction in total cash paid over the life of the loan
    pub payment_saved: Money,
}

impl ExtraPaymentComparison {
    pub fn from_results(with_extra: AmortizationResult, without_extra: AmortizationResult) -> Self {
        let months_saved = without_extra.months().saturating_sub(with_extra.months());
        let interest_saved = without_extra.total_interest - with_extra.total_interest;
        let payment_saved = without_extra.total_payment - with_extra.total_payment;

        Self {
            with_extra,
            without_extra,
            months_saved,
            interest_saved,
            payment_saved,
        }
    }
}

impl AmortizationCalculator {
    /// run the schedule with and without the extra payment
    pub fn compare_with_baseline(&self, params: &LoanParameters) -> Result<ExtraPaymentComparison> {
        let with_extra = self.compute(params)?;
        let baseline_params = params.with_extra_payment(Money::ZERO);
        let without_extra = self.compute(&baseline_params)?;

        Ok(ExtraPaymentComparison::from_results(with_extra, without_extra))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_extra_payment_savings() {
        let params = LoanParameters::from_percent(dec!(5000000), dec!(8.5), 20, dec!(10000));
        let comparison = AmortizationCalculator::default()
            .compare_with_baseline(&params)
            .unwrap();

        assert_eq!(comparison.without_extra.months(), 240);
        assert_eq!(comparison.months_saved, 240 - comparison.with_extra.months());
        assert!(comparison.months_saved > 0);
        assert!(comparison.interest_saved.is_positive());
        assert!(comparison.payment_saved.is_positive());
        assert_eq!(
            comparison.interest_saved,
            comparison.without_extra.total_interest - comparison.with_extra.total_interest
        );
    }

    #[test]
    fn test_no_extra_payment_saves_nothing() {
        let params = LoanParameters::from_percent(dec!(1200000), dec!(9), 10, dec!(0));
        let comparison = AmortizationCalculator::default()
            .compare_with_baseline(&params)
            .unwrap();

        assert_eq!(comparison.months_saved, 0);
        assert_eq!(comparison.interest_saved, Money::ZERO);
        assert_eq!(comparison.with_extra, comparison.without_extra);
    }

    #[test]
    fn test_interest_free_loan_saves_time_only() {
        let params = LoanParameters::from_percent(dec!(120000), dec!(0), 1, dec!(10000));
        let comparison = AmortizationCalculator::default()
            .compare_with_baseline(&params)
            .unwrap();

        // 20000 a month clears 120000 in 6 months
        assert_eq!(comparison.with_extra.months(), 6);
        assert_eq!(comparison.months_saved, 6);
        assert_eq!(comparison.interest_saved, Money::ZERO);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::Money;
use crate::types::{LoanParameters, MONTHS_PER_YEAR};

/// one month of the amortization schedule, amounts in minor-unit precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub month: u32,
    /// cash paid this month, extra payment and final partial installment included
    pub emi_paid: Money,
    pub principal_paid: Money,
    pub interest_paid: Money,
    pub remaining_principal: Money,
    pub cumulative_interest: Money,
}

impl fmt::Display for MonthlyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "month {}, paid {}, principal {}, interest {}, remaining {}, total interest {}",
            self.month,
            self.emi_paid.to_fixed(2),
            self.principal_paid.to_fixed(2),
            self.interest_paid.to_fixed(2),
            self.remaining_principal.to_fixed(2),
            self.cumulative_interest.to_fixed(2),
        )
    }
}

/// outcome of a single amortization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub parameters: LoanParameters,
    /// annuity installment without any extra payment
    pub baseline_emi: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub schedule: Vec<MonthlyRecord>,
}

impl AmortizationResult {
    /// number of months until payoff
    pub fn months(&self) -> u32 {
        self.schedule.len() as u32
    }

    /// get record for a 1-based month
    pub fn get_record(&self, month: u32) -> Option<&MonthlyRecord> {
        if month == 0 {
            return None;
        }
        self.schedule.get((month - 1) as usize)
    }

    /// remaining principal after the given month
    pub fn balance_after(&self, month: u32) -> Money {
        self.get_record(month)
            .map(|r| r.remaining_principal)
            .unwrap_or(self.parameters.principal)
    }

    pub fn total_principal_paid(&self) -> Money {
        self.schedule.iter().map(|r| r.principal_paid).sum()
    }

    pub fn payoff_summary(&self) -> PayoffSummary {
        PayoffSummary::from_months(self.months())
    }

    /// parallel series for plotting principal/interest split and balance
    pub fn chart_series(&self) -> ChartSeries {
        let mut series = ChartSeries::with_capacity(self.schedule.len());
        for record in &self.schedule {
            series.months.push(record.month);
            series.principal_paid.push(record.principal_paid);
            series.interest_paid.push(record.interest_paid);
            series.remaining_principal.push(record.remaining_principal);
        }
        series
    }
}

/// time to payoff split into years and months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffSummary {
    pub months: u32,
    pub years: u32,
    pub remaining_months: u32,
}

impl PayoffSummary {
    pub fn from_months(months: u32) -> Self {
        Self {
            months,
            years: months / MONTHS_PER_YEAR,
            remaining_months: months % MONTHS_PER_YEAR,
        }
    }
}

impl fmt::Display for PayoffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} months ({} years and {} months)",
            self.months, self.years, self.remaining_months
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub months: Vec<u32>,
    pub principal_paid: Vec<Money>,
    pub interest_paid: Vec<Money>,
    pub remaining_principal: Vec<Money>,
}

impl ChartSeries {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            months: Vec::with_capacity(capacity),
            principal_paid: Vec::with_capacity(capacity),
            interest_paid: Vec::with_capacity(capacity),
            remaining_principal: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn record(month: u32, principal: Money, interest: Money, remaining: Money) -> MonthlyRecord {
        MonthlyRecord {
            month,
            emi_paid: principal + interest,
            principal_paid: principal,
            interest_paid: interest,
            remaining_principal: remaining,
            cumulative_interest: interest,
        }
    }

    fn two_month_result() -> AmortizationResult {
        let params = LoanParameters::from_percent(dec!(1000), dec!(12), 1, dec!(0));
        AmortizationResult {
            parameters: params,
            baseline_emi: Money::from_major(510),
            total_payment: Money::from_major(1015),
            total_interest: Money::from_major(15),
            schedule: vec![
                record(1, Money::from_major(500), Money::from_major(10), Money::from_major(500)),
                record(2, Money::from_major(500), Money::from_major(5), Money::ZERO),
            ],
        }
    }

    #[test]
    fn test_payoff_summary() {
        assert_eq!(
            PayoffSummary::from_months(155).to_string(),
            "155 months (12 years and 11 months)"
        );
        assert_eq!(
            PayoffSummary::from_months(240),
            PayoffSummary { months: 240, years: 20, remaining_months: 0 }
        );
    }

    #[test]
    fn test_record_lookup() {
        let result = two_month_result();
        assert_eq!(result.months(), 2);
        assert!(result.get_record(0).is_none());
        assert!(result.get_record(3).is_none());
        assert_eq!(result.get_record(2).map(|r| r.month), Some(2));

        assert_eq!(result.balance_after(0), Money::from_major(1000));
        assert_eq!(result.balance_after(1), Money::from_major(500));
        assert_eq!(result.balance_after(2), Money::ZERO);
        assert_eq!(result.total_principal_paid(), Money::from_major(1000));
    }

    #[test]
    fn test_chart_series() {
        let series = two_month_result().chart_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series.months, vec![1, 2]);
        assert_eq!(series.interest_paid, vec![Money::from_major(10), Money::from_major(5)]);
        assert_eq!(series.remaining_principal, vec![Money::from_major(500), Money::ZERO]);
    }

    #[test]
    fn test_record_display() {
        let r = record(1, Money::from_major(500), Money::from_decimal(dec!(10.5)), Money::from_major(500));
        assert_eq!(
            r.to_string(),
            "month 1, paid 510.50, principal 500.00, interest 10.50, remaining 500.00, total interest 10.50"
        );
    }
}

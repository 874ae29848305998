use log::{debug, trace};
use rust_decimal::Decimal;

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate, MINOR_UNIT_DP, WORKING_DP};
use crate::errors::{LoanError, Result};
use crate::types::LoanParameters;

use super::schedule::{AmortizationResult, MonthlyRecord};

/// smallest share of the first installment that must go to principal;
/// below it the payoff month depends on decimal rounding, not on the loan
const MIN_PRINCIPAL_SHARE: Decimal = Decimal::from_parts(1, 0, 0, false, 20);

/// amortization calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmortizationCalculator {
    record_precision: u32,
}

impl Default for AmortizationCalculator {
    fn default() -> Self {
        Self::new(MINOR_UNIT_DP)
    }
}

impl AmortizationCalculator {
    /// `record_precision` is the number of decimal places kept in each schedule row,
    /// capped at the working precision
    pub fn new(record_precision: u32) -> Self {
        Self {
            record_precision: record_precision.min(WORKING_DP),
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.record_precision)
    }

    pub fn record_precision(&self) -> u32 {
        self.record_precision
    }

    /// calculate the full amortization schedule with summary metrics
    pub fn compute(&self, params: &LoanParameters) -> Result<AmortizationResult> {
        params.validate()?;

        let number_of_payments = params.number_of_payments();
        let monthly_rate = params.monthly_rate().as_decimal();
        let emi = annuity_payment(params.principal.as_decimal(), monthly_rate, number_of_payments)?;

        let first_interest = params.principal.as_decimal() * monthly_rate;
        if emi - first_interest <= emi * MIN_PRINCIPAL_SHARE {
            return Err(LoanError::NonTerminatingSchedule {
                emi: Money::from_decimal(emi),
                first_interest: Money::from_decimal(first_interest),
            });
        }

        debug!(
            "emi {} for principal {} at {} over {} months, extra payment {}",
            emi, params.principal, params.annual_rate, number_of_payments, params.extra_monthly_payment
        );

        let schedule = self.build_schedule(params, emi)?;

        let total_payment: Money = schedule.iter().map(|r| r.emi_paid).sum();
        let total_interest = schedule
            .last()
            .map(|r| r.cumulative_interest)
            .unwrap_or(Money::ZERO);

        debug!(
            "schedule settled in {} months, total payment {}, total interest {}",
            schedule.len(),
            total_payment,
            total_interest
        );

        Ok(AmortizationResult {
            parameters: *params,
            baseline_emi: self.record(emi),
            total_payment,
            total_interest,
            schedule,
        })
    }

    /// month by month payoff loop, runs until the balance is settled
    ///
    /// Balances are carried at full decimal precision; only the recorded rows are rounded.
    fn build_schedule(&self, params: &LoanParameters, emi: Decimal) -> Result<Vec<MonthlyRecord>> {
        let monthly_rate = params.monthly_rate().as_decimal();
        let extra = params.extra_monthly_payment.as_decimal();
        let tolerance = settlement_tolerance(self.record_precision);
        // backstop only, a settling schedule never runs past the term
        let max_months = params.number_of_payments().saturating_mul(2);

        let mut schedule = Vec::with_capacity(params.number_of_payments() as usize);
        let mut remaining = params.principal.as_decimal();
        let mut cumulative_interest = Decimal::ZERO;
        let mut recorded_balance = self.record(remaining);
        let mut month = 0;

        while remaining > Decimal::ZERO {
            if month == max_months {
                return Err(LoanError::ScheduleDidNotSettle {
                    max_months,
                    remaining: Money::from_decimal(remaining),
                });
            }
            month += 1;

            let interest_paid = remaining * monthly_rate;
            let mut principal_paid = emi - interest_paid + extra;

            // a residue below the tolerance would otherwise need one more sub-cent payment
            let emi_paid = if principal_paid + tolerance >= remaining {
                principal_paid = remaining;
                remaining + interest_paid
            } else {
                emi + extra
            };

            remaining = (remaining - principal_paid).max(Decimal::ZERO);
            cumulative_interest += interest_paid;

            trace!(
                "month {}, interest {}, principal {}, remaining {}",
                month,
                interest_paid,
                principal_paid,
                remaining
            );

            // principal column is the drop in the recorded balance so it sums to the principal
            let balance = self.record(remaining);
            schedule.push(MonthlyRecord {
                month,
                emi_paid: self.record(emi_paid),
                principal_paid: recorded_balance - balance,
                interest_paid: self.record(interest_paid),
                remaining_principal: balance,
                cumulative_interest: self.record(cumulative_interest),
            });
            recorded_balance = balance;
        }

        Ok(schedule)
    }

    fn record(&self, amount: Decimal) -> Money {
        Money::from_decimal(amount.round_dp(self.record_precision))
    }
}

/// calculate the equated monthly installment for a fixed-rate loan
///
/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1), evaluated as P / a(n) where
/// a(n) is the sum of the discount factors (1 + r)^-k for k in 1..=n.
/// At a zero rate this is P / n.
pub fn calculate_emi(principal: Money, annual_rate: Rate, months: u32) -> Result<Money> {
    let monthly_rate = annual_rate.monthly_rate().as_decimal();
    annuity_payment(principal.as_decimal(), monthly_rate, months).map(Money::from_decimal)
}

/// installment at full decimal precision
fn annuity_payment(principal: Decimal, monthly_rate: Decimal, months: u32) -> Result<Decimal> {
    if months == 0 {
        return Err(LoanError::invalid("months", "must be at least one"));
    }

    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let factor = annuity_factor(monthly_rate, months)?;

    principal
        .checked_div(factor)
        .ok_or_else(|| LoanError::CalculationError {
            message: format!("emi overflow for principal {} and monthly rate {}", principal, monthly_rate),
        })
}

/// present value of one unit paid monthly for `months` months
fn annuity_factor(monthly_rate: Decimal, months: u32) -> Result<Decimal> {
    let discount = Decimal::ONE
        .checked_add(monthly_rate)
        .and_then(|base| Decimal::ONE.checked_div(base))
        .ok_or_else(|| LoanError::CalculationError {
            message: format!("discount factor overflow for monthly rate {}", monthly_rate),
        })?;

    let mut factor = Decimal::ZERO;
    let mut term = Decimal::ONE;
    for _ in 0..months {
        term *= discount;
        factor += term;
    }

    Ok(factor)
}

/// half of one unit at the recorded precision
fn settlement_tolerance(dp: u32) -> Decimal {
    Decimal::new(5, dp + 1)
}

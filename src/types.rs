use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};

pub const MONTHS_PER_YEAR: u32 = 12;

/// longest tenure accepted
pub const MAX_TENURE_YEARS: u32 = 100;

/// inputs to a single amortization run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: Money,
    /// annual interest rate
    pub annual_rate: Rate,
    pub tenure_years: u32,
    /// constant amount paid towards principal on top of the EMI
    #[serde(default)]
    pub extra_monthly_payment: Money,
}

impl LoanParameters {
    pub fn new(principal: Money, annual_rate: Rate, tenure_years: u32) -> Self {
        Self {
            principal,
            annual_rate,
            tenure_years,
            extra_monthly_payment: Money::ZERO,
        }
    }

    /// build from plain numbers, rate given as a percentage (8.5 for 8.5%)
    pub fn from_percent(
        principal: Decimal,
        annual_rate_percent: Decimal,
        tenure_years: u32,
        extra_monthly_payment: Decimal,
    ) -> Self {
        Self {
            principal: Money::from_decimal(principal),
            annual_rate: Rate::from_percentage(annual_rate_percent),
            tenure_years,
            extra_monthly_payment: Money::from_decimal(extra_monthly_payment),
        }
    }

    pub fn with_extra_payment(mut self, extra: Money) -> Self {
        self.extra_monthly_payment = extra;
        self
    }

    /// total number of scheduled payments for the tenure
    pub fn number_of_payments(&self) -> u32 {
        self.tenure_years.saturating_mul(MONTHS_PER_YEAR)
    }

    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate.monthly_rate()
    }

    pub fn has_extra_payment(&self) -> bool {
        self.extra_monthly_payment.is_positive()
    }

    /// reject inputs the engine cannot amortize
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_positive() {
            return Err(LoanError::invalid(
                "principal",
                format!("must be greater than zero, got {}", self.principal),
            ));
        }

        if self.annual_rate.is_negative() {
            return Err(LoanError::invalid(
                "annual_rate",
                format!("must not be negative, got {}", self.annual_rate),
            ));
        }

        if self.tenure_years == 0 {
            return Err(LoanError::invalid("tenure_years", "must be at least one year"));
        }

        if self.tenure_years > MAX_TENURE_YEARS {
            return Err(LoanError::invalid(
                "tenure_years",
                format!("must not exceed {} years, got {}", MAX_TENURE_YEARS, self.tenure_years),
            ));
        }

        if self.extra_monthly_payment.is_negative() {
            return Err(LoanError::invalid(
                "extra_monthly_payment",
                format!("must not be negative, got {}", self.extra_monthly_payment),
            ));
        }

        Ok(())
    }
}

use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    #[error("schedule cannot amortize: emi {emi} does not exceed first month interest {first_interest}")]
    NonTerminatingSchedule {
        emi: Money,
        first_interest: Money,
    },

    #[error("schedule did not settle within {max_months} months, balance left {remaining}")]
    ScheduleDidNotSettle {
        max_months: u32,
        remaining: Money,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoanError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        LoanError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// true for both ways a schedule can fail to terminate
    pub fn is_non_terminating(&self) -> bool {
        matches!(
            self,
            LoanError::NonTerminatingSchedule { .. } | LoanError::ScheduleDidNotSettle { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;

pub mod amortization;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod export;
pub mod format;
pub mod types;

// re-export key types
pub use amortization::{
    calculate_emi, compare_with_baseline, compute_schedule, AmortizationCalculator,
    AmortizationResult, ChartSeries, ExtraPaymentComparison, MonthlyRecord, PayoffSummary,
};
pub use config::CalculatorConfig;
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use export::{to_csv_string, write_csv, write_csv_file};
pub use format::{format_currency, CurrencyFormatter, FormattingContext, FormattingStrategy};
pub use types::LoanParameters;

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;

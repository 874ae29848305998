use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::decimal::{MINOR_UNIT_DP, WORKING_DP};
use crate::errors::{LoanError, Result};
use crate::export::DEFAULT_CSV_FILE_NAME;
use crate::format::{FormattingContext, FormattingStrategy};

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub formatting: FormattingContext,
    /// decimal places kept in each schedule row
    pub record_precision: u32,
    /// file name used when exporting without an explicit path
    pub csv_file_name: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::indian_rupee()
    }
}

impl CalculatorConfig {
    /// rupee amounts with lakh/crore grouping
    pub fn indian_rupee() -> Self {
        Self {
            formatting: FormattingContext::indian_rupee(),
            record_precision: MINOR_UNIT_DP,
            csv_file_name: DEFAULT_CSV_FILE_NAME.to_string(),
        }
    }

    pub fn us_dollar() -> Self {
        Self {
            formatting: FormattingContext::us_dollar(),
            record_precision: MINOR_UNIT_DP,
            csv_file_name: DEFAULT_CSV_FILE_NAME.to_string(),
        }
    }

    /// symbol-only formatting, no locale lookup
    pub fn fixed_symbol(symbol: &str) -> Self {
        Self {
            formatting: FormattingContext::new("", symbol)
                .with_order(vec![FormattingStrategy::FixedSymbolGrouped]),
            ..Self::indian_rupee()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.record_precision > WORKING_DP {
            return Err(LoanError::InvalidConfiguration {
                message: format!(
                    "record_precision {} exceeds working precision {}",
                    self.record_precision, WORKING_DP
                ),
            });
        }

        if self.formatting.symbol.trim().is_empty() {
            return Err(LoanError::InvalidConfiguration {
                message: "currency symbol must not be empty".to_string(),
            });
        }

        if self.csv_file_name.trim().is_empty() {
            return Err(LoanError::InvalidConfiguration {
                message: "csv_file_name must not be empty".to_string(),
            });
        }

        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CalculatorConfig =
            serde_json::from_str(json).map_err(|e| LoanError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| LoanError::InvalidConfiguration {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| LoanError::InvalidConfiguration {
            message: e.to_string(),
        })
    }
}

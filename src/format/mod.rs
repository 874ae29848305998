//! currency formatting for display
//!
//! Formatting never fails: strategies are tried in the configured order and
//! the fixed symbol strategy accepts any context, so it is always the last
//! resort. The context is passed explicitly; there is no global locale.

pub mod grouping;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, MINOR_UNIT_DP};

pub use grouping::{group_digits, Grouping};

/// how an amount is turned into display text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormattingStrategy {
    /// use the conventions of the context locale, when the locale is known
    LocaleAware,
    /// context symbol followed by a thousands-grouped amount
    FixedSymbolGrouped,
}

/// explicit formatting context, chosen once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattingContext {
    /// locale tag such as `en-IN` or `en_US`
    pub locale: String,
    /// currency symbol used by the fixed strategy
    pub symbol: String,
    /// strategies in order of preference
    pub fallback_order: Vec<FormattingStrategy>,
}

impl FormattingContext {
    pub fn new(locale: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            symbol: symbol.into(),
            fallback_order: vec![
                FormattingStrategy::LocaleAware,
                FormattingStrategy::FixedSymbolGrouped,
            ],
        }
    }

    pub fn with_order(mut self, order: Vec<FormattingStrategy>) -> Self {
        self.fallback_order = order;
        self
    }

    pub fn indian_rupee() -> Self {
        Self::new("en-IN", "₹")
    }

    pub fn us_dollar() -> Self {
        Self::new("en-US", "$")
    }
}

impl Default for FormattingContext {
    fn default() -> Self {
        Self::indian_rupee()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPosition {
    Prefix,
    Suffix,
}

/// number conventions for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
struct NumberStyle {
    symbol: String,
    position: SymbolPosition,
    grouping: Grouping,
    group_separator: char,
    decimal_separator: char,
}

impl NumberStyle {
    fn fixed(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            position: SymbolPosition::Prefix,
            grouping: Grouping::Thousands,
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    /// conventions of the locales we know, None otherwise
    fn for_locale(locale: &str) -> Option<Self> {
        let tag = locale.replace('_', "-").to_ascii_lowercase();
        let tag = tag.split('.').next().unwrap_or_default();

        let prefix = |symbol: &str, grouping| NumberStyle {
            symbol: symbol.to_string(),
            position: SymbolPosition::Prefix,
            grouping,
            group_separator: ',',
            decimal_separator: '.',
        };

        match tag {
            "en-in" | "hi-in" => Some(prefix("₹", Grouping::Indian)),
            "en-us" => Some(prefix("$", Grouping::Thousands)),
            "en-gb" => Some(prefix("£", Grouping::Thousands)),
            "de-de" => Some(NumberStyle {
                symbol: "€".to_string(),
                position: SymbolPosition::Suffix,
                grouping: Grouping::Thousands,
                group_separator: '.',
                decimal_separator: ',',
            }),
            _ => None,
        }
    }

    fn render(&self, amount: Money) -> String {
        let fixed = amount.abs().to_fixed(MINOR_UNIT_DP);
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let grouped = group_digits(whole, self.grouping, self.group_separator);
        let sign = if amount.round_dp(MINOR_UNIT_DP).is_negative() { "-" } else { "" };

        match self.position {
            SymbolPosition::Prefix => {
                format!("{}{}{}{}{}", sign, self.symbol, grouped, self.decimal_separator, fraction)
            }
            SymbolPosition::Suffix => {
                format!("{}{}{}{} {}", sign, grouped, self.decimal_separator, fraction, self.symbol)
            }
        }
    }
}

/// formatter resolved from a context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    strategy: FormattingStrategy,
    style: NumberStyle,
}

impl CurrencyFormatter {
    /// pick the first strategy in the fallback order that supports the context
    pub fn new(context: &FormattingContext) -> Self {
        for strategy in &context.fallback_order {
            match strategy {
                FormattingStrategy::LocaleAware => {
                    if let Some(style) = NumberStyle::for_locale(&context.locale) {
                        return Self { strategy: *strategy, style };
                    }
                    log::debug!("no number conventions for locale {}, trying next strategy", context.locale);
                }
                FormattingStrategy::FixedSymbolGrouped => {
                    return Self::fixed(&context.symbol);
                }
            }
        }

        Self::fixed(&context.symbol)
    }

    fn fixed(symbol: &str) -> Self {
        Self {
            strategy: FormattingStrategy::FixedSymbolGrouped,
            style: NumberStyle::fixed(symbol),
        }
    }

    /// strategy this formatter settled on
    pub fn strategy(&self) -> FormattingStrategy {
        self.strategy
    }

    pub fn format(&self, amount: Money) -> String {
        self.style.render(amount)
    }
}

/// format an amount with the given context
pub fn format_currency(context: &FormattingContext, amount: Money) -> String {
    CurrencyFormatter::new(context).format(amount)
}

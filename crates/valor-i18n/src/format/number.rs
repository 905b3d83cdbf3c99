//! Locale number formatting with exact scale
//!
//! Digits are never rounded: a value renders with exactly the integer and
//! fraction digits it carries, padded up to a minimum fraction-digit count.
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use super::registry::{FormatContext, Formatter};
use crate::locale::Locale;
use bigdecimal::BigDecimal;
use valor_core::{DecimalParts, Value};

/// Decimal and grouping separators of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: char,
    pub grouping: char,
}

impl NumberSymbols {
    /// Separators for a locale; root and unknown languages use `.` and `,`
    pub fn for_locale(locale: &Locale) -> Self {
        let (decimal, grouping) = match (locale.language(), locale.country()) {
            ("de", "CH") | ("it", "CH") => ('.', '\''),
            ("pt", "PT") => (',', '\u{a0}'),
            ("pt" | "de" | "es" | "it" | "nl" | "id" | "tr" | "da" | "el", _) => (',', '.'),
            ("fr", _) => (',', '\u{202f}'),
            ("ru" | "pl" | "cs" | "sk" | "sv" | "nb" | "fi" | "uk" | "hu", _) => (',', '\u{a0}'),
            _ => ('.', ','),
        };
        Self { decimal, grouping }
    }
}

/// Number formatter preserving the exact digits of the value
///
/// ```rust
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
/// use valor_i18n::{Locale, NumberFormat};
///
/// let amount = BigDecimal::from_str("9999.999").unwrap();
/// let pt_br = Locale::parse("pt_BR").unwrap();
///
/// assert_eq!(NumberFormat::new().format_decimal(&amount, &pt_br), "9.999,999");
/// assert_eq!(NumberFormat::new().format_decimal(&amount, &Locale::root()), "9,999.999");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    min_fraction_digits: usize,
    grouping: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            grouping: true,
        }
    }
}

impl NumberFormat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Never render fewer fraction digits than `digits` (a currency's minor unit)
    pub fn with_min_fraction_digits(mut self, digits: usize) -> Self {
        self.min_fraction_digits = digits;
        self
    }

    /// Render the integer part without grouping separators
    pub fn without_grouping(mut self) -> Self {
        self.grouping = false;
        self
    }

    pub fn min_fraction_digits(&self) -> usize {
        self.min_fraction_digits
    }

    pub fn format_decimal(&self, value: &BigDecimal, locale: &Locale) -> String {
        self.format_parts(&DecimalParts::from_decimal(value), locale)
    }

    /// Locale-neutral scientific notation when the value is too large to expand
    pub fn format_parts(&self, parts: &DecimalParts, locale: &Locale) -> String {
        let (integer, fraction) = match parts.split() {
            Some(split) => split,
            None => return parts.to_string(),
        };
        let symbols = NumberSymbols::for_locale(locale);

        let mut out = String::with_capacity(integer.len() + fraction.len() + 8);
        if parts.is_negative() {
            out.push('-');
        }

        for (i, digit) in integer.chars().enumerate() {
            let remaining = integer.len() - i;
            if self.grouping && i > 0 && remaining % 3 == 0 {
                out.push(symbols.grouping);
            }
            out.push(digit);
        }

        let fraction_len = fraction.len().max(self.min_fraction_digits);
        if fraction_len > 0 {
            out.push(symbols.decimal);
            out.push_str(&fraction);
            out.extend(std::iter::repeat('0').take(fraction_len - fraction.len()));
        }
        out
    }

    /// Format any value with an exact decimal view; `None` for other values
    pub fn format_value(&self, value: &Value, locale: &Locale) -> Option<String> {
        value.as_decimal().map(|decimal| self.format_decimal(&decimal, locale))
    }
}

impl Formatter for NumberFormat {
    fn format(&self, value: &Value, context: &FormatContext<'_>) -> String {
        self.format_value(value, context.locale())
            .unwrap_or_else(|| value.to_string())
    }
}

//! Built-in formatters
//!
//! | tag | formatter |
//! |---|---|
//! | `bool` | [`BoolFormatter`], bundle keys `valor.values.true` / `valor.values.false` |
//! | `char`, `string` | [`DisplayFormatter`], verbatim |
//! | `number`, `integer`, `float`, `decimal` | [`NumberFormat`] |
//! | `iterable` | [`ListFormatter`], elements joined with `", "` |
//! | `date`, `datetime` | [`TemporalFormatter`], patterns from `valor.formats.date` / `valor.formats.datetime` |
//!
//! Anything else renders through [`DisplayFormatter`].
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use super::number::NumberFormat;
use super::registry::{FormatContext, Formatter, FormatterRegistry};
use std::fmt::{Display, Write};
use valor_core::{tags, Value};

pub const TRUE_KEY: &str = "valor.values.true";
pub const FALSE_KEY: &str = "valor.values.false";
pub const DATE_PATTERN_KEY: &str = "valor.formats.date";
pub const DATETIME_PATTERN_KEY: &str = "valor.formats.datetime";

const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d";
const DEFAULT_DATETIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Register every built-in formatter
pub fn register_builtins(registry: &FormatterRegistry) {
    registry.register(tags::BOOL, BoolFormatter);
    registry.register(tags::CHAR, DisplayFormatter);
    registry.register(tags::STRING, DisplayFormatter);
    registry.register(tags::NUMBER, NumberFormat::new());
    registry.register(tags::INTEGER, NumberFormat::new());
    registry.register(tags::FLOAT, NumberFormat::new());
    registry.register(tags::DECIMAL, NumberFormat::new());
    registry.register(tags::ITERABLE, ListFormatter);
    registry.register(tags::DATE, TemporalFormatter);
    registry.register(tags::DATETIME, TemporalFormatter);
}

/// Locale-neutral stringification, the formatter of last resort
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayFormatter;

impl Formatter for DisplayFormatter {
    fn format(&self, value: &Value, _context: &FormatContext<'_>) -> String {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BoolFormatter;

impl Formatter for BoolFormatter {
    fn format(&self, value: &Value, context: &FormatContext<'_>) -> String {
        let key = match value {
            Value::Bool(true) => TRUE_KEY,
            Value::Bool(false) => FALSE_KEY,
            other => return other.to_string(),
        };
        context
            .bundle()
            .try_resolve(key)
            .map_or_else(|_| value.to_string(), str::to_string)
    }
}

/// Formats each element through the registry and joins them with `", "`
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFormatter;

impl Formatter for ListFormatter {
    fn format(&self, value: &Value, context: &FormatContext<'_>) -> String {
        match value.as_list() {
            Some(items) => items
                .iter()
                .map(|item| context.format(item))
                .collect::<Vec<_>>()
                .join(", "),
            None => value.to_string(),
        }
    }
}

/// Dates and date-times with chrono patterns taken from the active bundle
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalFormatter;

impl TemporalFormatter {
    fn pattern<'c>(context: &FormatContext<'c>, key: &str, default: &'static str) -> &'c str {
        context.bundle().try_resolve(key).unwrap_or(default)
    }
}

/// Render with a pattern, falling back to the ISO pattern when it is invalid
fn render<'p, D, F>(format: F, pattern: &'p str, default: &'p str) -> String
where
    D: Display,
    F: Fn(&'p str) -> D,
{
    let mut out = String::new();
    if write!(out, "{}", format(pattern)).is_ok() {
        return out;
    }
    tracing::warn!(pattern, "invalid date pattern, using {}", default);
    out.clear();
    match write!(out, "{}", format(default)) {
        Ok(()) => out,
        Err(_) => String::new(),
    }
}

impl Formatter for TemporalFormatter {
    fn format(&self, value: &Value, context: &FormatContext<'_>) -> String {
        match value {
            Value::Date(date) => {
                let pattern = Self::pattern(context, DATE_PATTERN_KEY, DEFAULT_DATE_PATTERN);
                render(|p| date.format(p), pattern, DEFAULT_DATE_PATTERN)
            }
            Value::DateTime(datetime) => {
                let pattern = Self::pattern(context, DATETIME_PATTERN_KEY, DEFAULT_DATETIME_PATTERN);
                render(|p| datetime.format(p), pattern, DEFAULT_DATETIME_PATTERN)
            }
            other => other.to_string(),
        }
    }
}

//! Properties-format parsing for message bundles
//!
//! Supported syntax:
//! - `key=value`, `key: value` and `key value` separators
//! - `#` and `!` comment lines, blank lines
//! - backslash line continuations (leading whitespace of the next line is dropped)
//! - `\t \n \r \f \\ \uXXXX` escapes, any other escaped character stands for itself
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::error::{I18nError, Result};
use std::collections::HashMap;
use std::str::Chars;

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// Parser for properties-format message bundles
#[derive(Debug, Default)]
pub struct PropertiesParser;

impl PropertiesParser {
    /// Create a new properties parser
    pub fn new() -> Self {
        Self
    }

    /// Parse bundle content into a key/template map
    ///
    /// `base_name` and `locale` only label errors. A key defined twice keeps its
    /// last definition.
    pub fn parse(&self, content: &str, base_name: &str, locale: &str) -> Result<HashMap<String, String>> {
        let mut messages = HashMap::new();
        let mut logical = String::new();
        let mut start_line = 0;
        let mut continuing = false;

        for (index, natural) in content.lines().enumerate() {
            let line = natural.trim_start_matches(is_blank);
            if !continuing {
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }
                start_line = index + 1;
            }

            let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
            if trailing % 2 == 1 {
                logical.push_str(&line[..line.len() - 1]);
                continuing = true;
                continue;
            }

            logical.push_str(line);
            continuing = false;
            self.insert_entry(&mut messages, &logical, base_name, locale, start_line)?;
            logical.clear();
        }

        if continuing {
            self.insert_entry(&mut messages, &logical, base_name, locale, start_line)?;
        }

        Ok(messages)
    }

    fn insert_entry(
        &self,
        messages: &mut HashMap<String, String>,
        logical: &str,
        base_name: &str,
        locale: &str,
        line: usize,
    ) -> Result<()> {
        let (raw_key, raw_value) = split_entry(logical);
        let key = unescape(raw_key).map_err(|reason| I18nError::malformed_bundle(base_name, locale, line, reason))?;
        let value =
            unescape(raw_value).map_err(|reason| I18nError::malformed_bundle(base_name, locale, line, reason))?;
        if key.is_empty() {
            return Err(I18nError::malformed_bundle(base_name, locale, line, "empty key"));
        }
        messages.insert(key, value);
        Ok(())
    }
}

/// Split a logical line at the first unescaped separator
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let rest = line[key_end..].trim_start_matches(is_blank);
    let rest = rest.strip_prefix(|c| c == '=' || c == ':').unwrap_or(rest);
    (&line[..key_end], rest.trim_start_matches(is_blank))
}

fn read_hex4(chars: &mut Chars<'_>) -> std::result::Result<u32, String> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.chars().count() != 4 {
        return Err(format!("truncated unicode escape '\\u{}'", hex));
    }
    u32::from_str_radix(&hex, 16).map_err(|_| format!("invalid unicode escape '\\u{}'", hex))
}

fn unescape(raw: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let mut code = read_hex4(&mut chars)?;
                if (0xD800..0xDC00).contains(&code) {
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return Err(format!("unpaired surrogate '\\u{:04X}'", code));
                    }
                    let low = read_hex4(&mut chars)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(format!("unpaired surrogate '\\u{:04X}'", code));
                    }
                    code = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                }
                let decoded = char::from_u32(code).ok_or_else(|| format!("invalid code point '\\u{:04X}'", code))?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
            None => {}
        }
    }
    Ok(out)
}

//! Locale identifiers and their fallback candidates
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::error::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `language[_COUNTRY[_variant]]` locale
///
/// The root locale has every part empty and matches bundles without a locale
/// suffix. Language is stored lowercase and country uppercase, so `pt-br` and
/// `pt_BR` are the same locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    country: String,
    variant: String,
}

impl Locale {
    /// The root locale
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse `pt_BR`, `pt-BR`, `de`, `en_US_POSIX`, or the empty root locale
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("root") {
            return Ok(Self::root());
        }

        let mut parts = trimmed.split(|c| c == '_' || c == '-');
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        let variant = parts.collect::<Vec<_>>().join("_");

        let valid_language = (2..=8).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic());
        let valid_country = country.is_empty()
            || (country.len() == 2 && country.chars().all(|c| c.is_ascii_alphabetic()))
            || (country.len() == 3 && country.chars().all(|c| c.is_ascii_digit()));
        let valid_variant = variant.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid_language || !valid_country || !valid_variant || (country.is_empty() && !variant.is_empty()) {
            return Err(I18nError::invalid_locale(input));
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            country: country.to_ascii_uppercase(),
            variant,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn is_root(&self) -> bool {
        self.language.is_empty()
    }

    /// This locale with the most specific part removed, `None` for root
    pub fn parent(&self) -> Option<Self> {
        if !self.variant.is_empty() {
            Some(Self {
                variant: String::new(),
                ..self.clone()
            })
        } else if !self.country.is_empty() {
            Some(Self {
                language: self.language.clone(),
                ..Self::default()
            })
        } else if !self.is_root() {
            Some(Self::root())
        } else {
            None
        }
    }

    /// Most specific to least specific, always ending with root
    ///
    /// `pt_BR_x` yields `pt_BR_x`, `pt_BR`, `pt`, root.
    pub fn candidates(&self) -> Vec<Self> {
        let mut chain = vec![self.clone()];
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            chain.push(parent.clone());
            current = parent;
        }
        chain
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.country.is_empty() {
            write!(f, "_{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "_{}", self.variant)?;
        }
        Ok(())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

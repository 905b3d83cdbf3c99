//! Message rendering configuration
//!
//! Loaded from YAML, TOML or JSON text, then overridden by environment
//! variables:
//! - `VALOR_LOCALE`: default locale
//! - `VALOR_FALLBACK_LOCALE`: fallback locale
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};

/// Locales and bundle used when rendering violation messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Locale used when a caller does not pass one
    pub default_locale: Locale,

    /// Locale searched in each constraint's own bundle; the requested locale when unset
    pub fallback_locale: Option<Locale>,

    /// Application bundle searched before each constraint's own bundle
    pub base_name: Option<String>,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::root(),
            fallback_locale: None,
            base_name: None,
        }
    }
}

impl MessageConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Apply environment variable overrides
    ///
    /// Unparseable values are logged and ignored.
    pub fn merge_with_env(&mut self) {
        if let Ok(value) = std::env::var("VALOR_LOCALE") {
            match Locale::parse(&value) {
                Ok(locale) => self.default_locale = locale,
                Err(e) => tracing::warn!("Ignoring VALOR_LOCALE: {}", e),
            }
        }

        if let Ok(value) = std::env::var("VALOR_FALLBACK_LOCALE") {
            match Locale::parse(&value) {
                Ok(locale) => self.fallback_locale = Some(locale),
                Err(e) => tracing::warn!("Ignoring VALOR_FALLBACK_LOCALE: {}", e),
            }
        }
    }

    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    pub fn with_fallback_locale(mut self, locale: Locale) -> Self {
        self.fallback_locale = Some(locale);
        self
    }

    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = Some(base_name.into());
        self
    }
}

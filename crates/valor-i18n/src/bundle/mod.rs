//! Message bundles and the catalog that holds them
//!
//! A bundle is the set of templates for one base name in one locale, written in
//! properties format. Bundle names follow `<base>_<locale>` with no suffix for
//! the root locale, e.g. `valor/messages` and `valor/messages_pt_BR`.
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

pub mod catalog;
pub mod parser;

pub use catalog::Catalog;
pub use parser::PropertiesParser;

use crate::error::Result;
use crate::locale::Locale;
use std::collections::HashMap;

/// Bundle name for a base name and locale
pub fn bundle_name(base_name: &str, locale: &Locale) -> String {
    if locale.is_root() {
        base_name.to_string()
    } else {
        format!("{}_{}", base_name, locale)
    }
}

/// Templates for one base name in one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    base_name: String,
    locale: Locale,
    messages: HashMap<String, String>,
}

impl ResourceBundle {
    /// Create an empty bundle
    pub fn new(base_name: impl Into<String>, locale: Locale) -> Self {
        Self {
            base_name: base_name.into(),
            locale,
            messages: HashMap::new(),
        }
    }

    /// Parse a bundle from properties-format text
    pub fn from_properties(base_name: impl Into<String>, locale: Locale, content: &str) -> Result<Self> {
        let base_name = base_name.into();
        let messages = PropertiesParser::new().parse(content, &base_name, &locale.to_string())?;
        Ok(Self {
            base_name,
            locale,
            messages,
        })
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// `<base>_<locale>`, or the base name alone for root
    pub fn name(&self) -> String {
        bundle_name(&self.base_name, &self.locale)
    }

    /// Template for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Add or replace one template
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(key.into(), template.into());
    }

    /// Add every template of `other`, replacing existing keys
    pub fn merge(&mut self, other: ResourceBundle) {
        self.messages.extend(other.messages);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

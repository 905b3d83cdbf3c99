//! In-memory bundle catalog
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use super::ResourceBundle;
use crate::error::Result;
use crate::locale::Locale;
use std::collections::HashMap;
use valor_core::DEFAULT_MESSAGE_BUNDLE;

/// Built-in translations of the core bundle, as `(locale, content)`
const BUILTIN_BUNDLES: &[(&str, &str)] = &[
    ("", include_str!("../../resources/messages.properties")),
    ("pt_BR", include_str!("../../resources/messages_pt_BR.properties")),
    ("de", include_str!("../../resources/messages_de.properties")),
    ("es", include_str!("../../resources/messages_es.properties")),
];

/// Bundles keyed by base name and locale
///
/// A catalog is built once, then shared read-only (typically behind an `Arc`).
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    bundles: HashMap<(String, Locale), ResourceBundle>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in core bundle translations
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::new();
        for (locale, content) in BUILTIN_BUNDLES {
            catalog.register_str(DEFAULT_MESSAGE_BUNDLE, Locale::parse(locale)?, content)?;
        }
        Ok(catalog)
    }

    /// Parse and register a bundle from properties-format text
    ///
    /// Keys merge into an existing bundle for the same base name and locale,
    /// so hosts can override individual core templates.
    pub fn register_str(&mut self, base_name: &str, locale: Locale, content: &str) -> Result<()> {
        let bundle = ResourceBundle::from_properties(base_name, locale, content)?;
        self.insert(bundle);
        Ok(())
    }

    /// Add a bundle, merging into an existing one for the same base name and locale
    pub fn insert(&mut self, bundle: ResourceBundle) {
        tracing::debug!(bundle = %bundle.name(), messages = bundle.len(), "registering message bundle");

        let key = (bundle.base_name().to_string(), bundle.locale().clone());
        match self.bundles.get_mut(&key) {
            Some(existing) => existing.merge(bundle),
            None => {
                self.bundles.insert(key, bundle);
            }
        }
    }

    /// Bundle for an exact base name and locale, without fallback
    pub fn get(&self, base_name: &str, locale: &Locale) -> Option<&ResourceBundle> {
        self.bundles.get(&(base_name.to_string(), locale.clone()))
    }

    /// Template for a key in one exact bundle
    pub fn message(&self, base_name: &str, locale: &Locale, key: &str) -> Option<&str> {
        self.get(base_name, locale).and_then(|bundle| bundle.get(key))
    }

    pub fn contains(&self, base_name: &str, locale: &Locale) -> bool {
        self.get(base_name, locale).is_some()
    }

    /// Every registered bundle, in no particular order
    pub fn bundles(&self) -> impl Iterator<Item = &ResourceBundle> {
        self.bundles.values()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }
}

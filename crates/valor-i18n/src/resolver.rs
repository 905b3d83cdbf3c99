//! Template resolution with locale fallback
//!
//! The search order for a key is:
//!
//! 1. the primary bundle, from the exact locale down to root
//!    (`pt_BR_x`, `pt_BR`, `pt`, root)
//! 2. the fallback bundle, from the fallback locale down to root
//! 3. the built-in core bundle at root
//!
//! The first bundle defining the key wins. Pairs already searched are skipped.
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::bundle::{bundle_name, Catalog};
use crate::error::{I18nError, Result};
use crate::locale::Locale;
use valor_core::DEFAULT_MESSAGE_BUNDLE;

/// Resolves message templates against a catalog
#[derive(Debug, Clone, Copy)]
pub struct MessageResolver<'c> {
    catalog: &'c Catalog,
}

impl<'c> MessageResolver<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Every `(base_name, locale)` pair searched, in order, without duplicates
    pub fn search_chain(
        &self,
        base_name: &str,
        locale: &Locale,
        fallback_base_name: &str,
        fallback_locale: &Locale,
    ) -> Vec<(String, Locale)> {
        let mut chain: Vec<(String, Locale)> = Vec::new();
        let primary = locale.candidates().into_iter().map(|l| (base_name, l));
        let fallback = fallback_locale.candidates().into_iter().map(|l| (fallback_base_name, l));
        let core = std::iter::once((DEFAULT_MESSAGE_BUNDLE, Locale::root()));

        for (base, candidate) in primary.chain(fallback).chain(core) {
            if !chain.iter().any(|(b, l)| b == base && *l == candidate) {
                chain.push((base.to_string(), candidate));
            }
        }
        chain
    }

    /// Template for `key`, or [`I18nError::MessageNotFound`] listing the chain searched
    pub fn try_resolve(
        &self,
        base_name: &str,
        key: &str,
        locale: &Locale,
        fallback_base_name: &str,
        fallback_locale: &Locale,
    ) -> Result<&'c str> {
        let chain = self.search_chain(base_name, locale, fallback_base_name, fallback_locale);
        for (base, candidate) in &chain {
            if let Some(template) = self.catalog.message(base, candidate, key) {
                tracing::trace!(key, bundle = %bundle_name(base, candidate), "message resolved");
                return Ok(template);
            }
        }

        Err(I18nError::message_not_found(
            key,
            chain.iter().map(|(base, candidate)| bundle_name(base, candidate)),
        ))
    }

    /// Template for `key`, never failing
    ///
    /// When no bundle in the chain defines the key, the key itself is returned
    /// as the template and a warning is logged.
    pub fn resolve(
        &self,
        base_name: &str,
        key: &str,
        locale: &Locale,
        fallback_base_name: &str,
        fallback_locale: &Locale,
    ) -> String {
        match self.try_resolve(base_name, key, locale, fallback_base_name, fallback_locale) {
            Ok(template) => template.to_string(),
            Err(error) => {
                tracing::warn!(key, locale = %locale, "{}", error);
                key.to_string()
            }
        }
    }
}

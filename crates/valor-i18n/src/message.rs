//! Rendering violations as localized messages
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::bundle::Catalog;
use crate::config::MessageConfig;
use crate::error::Result;
use crate::format::FormatterRegistry;
use crate::interpolate::interpolate;
use crate::locale::Locale;
use crate::resolver::MessageResolver;
use serde::Serialize;
use std::sync::Arc;
use valor_core::{Constraint, Params, Value, Violation, ViolationSet, DEFAULT_MESSAGE_BUNDLE};

/// The locale and bundle pair a message is rendered with
///
/// Keys resolve against the primary bundle first, then the fallback bundle,
/// then the core bundle at root; see [`MessageResolver`].
#[derive(Debug, Clone)]
pub struct MessageBundle<'c> {
    catalog: &'c Catalog,
    base_name: String,
    locale: Locale,
    fallback_base_name: String,
    fallback_locale: Locale,
}

impl<'c> MessageBundle<'c> {
    /// The core bundle in `locale`
    pub fn new(catalog: &'c Catalog, locale: Locale) -> Self {
        Self {
            catalog,
            base_name: DEFAULT_MESSAGE_BUNDLE.to_string(),
            fallback_base_name: DEFAULT_MESSAGE_BUNDLE.to_string(),
            fallback_locale: locale.clone(),
            locale,
        }
    }

    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    pub fn with_fallback(mut self, base_name: impl Into<String>, locale: Locale) -> Self {
        self.fallback_base_name = base_name.into();
        self.fallback_locale = locale;
        self
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn fallback_base_name(&self) -> &str {
        &self.fallback_base_name
    }

    pub fn fallback_locale(&self) -> &Locale {
        &self.fallback_locale
    }

    pub fn resolver(&self) -> MessageResolver<'c> {
        MessageResolver::new(self.catalog)
    }

    /// Template for `key`, the key itself when nothing defines it
    pub fn resolve(&self, key: &str) -> String {
        self.resolver().resolve(
            &self.base_name,
            key,
            &self.locale,
            &self.fallback_base_name,
            &self.fallback_locale,
        )
    }

    /// Template for `key`, failing when nothing defines it
    pub fn try_resolve(&self, key: &str) -> Result<&'c str> {
        self.resolver().try_resolve(
            &self.base_name,
            key,
            &self.locale,
            &self.fallback_base_name,
            &self.fallback_locale,
        )
    }
}

/// A violation together with its rendered message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationMessage {
    pub property: String,
    pub value: Value,
    pub message: String,
    pub constraint: Constraint,
}

/// Renders violations using a catalog, a formatter registry and a configuration
///
/// ```rust
/// use valor_core::collect;
/// use valor_i18n::{Locale, Messages};
///
/// struct Employee {
///     name: String,
/// }
///
/// let violations = collect(&Employee { name: "aa".into() }, |v| {
///     v.property("name", |e| &e.name).has_size(3, 30);
/// });
///
/// let messages = Messages::builtin().unwrap();
/// let pt_br = Locale::parse("pt_BR").unwrap();
/// let rendered = messages.to_messages(&violations, None, &pt_br);
///
/// assert_eq!(rendered[0].property, "name");
/// assert_eq!(rendered[0].message, "O tamanho deve estar entre 3 e 30");
/// ```
#[derive(Debug, Clone)]
pub struct Messages {
    catalog: Arc<Catalog>,
    registry: Arc<FormatterRegistry>,
    config: MessageConfig,
}

impl Messages {
    /// Render with `catalog`, the global formatter registry and the default configuration
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            registry: FormatterRegistry::global(),
            config: MessageConfig::default(),
        }
    }

    /// Render with the built-in catalog
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(Catalog::builtin()?)))
    }

    /// Render with the built-in catalog and `config`
    pub fn from_config(config: MessageConfig) -> Result<Self> {
        Ok(Self::builtin()?.with_config(config))
    }

    pub fn with_registry(mut self, registry: Arc<FormatterRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_config(mut self, config: MessageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn registry(&self) -> &FormatterRegistry {
        &self.registry
    }

    pub fn config(&self) -> &MessageConfig {
        &self.config
    }

    /// Locale for callers that have none of their own
    pub fn default_locale(&self) -> &Locale {
        &self.config.default_locale
    }

    /// Bundle context for rendering a constraint's message
    ///
    /// The primary bundle is `base_name`, else the configured base name, else the
    /// constraint's own bundle. The constraint's bundle is always the fallback.
    pub fn bundle(&self, base_name: Option<&str>, constraint_bundle: &str, locale: &Locale) -> MessageBundle<'_> {
        let primary = base_name
            .or(self.config.base_name.as_deref())
            .unwrap_or(constraint_bundle);
        let fallback_locale = self.config.fallback_locale.clone().unwrap_or_else(|| locale.clone());

        MessageBundle::new(&self.catalog, locale.clone())
            .with_base_name(primary)
            .with_fallback(constraint_bundle, fallback_locale)
    }

    /// Format one value for `locale`
    ///
    /// Value and date-pattern keys resolve through the configured base name
    /// first, then the core bundle.
    pub fn format(&self, value: &Value, locale: &Locale) -> String {
        let bundle = self.bundle(None, DEFAULT_MESSAGE_BUNDLE, locale);
        self.registry.format(value, &bundle)
    }

    /// Resolve and interpolate the template for `key`
    pub fn render(&self, key: &str, params: &Params, bundle: &MessageBundle<'_>) -> String {
        let template = bundle.resolve(key);
        interpolate(&template, params, bundle, &self.registry)
    }

    /// Render one violation
    pub fn to_message(&self, violation: &Violation, base_name: Option<&str>, locale: &Locale) -> ViolationMessage {
        let constraint = violation.constraint();
        let bundle = self.bundle(base_name, constraint.message_bundle(), locale);
        let message = self.render(constraint.message_key(), constraint.message_params(), &bundle);

        ViolationMessage {
            property: violation.property().to_string(),
            value: violation.value().clone(),
            message,
            constraint: constraint.clone(),
        }
    }

    /// Render every violation, in order
    pub fn to_messages(&self, violations: &ViolationSet, base_name: Option<&str>, locale: &Locale) -> Vec<ViolationMessage> {
        violations
            .iter()
            .map(|violation| self.to_message(violation, base_name, locale))
            .collect()
    }
}

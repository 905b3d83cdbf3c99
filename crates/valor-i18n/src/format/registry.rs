//! Type-dispatched formatter registry
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use super::builtin::{self, DisplayFormatter};
use crate::locale::Locale;
use crate::message::MessageBundle;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use valor_core::{TypeTag, Value, ValueType};

/// Renders a value as a localized string
///
/// Implemented for every `Fn(&Value, &FormatContext<'_>) -> String` closure.
pub trait Formatter: Send + Sync {
    fn format(&self, value: &Value, context: &FormatContext<'_>) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&Value, &FormatContext<'_>) -> String + Send + Sync,
{
    fn format(&self, value: &Value, context: &FormatContext<'_>) -> String {
        self(value, context)
    }
}

/// What a formatter sees besides the value: the active bundle and the registry
///
/// Formatters for composite values format their elements through
/// [`FormatContext::format`], so element formatting follows the same registry.
#[derive(Clone, Copy)]
pub struct FormatContext<'a> {
    bundle: &'a MessageBundle<'a>,
    registry: &'a FormatterRegistry,
}

impl<'a> FormatContext<'a> {
    pub fn new(bundle: &'a MessageBundle<'a>, registry: &'a FormatterRegistry) -> Self {
        Self { bundle, registry }
    }

    pub fn bundle(&self) -> &'a MessageBundle<'a> {
        self.bundle
    }

    pub fn registry(&self) -> &'a FormatterRegistry {
        self.registry
    }

    /// Locale of the active bundle
    pub fn locale(&self) -> &'a Locale {
        self.bundle.locale()
    }

    /// Format another value with the same bundle and registry
    pub fn format(&self, value: &Value) -> String {
        self.registry.format(value, self.bundle)
    }
}

static GLOBAL: OnceLock<Arc<FormatterRegistry>> = OnceLock::new();

/// Formatters keyed by type tag
///
/// Lookup walks the value type's exact tag, then its declared supertypes in
/// order, then falls back to plain stringification, so it never fails.
/// Registration is last-write-wins per tag. Locks are released before any
/// formatter runs.
pub struct FormatterRegistry {
    formatters: RwLock<HashMap<TypeTag, Arc<dyn Formatter>>>,
    default: Arc<dyn Formatter>,
}

impl FormatterRegistry {
    /// Create a registry with the built-in formatters
    pub fn new() -> Self {
        let registry = Self::empty();
        builtin::register_builtins(&registry);
        registry
    }

    /// Create a registry with no entries; every value uses the default formatter
    pub fn empty() -> Self {
        Self {
            formatters: RwLock::new(HashMap::new()),
            default: Arc::new(DisplayFormatter),
        }
    }

    /// The process-wide registry, created with the built-in formatters on first use
    pub fn global() -> Arc<FormatterRegistry> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Register a formatter for a tag, returning the one it replaces
    pub fn register<F>(&self, tag: TypeTag, formatter: F) -> Option<Arc<dyn Formatter>>
    where
        F: Formatter + 'static,
    {
        self.register_arc(tag, Arc::new(formatter))
    }

    /// Register a shared formatter for a tag, returning the one it replaces
    pub fn register_arc(&self, tag: TypeTag, formatter: Arc<dyn Formatter>) -> Option<Arc<dyn Formatter>> {
        tracing::debug!(tag = %tag, "registering formatter");
        self.formatters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(tag, formatter)
    }

    /// Remove the formatter registered for exactly this tag
    pub fn remove(&self, tag: TypeTag) -> Option<Arc<dyn Formatter>> {
        self.formatters
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&tag)
    }

    /// Whether a formatter is registered for exactly this tag
    pub fn contains(&self, tag: TypeTag) -> bool {
        self.formatters
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&tag)
    }

    /// Nearest registered formatter for a value type
    pub fn lookup(&self, value_type: &ValueType) -> Arc<dyn Formatter> {
        let formatters = self.formatters.read().unwrap_or_else(PoisonError::into_inner);
        value_type
            .lookup_chain()
            .find_map(|tag| formatters.get(&tag).cloned())
            .unwrap_or_else(|| Arc::clone(&self.default))
    }

    /// Format a value with its nearest registered formatter
    pub fn format(&self, value: &Value, bundle: &MessageBundle<'_>) -> String {
        let formatter = self.lookup(&value.value_type());
        formatter.format(value, &FormatContext::new(bundle, self))
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatters = self.formatters.read().unwrap_or_else(PoisonError::into_inner);
        let mut tags: Vec<&str> = formatters.keys().map(TypeTag::name).collect();
        tags.sort_unstable();
        f.debug_struct("FormatterRegistry").field("tags", &tags).finish()
    }
}

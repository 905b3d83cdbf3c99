//! Error types for message bundles, resolution and configuration
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Errors raised while loading bundles, parsing locales or reading configuration
///
/// Resolution and formatting never fail on their default paths; only the
/// explicit `try_*` variants surface [`I18nError::MessageNotFound`].
#[derive(Error, Debug)]
pub enum I18nError {
    /// A bundle line could not be parsed
    #[error("Malformed bundle '{base_name}' for locale '{locale}' at line {line}: {reason}")]
    MalformedBundle {
        base_name: String,
        locale: String,
        line: usize,
        reason: String,
    },

    /// No bundle in the fallback chain defines the key
    #[error("Message '{key}' not found, searched: {searched}")]
    MessageNotFound { key: String, searched: String },

    /// A locale identifier that is not `language[_COUNTRY[_variant]]`
    #[error("Invalid locale '{input}'")]
    InvalidLocale { input: String },

    /// Configuration text could not be deserialized
    #[error("Invalid configuration: {message}")]
    Config {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl I18nError {
    /// Create a malformed bundle error
    pub fn malformed_bundle(base_name: &str, locale: &str, line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedBundle {
            base_name: base_name.to_string(),
            locale: locale.to_string(),
            line,
            reason: reason.into(),
        }
    }

    /// Create a resolution miss carrying every `(bundle, locale)` pair searched
    pub fn message_not_found<I, S>(key: &str, searched: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let searched = searched
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        Self::MessageNotFound {
            key: key.to_string(),
            searched,
        }
    }

    /// Create an invalid locale error
    pub fn invalid_locale(input: &str) -> Self {
        Self::InvalidLocale {
            input: input.to_string(),
        }
    }

    /// Create a configuration error wrapping the deserializer's error
    pub fn config<E>(format: &str, error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Config {
            message: format!("failed to parse {}: {}", format, error),
            source: Box::new(error),
        }
    }
}

impl From<serde_yaml::Error> for I18nError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::config("YAML", error)
    }
}

impl From<toml::de::Error> for I18nError {
    fn from(error: toml::de::Error) -> Self {
        Self::config("TOML", error)
    }
}

impl From<serde_json::Error> for I18nError {
    fn from(error: serde_json::Error) -> Self {
        Self::config("JSON", error)
    }
}

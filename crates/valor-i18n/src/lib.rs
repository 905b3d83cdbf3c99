//! Valor i18n - localized messages for validation violations
//!
//! This crate turns the violations produced by `valor-core` into human messages:
//! - **Bundles**: properties-format templates per base name and locale, held in a [`Catalog`]
//! - **Resolution**: most specific locale first, then the fallback bundle, then the core bundle
//! - **Formatting**: a type-dispatched [`FormatterRegistry`] renders parameter values per locale
//! - **Interpolation**: `{name}` placeholders are replaced with formatted parameters
//!
//! ## Quick Start
//!
//! ```rust
//! use valor_core::validate;
//! use valor_i18n::{Locale, Messages};
//!
//! #[derive(Debug)]
//! struct Employee {
//!     salary: f64,
//! }
//!
//! let error = validate(Employee { salary: 9999.999 }, |v| {
//!     v.property("salary", |e| e.salary).has_max_decimal_digits(2);
//! })
//! .unwrap_err();
//!
//! let messages = Messages::builtin().unwrap();
//! let de = Locale::parse("de").unwrap();
//! let rendered = messages.to_messages(error.violations(), None, &de);
//!
//! assert_eq!(rendered[0].message, "Darf höchstens 2 Nachkommastellen haben");
//! assert_eq!(messages.format(&rendered[0].value, &de), "9.999,999");
//! ```
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

pub mod bundle;
pub mod config;
pub mod error;
pub mod format;
pub mod interpolate;
pub mod locale;
pub mod message;
pub mod resolver;

// Re-export commonly used types for convenience
pub use bundle::{Catalog, PropertiesParser, ResourceBundle};
pub use config::MessageConfig;
pub use error::{I18nError, Result};
pub use format::{FormatContext, Formatter, FormatterRegistry, NumberFormat, NumberSymbols};
pub use interpolate::interpolate;
pub use locale::Locale;
pub use message::{MessageBundle, Messages, ViolationMessage};
pub use resolver::MessageResolver;

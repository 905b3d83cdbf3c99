//! Value formatting for message parameters
//!
//! Formatters are looked up by the value's [`TypeTag`](valor_core::TypeTag):
//! the exact tag first, then its declared supertypes, then plain
//! stringification. Host applications override or extend the built-ins by
//! registering their own formatter for a tag:
//!
//! ```rust
//! use valor_core::{tags, Value};
//! use valor_i18n::{FormatContext, FormatterRegistry};
//!
//! let registry = FormatterRegistry::new();
//! registry.register(tags::STRING, |value: &Value, _: &FormatContext<'_>| format!("'{}'", value));
//! assert!(registry.contains(tags::STRING));
//! ```
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

pub mod builtin;
pub mod number;
pub mod registry;


pub use builtin::{BoolFormatter, DisplayFormatter, ListFormatter, TemporalFormatter};
pub use number::{NumberFormat, NumberSymbols};
pub use registry::{FormatContext, Formatter, FormatterRegistry};

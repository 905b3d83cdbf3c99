//! Valor Core - declarative object validation
//!
//! This crate evaluates a tree of named constraints against the properties of an
//! in-memory object graph and accumulates every violation it finds:
//! - **Property rules**: each `property(name, accessor)` call binds a value to a path
//! - **Nested objects**: `validate_nested` descends with `.name` appended to the path
//! - **Collections**: `validate_each` fans out per element with `[index]` appended
//! - **No fail-fast**: every declared rule runs, violations are collected in order
//!
//! ## Quick Start
//!
//! ```rust
//! use valor_core::validate;
//!
//! #[derive(Debug)]
//! struct Employee {
//!     id: i64,
//!     name: String,
//! }
//!
//! let employee = Employee { id: -1, name: "aa".to_string() };
//!
//! let error = validate(employee, |v| {
//!     v.property("id", |e| e.id).is_positive();
//!     v.property("name", |e| &e.name).is_not_blank().has_size(3, 30);
//! })
//! .unwrap_err();
//!
//! let paths: Vec<&str> = error.violations().iter().map(|v| v.property()).collect();
//! assert_eq!(paths, ["id", "name"]);
//! ```
//!
//! Rendering violations as localized messages lives in the `valor-i18n` crate.
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

pub mod constraint;
pub mod constraints;
pub mod error;
pub mod numeric;
pub mod validation;
pub mod value;
pub mod violation;

// Re-export commonly used types for convenience
pub use constraint::{Constraint, ConstraintKind, Params, DEFAULT_KEY_PREFIX, DEFAULT_MESSAGE_BUNDLE};
pub use error::ConstraintViolationError;
pub use numeric::{DecimalParts, HasSize, Numeric};
pub use validation::{collect, collect_with_context, validate, Property, ValidationContext, Validator};
pub use value::{tags, CustomValue, ToValue, TypeTag, Value, ValueType};
pub use violation::{Violation, ViolationSet};

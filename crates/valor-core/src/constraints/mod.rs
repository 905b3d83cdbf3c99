//! Built-in constraint kinds and the property methods that apply them
//!
//! Constraint methods are grouped by what they require of the property value:
//!
//! - [`any`]: every value (`is_not_null`, `is_equal_to`, `is_in`, `is_valid`, ...)
//! - [`comparison`]: ordered values (`is_greater_than`, `is_between`, ...)
//! - [`text`]: string-like values (`is_not_blank`, `matches`, `is_email`, ...)
//! - [`size`]: text and collections (`is_empty`, `has_size`, ...)
//! - [`number`]: numeric values (`is_positive`, `has_decimal_digits`, ...)
//!
//! Null policy: `NotNull` fails on absent values and `Null` fails on present
//! ones. Every other built-in passes on absent values and leaves presence to
//! `NotNull`, so constraints combine without implicit null guards.
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

/// Constraint kinds with no parameters
macro_rules! unit_constraints {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name;

            impl $crate::constraint::ConstraintKind for $name {
                fn name(&self) -> &str {
                    stringify!($name)
                }
            }
        )+
    };
}

/// Constraint kinds whose parameters are values, named after their fields
macro_rules! value_constraints {
    ($($(#[$meta:meta])* $name:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq)]
            pub struct $name {
                $(pub $field: $crate::value::Value,)+
            }

            impl $crate::constraint::ConstraintKind for $name {
                fn name(&self) -> &str {
                    stringify!($name)
                }

                fn message_params(&self) -> $crate::constraint::Params {
                    let mut params = $crate::constraint::Params::new();
                    $(params.insert(stringify!($field).to_string(), self.$field.clone());)+
                    params
                }
            }
        )+
    };
}

/// Constraint kinds bounded by an optional minimum and maximum count
///
/// The message key gains a `.min` or `.max` suffix when only one bound is set.
macro_rules! bounds_constraints {
    ($($(#[$meta:meta])* $name:ident),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $name {
                pub min: Option<usize>,
                pub max: Option<usize>,
            }

            impl $name {
                pub fn new(min: Option<usize>, max: Option<usize>) -> Self {
                    Self { min, max }
                }

                /// Whether `count` lies within the bounds, inclusive
                pub fn admits(&self, count: usize) -> bool {
                    self.min.map_or(true, |min| count >= min) && self.max.map_or(true, |max| count <= max)
                }
            }

            impl $crate::constraint::ConstraintKind for $name {
                fn name(&self) -> &str {
                    stringify!($name)
                }

                fn message_key(&self) -> String {
                    let base = format!("{}.{}", $crate::constraint::DEFAULT_KEY_PREFIX, stringify!($name));
                    match (self.min, self.max) {
                        (Some(_), None) => format!("{}.min", base),
                        (None, Some(_)) => format!("{}.max", base),
                        _ => base,
                    }
                }

                fn message_params(&self) -> $crate::constraint::Params {
                    let mut params = $crate::constraint::Params::new();
                    if let Some(min) = self.min {
                        params.insert("min".to_string(), $crate::value::Value::from(min));
                    }
                    if let Some(max) = self.max {
                        params.insert("max".to_string(), $crate::value::Value::from(max));
                    }
                    params
                }
            }
        )+
    };
}

pub mod any;
pub mod comparison;
pub mod number;
pub mod size;
pub mod text;

pub use any::{Equals, In, NotEquals, NotIn, NotNull, Null, Valid};
pub use comparison::{Between, Greater, GreaterOrEqual, Less, LessOrEqual, NotBetween};
pub use number::{
    DecimalDigits, IntegerDigits, Multiple, Negative, NegativeOrZero, NotOne, NotZero, One, Positive,
    PositiveOrZero, Zero,
};
pub use size::{Empty, NotEmpty, Size};
pub use text::{
    Blank, Contains, ContainsAll, ContainsAny, Digits, Email, EndsWith, EqualsIgnoringCase, Letters, Matches,
    NotBlank, NotContain, NotMatch, StartsWith, Website,
};

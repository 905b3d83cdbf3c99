//! Constraint descriptors
//!
//! A [`Constraint`] is the immutable record of a rule: its name, the message bundle
//! and key used to render it, and the parameters needed both to re-run the check
//! and to interpolate its message. Rule kinds implement [`ConstraintKind`]; the engine
//! only ever looks at the descriptor they produce.
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::value::Value;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Bundle holding the messages of the built-in constraints
pub const DEFAULT_MESSAGE_BUNDLE: &str = "valor/messages";

/// Key namespace of the built-in constraint messages
pub const DEFAULT_KEY_PREFIX: &str = "valor.constraints";

/// Message parameters, keyed by placeholder name
pub type Params = BTreeMap<String, Value>;

/// Immutable description of a constraint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constraint {
    name: String,
    message_bundle: String,
    message_key: String,
    message_params: Params,
}

impl Constraint {
    /// Create a descriptor in the default bundle, keyed `valor.constraints.<name>`
    pub fn new<N: Into<String>>(name: N) -> Self {
        let name = name.into();
        Self {
            message_key: format!("{}.{}", DEFAULT_KEY_PREFIX, name),
            message_bundle: DEFAULT_MESSAGE_BUNDLE.to_string(),
            message_params: Params::new(),
            name,
        }
    }

    pub fn with_bundle<B: Into<String>>(mut self, bundle: B) -> Self {
        self.message_bundle = bundle.into();
        self
    }

    pub fn with_key<K: Into<String>>(mut self, key: K) -> Self {
        self.message_key = key.into();
        self
    }

    pub fn with_param<K: Into<String>, V: Into<Value>>(mut self, name: K, value: V) -> Self {
        self.message_params.insert(name.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message_bundle(&self) -> &str {
        &self.message_bundle
    }

    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub fn message_params(&self) -> &Params {
        &self.message_params
    }

    pub fn param(&self, name: &str) -> Option<&Value> {
        self.message_params.get(name)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.message_params.is_empty() {
            f.write_str("(")?;
            for (i, (name, value)) in self.message_params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}={}", name, value)?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// A kind of rule that can describe itself as a [`Constraint`]
///
/// Only [`name`](ConstraintKind::name) is required; bundle, key and parameters
/// have defaults matching the built-in constraints.
///
/// ```rust
/// use valor_core::{ConstraintKind, Params, Value};
///
/// struct Even;
///
/// impl ConstraintKind for Even {
///     fn name(&self) -> &str {
///         "Even"
///     }
///
///     fn message_bundle(&self) -> &str {
///         "shop/messages"
///     }
/// }
///
/// let constraint = Even.to_constraint();
/// assert_eq!(constraint.message_key(), "valor.constraints.Even");
/// assert_eq!(constraint.message_bundle(), "shop/messages");
/// ```
pub trait ConstraintKind {
    fn name(&self) -> &str;

    fn message_bundle(&self) -> &str {
        DEFAULT_MESSAGE_BUNDLE
    }

    fn message_key(&self) -> String {
        format!("{}.{}", DEFAULT_KEY_PREFIX, self.name())
    }

    fn message_params(&self) -> Params {
        Params::new()
    }

    fn to_constraint(&self) -> Constraint {
        Constraint {
            name: self.name().to_owned(),
            message_bundle: self.message_bundle().to_owned(),
            message_key: self.message_key(),
            message_params: self.message_params(),
        }
    }
}

impl ConstraintKind for Constraint {
    fn name(&self) -> &str {
        &self.name
    }

    fn message_bundle(&self) -> &str {
        &self.message_bundle
    }

    fn message_key(&self) -> String {
        self.message_key.clone()
    }

    fn message_params(&self) -> Params {
        self.message_params.clone()
    }

    fn to_constraint(&self) -> Constraint {
        self.clone()
    }
}

impl<C: ConstraintKind + ?Sized> ConstraintKind for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn message_bundle(&self) -> &str {
        (**self).message_bundle()
    }

    fn message_key(&self) -> String {
        (**self).message_key()
    }

    fn message_params(&self) -> Params {
        (**self).message_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_defaults() {
        let constraint = Constraint::new("NotBlank");
        assert_eq!(constraint.name(), "NotBlank");
        assert_eq!(constraint.message_bundle(), DEFAULT_MESSAGE_BUNDLE);
        assert_eq!(constraint.message_key(), "valor.constraints.NotBlank");
        assert!(constraint.message_params().is_empty());
    }

    #[test]
    fn test_constraint_equality_is_structural() {
        let a = Constraint::new("Between").with_param("start", 1).with_param("end", 9);
        let b = Constraint::new("Between").with_param("end", 9).with_param("start", 1);
        assert_eq!(a, b);
        assert_ne!(a, Constraint::new("Between").with_param("start", 1));
    }

    #[test]
    fn test_constraint_display() {
        let constraint = Constraint::new("Size").with_param("max", 30usize).with_param("min", 3usize);
        assert_eq!(constraint.to_string(), "Size(max=30, min=3)");
    }

    #[test]
    fn test_descriptor_round_trips_through_kind() {
        let constraint = Constraint::new("Matches")
            .with_bundle("app/messages")
            .with_key("app.Matches")
            .with_param("regex", "^a+$");
        assert_eq!(constraint.to_constraint(), constraint);
    }
}

//! Property handles and constraint application
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use super::context::ValidationContext;
use super::validator::Validator;
use crate::constraint::ConstraintKind;
use crate::value::{ToValue, Value};
use crate::violation::{Violation, ViolationSet};

/// A property bound to its path, its current value and the violation sink
///
/// Every constraint method consumes and returns the property, so rules chain:
///
/// ```rust
/// use valor_core::collect;
///
/// struct Login {
///     user: String,
/// }
///
/// let violations = collect(&Login { user: " ".into() }, |v| {
///     v.property("user", |l| &l.user).is_not_blank().has_size(3, 16);
/// });
///
/// let names: Vec<&str> = violations.iter().map(|v| v.constraint().name()).collect();
/// assert_eq!(names, ["NotBlank", "Size"]);
/// ```
pub struct Property<'a, V> {
    context: ValidationContext,
    value: Option<V>,
    violations: &'a mut ViolationSet,
}

impl<'a, V> Property<'a, V> {
    pub(crate) fn new(context: ValidationContext, value: Option<V>, violations: &'a mut ViolationSet) -> Self {
        Self {
            context,
            value,
            violations,
        }
    }

    /// Full path of this property
    pub fn path(&self) -> &str {
        self.context.path()
    }

    /// Current value, `None` when the property is absent
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub(crate) fn record<C: ConstraintKind>(&mut self, constraint: &C, value: Value) {
        tracing::trace!(
            property = %self.context,
            constraint = constraint.name(),
            "constraint violated"
        );
        self.violations
            .push(Violation::new(self.context.path(), value, constraint.to_constraint()));
    }

    /// Apply a constraint whose predicate never needs the value recorded
    ///
    /// Used by `NotNull`, which only fails on absent values, so it also works on
    /// properties whose type has no [`Value`] form (nested objects).
    pub(crate) fn check_presence<C: ConstraintKind>(mut self, constraint: C) -> Self {
        if self.value.is_none() {
            self.record(&constraint, Value::Null);
        }
        self
    }
}

impl<'a, V: ToValue> Property<'a, V> {
    /// Apply a constraint
    ///
    /// The predicate receives the current value, or `None` when the property is
    /// absent, and decides itself whether absence passes. A `false` result
    /// records exactly one violation; the chain always continues.
    pub fn validate<C, P>(self, constraint: C, predicate: P) -> Self
    where
        C: ConstraintKind,
        P: FnOnce(Option<&V>) -> bool,
    {
        self.validate_with(constraint, predicate, ToValue::to_value)
    }

    /// Apply a constraint that passes on absent values
    pub(crate) fn validate_present<C, P>(self, constraint: C, predicate: P) -> Self
    where
        C: ConstraintKind,
        P: FnOnce(&V) -> bool,
    {
        self.validate(constraint, |value| value.map_or(true, predicate))
    }
}

impl<'a, V> Property<'a, V> {
    /// Apply a constraint to a value with no [`Value`] form of its own
    ///
    /// Same contract as [`validate`](Self::validate); `capture` decides what a
    /// violation records for a present value (a nested object's size, an id, ...).
    ///
    /// ```rust
    /// use valor_core::{collect, Constraint, Value};
    ///
    /// struct Team {
    ///     lead: Member,
    /// }
    ///
    /// struct Member {
    ///     id: u32,
    ///     active: bool,
    /// }
    ///
    /// let team = Team { lead: Member { id: 7, active: false } };
    /// let violations = collect(&team, |v| {
    ///     v.property("lead", |t| &t.lead).validate_with(
    ///         Constraint::new("ActiveLead"),
    ///         |lead| lead.map_or(true, |m| m.active),
    ///         |m| Value::from(m.id),
    ///     );
    /// });
    ///
    /// assert_eq!(violations.as_slice()[0].value(), &Value::UInt(7));
    /// ```
    pub fn validate_with<C, P, R>(mut self, constraint: C, predicate: P, capture: R) -> Self
    where
        C: ConstraintKind,
        P: FnOnce(Option<&V>) -> bool,
        R: FnOnce(&V) -> Value,
    {
        if !predicate(self.value.as_ref()) {
            let value = self.value.as_ref().map_or(Value::Null, capture);
            self.record(&constraint, value);
        }
        self
    }

    pub(crate) fn validate_present_with<C, P, R>(self, constraint: C, predicate: P, capture: R) -> Self
    where
        C: ConstraintKind,
        P: FnOnce(&V) -> bool,
        R: FnOnce(&V) -> Value,
    {
        self.validate_with(constraint, |value| value.map_or(true, predicate), capture)
    }
}

impl<'a, 't, X: ?Sized> Property<'a, &'t X> {
    /// Run a rule block against the nested object
    ///
    /// Paths inside the block are prefixed with this property's path. Absent
    /// values skip the block.
    pub fn validate_nested<F>(mut self, rules: F) -> Self
    where
        X: Sized,
        F: FnOnce(&mut Validator<'_, X>),
    {
        if let Some(object) = self.value {
            let mut validator = Validator::new(object, self.context.clone(), &mut *self.violations);
            rules(&mut validator);
        }
        self
    }

    /// Run a rule block against every element, in iteration order
    ///
    /// Element paths are `<path>[<index>]`, zero-based. Violations from every
    /// element are kept.
    pub fn validate_each<E, F>(mut self, mut rules: F) -> Self
    where
        &'t X: IntoIterator<Item = &'t E>,
        E: 't,
        F: FnMut(&mut Validator<'_, E>),
    {
        if let Some(items) = self.value {
            for (index, item) in items.into_iter().enumerate() {
                let mut validator =
                    Validator::new(item, self.context.child_index(index), &mut *self.violations);
                rules(&mut validator);
            }
        }
        self
    }
}

//! Rule-block executor for one object
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use super::context::ValidationContext;
use super::property::Property;
use crate::violation::ViolationSet;

/// Executes the property rules declared for one object
///
/// A `Validator` is handed to every rule block: the root block passed to
/// [`validate`](super::validate), and every nested or per-element block. It binds
/// the object under validation, the current path, and the traversal's violation
/// sink.
pub struct Validator<'a, T> {
    object: &'a T,
    context: ValidationContext,
    violations: &'a mut ViolationSet,
}

impl<'a, T> Validator<'a, T> {
    pub(crate) fn new(object: &'a T, context: ValidationContext, violations: &'a mut ViolationSet) -> Self {
        Self {
            object,
            context,
            violations,
        }
    }

    /// The object whose properties are being validated
    pub fn object(&self) -> &'a T {
        self.object
    }

    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    /// Violations recorded so far in this traversal
    pub fn violations(&self) -> &ViolationSet {
        &*self.violations
    }

    /// Declare a rule on a property that is always present
    pub fn property<V, F>(&mut self, name: &str, accessor: F) -> Property<'_, V>
    where
        F: FnOnce(&'a T) -> V,
    {
        let value = accessor(self.object);
        Property::new(self.context.child(name), Some(value), &mut *self.violations)
    }

    /// Declare a rule on a property that may be absent
    pub fn optional_property<V, F>(&mut self, name: &str, accessor: F) -> Property<'_, V>
    where
        F: FnOnce(&'a T) -> Option<V>,
    {
        let value = accessor(self.object);
        Property::new(self.context.child(name), value, &mut *self.violations)
    }

    /// Rules on the object itself, at the current path
    ///
    /// Useful inside [`Property::validate_each`] over scalar elements, where the
    /// element has no property name of its own.
    pub fn current(&mut self) -> Property<'_, &'a T> {
        Property::new(self.context.clone(), Some(self.object), &mut *self.violations)
    }
}

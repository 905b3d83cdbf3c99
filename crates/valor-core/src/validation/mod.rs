//! Validation traversal
//!
//! A traversal runs one rule block against a root object. Rule blocks declare
//! property rules in order; nested and per-element blocks extend the property
//! path. Every rule runs, and every failed constraint is recorded:
//!
//! - **Leaf properties**: constraints apply in declared order, no short-circuit
//! - **Nested objects**: `validate_nested` appends `.name`, absent values are skipped
//! - **Collections**: `validate_each` appends `[index]` per element
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

pub mod context;
pub mod property;
pub mod validator;

#[cfg(test)]
mod tests;

pub use context::ValidationContext;
pub use property::Property;
pub use validator::Validator;

use crate::error::ConstraintViolationError;
use crate::violation::ViolationSet;

/// Validate an object, returning it unchanged when every rule passes
///
/// # Examples
///
/// ```rust
/// use valor_core::validate;
///
/// #[derive(Debug)]
/// struct Dependent {
///     name: String,
/// }
///
/// #[derive(Debug)]
/// struct Employee {
///     dependents: Vec<Dependent>,
/// }
///
/// let employee = Employee {
///     dependents: vec![
///         Dependent { name: "".into() },
///         Dependent { name: " ".into() },
///     ],
/// };
///
/// let error = validate(employee, |v| {
///     v.property("dependents", |e| &e.dependents).validate_each(|d| {
///         d.property("name", |d| &d.name).is_not_blank();
///     });
/// })
/// .unwrap_err();
///
/// let paths: Vec<&str> = error.violations().iter().map(|v| v.property()).collect();
/// assert_eq!(paths, ["dependents[0].name", "dependents[1].name"]);
/// ```
pub fn validate<T, F>(object: T, rules: F) -> Result<T, ConstraintViolationError>
where
    F: FnOnce(&mut Validator<'_, T>),
{
    let violations = collect(&object, rules);
    ConstraintViolationError::check(violations)?;
    Ok(object)
}

/// Run a rule block and return the violations without raising
pub fn collect<T, F>(object: &T, rules: F) -> ViolationSet
where
    F: FnOnce(&mut Validator<'_, T>),
{
    collect_with_context(object, ValidationContext::new(), rules)
}

/// Run a rule block under an existing path prefix
pub fn collect_with_context<T, F>(object: &T, context: ValidationContext, rules: F) -> ViolationSet
where
    F: FnOnce(&mut Validator<'_, T>),
{
    tracing::debug!(root = %context, "validation started");

    let mut violations = ViolationSet::new();
    let mut validator = Validator::new(object, context, &mut violations);
    rules(&mut validator);

    tracing::debug!(violations = violations.len(), "validation finished");
    violations
}

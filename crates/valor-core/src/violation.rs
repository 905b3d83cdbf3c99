//! Violation records and the ordered set collected by one traversal
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::constraint::Constraint;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// One failed constraint applied to one property value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Full property path (`company.address.city`, `dependents[2].name`)
    property: String,
    /// The offending value, `Null` when the property was absent
    value: Value,
    /// The constraint that failed
    constraint: Constraint,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Property '{}' violated {}: found {}",
            self.property, self.constraint, self.value
        )
    }
}

impl Violation {
    /// Create a violation record
    pub fn new<P: Into<String>>(property: P, value: Value, constraint: Constraint) -> Self {
        Self {
            property: property.into(),
            value,
            constraint,
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }
}

/// Violations in rule-declaration order
///
/// The set never reorders or deduplicates; two failures of the same constraint
/// on the same path are two entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ViolationSet {
    violations: Vec<Violation>,
}

impl ViolationSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.violations
    }

    /// Violations recorded for one property path
    pub fn for_property<'s>(&'s self, property: &'s str) -> impl Iterator<Item = &'s Violation> + 's {
        self.violations.iter().filter(move |v| v.property == property)
    }

    /// Serialize the set as a JSON array
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<Vec<Violation>> for ViolationSet {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl IntoIterator for ViolationSet {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'s> IntoIterator for &'s ViolationSet {
    type Item = &'s Violation;
    type IntoIter = std::slice::Iter<'s, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

//! Aggregate validation failure
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::violation::{Violation, ViolationSet};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Raised once per traversal when at least one constraint failed
///
/// Carries every violation found, in rule-declaration order.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub struct ConstraintViolationError {
    violations: ViolationSet,
}

impl fmt::Display for ConstraintViolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed with {} violation(s):", self.violations.len())?;
        for (i, violation) in self.violations.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl ConstraintViolationError {
    /// Wrap a set of violations
    pub fn new(violations: ViolationSet) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &ViolationSet {
        &self.violations
    }

    pub fn into_violations(self) -> ViolationSet {
        self.violations
    }

    /// Ok if the set is empty, the aggregate error otherwise
    pub fn check(violations: ViolationSet) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self::new(violations))
        }
    }
}

impl From<ViolationSet> for ConstraintViolationError {
    fn from(violations: ViolationSet) -> Self {
        Self::new(violations)
    }
}

impl From<Vec<Violation>> for ConstraintViolationError {
    fn from(violations: Vec<Violation>) -> Self {
        Self::new(ViolationSet::from(violations))
    }
}

impl<'e> IntoIterator for &'e ConstraintViolationError {
    type Item = &'e Violation;
    type IntoIter = std::slice::Iter<'e, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constraint, Value};

    #[test]
    fn test_check_empty_set() {
        assert!(ConstraintViolationError::check(ViolationSet::new()).is_ok());
    }

    #[test]
    fn test_display_lists_each_violation() {
        let error = ConstraintViolationError::from(vec![
            Violation::new("id", Value::from(-1), Constraint::new("Positive")),
            Violation::new("email", Value::from("aaa"), Constraint::new("Email")),
        ]);
        let text = error.to_string();
        assert!(text.starts_with("Validation failed with 2 violation(s):"));
        assert!(text.contains("1. Property 'id' violated Positive: found -1"));
        assert!(text.contains("2. Property 'email' violated Email: found aaa"));
    }
}

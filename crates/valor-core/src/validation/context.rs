//! Property path tracking
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use std::fmt;

/// Path of the value currently being validated
///
/// The root has an empty path; property segments are joined with `.` and
/// collection elements are addressed with `[index]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationContext {
    path: String,
}

impl ValidationContext {
    /// Create a root context
    pub fn new() -> Self {
        Self::default()
    }

    /// Start under an existing path prefix
    pub fn with_root<P: Into<String>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Create a child context for a named property
    pub fn child<S: AsRef<str>>(&self, segment: S) -> Self {
        let path = if self.path.is_empty() {
            segment.as_ref().to_string()
        } else {
            format!("{}.{}", self.path, segment.as_ref())
        };
        Self { path }
    }

    /// Create a child context for a collection element
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_context_child() {
        let context = ValidationContext::new();
        let child = context.child("company");
        assert_eq!(child.path(), "company");

        let grandchild = child.child("address").child("city");
        assert_eq!(grandchild.path(), "company.address.city");
    }

    #[test]
    fn test_validation_context_child_index() {
        let context = ValidationContext::new().child("dependents");
        let indexed = context.child_index(2).child("name");
        assert_eq!(indexed.path(), "dependents[2].name");
    }

    #[test]
    fn test_validation_context_with_root() {
        let context = ValidationContext::with_root("batch[3]");
        assert!(!context.is_root());
        assert_eq!(context.child("id").path(), "batch[3].id");
    }
}

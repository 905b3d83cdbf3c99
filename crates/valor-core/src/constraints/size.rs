//! Size constraints shared by text and collections
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::numeric::HasSize;
use crate::validation::Property;

unit_constraints! {
    /// Size must be zero
    Empty,
    /// Size must be greater than zero
    NotEmpty,
}

bounds_constraints! {
    /// Size within optional bounds, inclusive
    Size,
}

/// Violations record [`HasSize::size_value`], so collections of nested
/// objects take size rules before `validate_each`.
impl<'a, V: HasSize> Property<'a, V> {
    pub fn is_empty(self) -> Self {
        self.validate_present_with(Empty, |value| value.size() == 0, HasSize::size_value)
    }

    /// Passes on absent values; combine with `is_not_null` to require presence
    pub fn is_not_empty(self) -> Self {
        self.validate_present_with(NotEmpty, |value| value.size() > 0, HasSize::size_value)
    }

    pub fn has_size(self, min: usize, max: usize) -> Self {
        self.check_size(Size::new(Some(min), Some(max)))
    }

    pub fn has_min_size(self, min: usize) -> Self {
        self.check_size(Size::new(Some(min), None))
    }

    pub fn has_max_size(self, max: usize) -> Self {
        self.check_size(Size::new(None, Some(max)))
    }

    fn check_size(self, constraint: Size) -> Self {
        self.validate_present_with(constraint, |value| constraint.admits(value.size()), HasSize::size_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintKind;
    use crate::value::Value;

    #[test]
    fn test_size_message_key_follows_bounds() {
        assert_eq!(Size::new(Some(3), Some(30)).message_key(), "valor.constraints.Size");
        assert_eq!(Size::new(Some(3), None).message_key(), "valor.constraints.Size.min");
        assert_eq!(Size::new(None, Some(30)).message_key(), "valor.constraints.Size.max");
    }

    #[test]
    fn test_size_params_omit_missing_bounds() {
        let params = Size::new(None, Some(30)).message_params();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("max"), Some(&Value::UInt(30)));
    }

    #[test]
    fn test_size_admits_inclusive_bounds() {
        let size = Size::new(Some(3), Some(5));
        assert!(!size.admits(2));
        assert!(size.admits(3));
        assert!(size.admits(5));
        assert!(!size.admits(6));
    }
}

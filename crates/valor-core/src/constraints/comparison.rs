//! Constraints for ordered values
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::validation::Property;
use crate::value::ToValue;

value_constraints! {
    /// Strictly greater than `value`
    Greater { value },
    GreaterOrEqual { value },
    /// Strictly less than `value`
    Less { value },
    LessOrEqual { value },
    /// Within `start..=end`
    Between { start, end },
    /// Outside `start..=end`
    NotBetween { start, end },
}

impl<'a, V: ToValue> Property<'a, V> {
    pub fn is_greater_than<U>(self, bound: U) -> Self
    where
        V: PartialOrd<U>,
        U: ToValue,
    {
        let constraint = Greater {
            value: bound.to_value(),
        };
        self.validate_present(constraint, |value| *value > bound)
    }

    pub fn is_greater_than_or_equal_to<U>(self, bound: U) -> Self
    where
        V: PartialOrd<U>,
        U: ToValue,
    {
        let constraint = GreaterOrEqual {
            value: bound.to_value(),
        };
        self.validate_present(constraint, |value| *value >= bound)
    }

    pub fn is_less_than<U>(self, bound: U) -> Self
    where
        V: PartialOrd<U>,
        U: ToValue,
    {
        let constraint = Less {
            value: bound.to_value(),
        };
        self.validate_present(constraint, |value| *value < bound)
    }

    pub fn is_less_than_or_equal_to<U>(self, bound: U) -> Self
    where
        V: PartialOrd<U>,
        U: ToValue,
    {
        let constraint = LessOrEqual {
            value: bound.to_value(),
        };
        self.validate_present(constraint, |value| *value <= bound)
    }

    /// Inclusive on both ends
    pub fn is_between<U>(self, start: U, end: U) -> Self
    where
        V: PartialOrd<U>,
        U: ToValue,
    {
        let constraint = Between {
            start: start.to_value(),
            end: end.to_value(),
        };
        self.validate_present(constraint, |value| *value >= start && *value <= end)
    }

    pub fn is_not_between<U>(self, start: U, end: U) -> Self
    where
        V: PartialOrd<U>,
        U: ToValue,
    {
        let constraint = NotBetween {
            start: start.to_value(),
            end: end.to_value(),
        };
        self.validate_present(constraint, |value| !(*value >= start && *value <= end))
    }
}

//! Constraints for numeric values
//!
//! Values are compared through their exact decimal view. Values without one
//! (NaN, infinities) fail every numeric constraint.
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::numeric::{DecimalParts, Numeric};
use crate::validation::Property;
use crate::value::ToValue;
use bigdecimal::BigDecimal;
use std::cmp::Ordering;

unit_constraints! {
    Zero,
    NotZero,
    One,
    NotOne,
    /// Strictly greater than zero
    Positive,
    PositiveOrZero,
    /// Strictly less than zero
    Negative,
    NegativeOrZero,
}

value_constraints! {
    /// An exact multiple of `value`
    Multiple { value },
}

bounds_constraints! {
    /// Significant digits before the decimal point
    IntegerDigits,
    /// Digits after the decimal point, ignoring trailing zeros
    DecimalDigits,
}

fn sign_of<V: Numeric>(value: &V) -> Option<Ordering> {
    value.to_decimal().map(|d| d.cmp(&BigDecimal::from(0)))
}

fn parts_of<V: Numeric>(value: &V) -> Option<DecimalParts> {
    value.to_decimal().map(|d| DecimalParts::from_decimal(&d))
}

impl<'a, V: Numeric + ToValue> Property<'a, V> {
    pub fn is_zero(self) -> Self {
        self.validate_present(Zero, |value| sign_of(value) == Some(Ordering::Equal))
    }

    pub fn is_not_zero(self) -> Self {
        self.validate_present(NotZero, |value| {
            matches!(sign_of(value), Some(Ordering::Less | Ordering::Greater))
        })
    }

    pub fn is_one(self) -> Self {
        self.validate_present(One, |value| value.to_decimal() == Some(BigDecimal::from(1)))
    }

    pub fn is_not_one(self) -> Self {
        self.validate_present(NotOne, |value| {
            value.to_decimal().map_or(false, |d| d != BigDecimal::from(1))
        })
    }

    pub fn is_positive(self) -> Self {
        self.validate_present(Positive, |value| sign_of(value) == Some(Ordering::Greater))
    }

    pub fn is_positive_or_zero(self) -> Self {
        self.validate_present(PositiveOrZero, |value| {
            matches!(sign_of(value), Some(Ordering::Greater | Ordering::Equal))
        })
    }

    pub fn is_negative(self) -> Self {
        self.validate_present(Negative, |value| sign_of(value) == Some(Ordering::Less))
    }

    pub fn is_negative_or_zero(self) -> Self {
        self.validate_present(NegativeOrZero, |value| {
            matches!(sign_of(value), Some(Ordering::Less | Ordering::Equal))
        })
    }

    /// A zero divisor never admits a value
    pub fn is_multiple_of<U: Numeric + ToValue>(self, divisor: U) -> Self {
        let constraint = Multiple {
            value: divisor.to_value(),
        };
        let divisor = divisor.to_decimal().filter(|d| *d != BigDecimal::from(0));
        self.validate_present(constraint, |value| match (value.to_decimal(), divisor) {
            (Some(d), Some(divisor)) => d % divisor == BigDecimal::from(0),
            _ => false,
        })
    }

    pub fn has_integer_digits(self, min: usize, max: usize) -> Self {
        self.check_integer_digits(IntegerDigits::new(Some(min), Some(max)))
    }

    pub fn has_max_integer_digits(self, max: usize) -> Self {
        self.check_integer_digits(IntegerDigits::new(None, Some(max)))
    }

    pub fn has_decimal_digits(self, min: usize, max: usize) -> Self {
        self.check_decimal_digits(DecimalDigits::new(Some(min), Some(max)))
    }

    pub fn has_max_decimal_digits(self, max: usize) -> Self {
        self.check_decimal_digits(DecimalDigits::new(None, Some(max)))
    }

    fn check_integer_digits(self, constraint: IntegerDigits) -> Self {
        self.validate_present(constraint, |value| {
            parts_of(value).map_or(false, |parts| constraint.admits(parts.integer_digits()))
        })
    }

    fn check_decimal_digits(self, constraint: DecimalDigits) -> Self {
        self.validate_present(constraint, |value| {
            parts_of(value).map_or(false, |parts| constraint.admits(parts.fraction_digits()))
        })
    }
}

//! Constraints applicable to every value
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::validation::Property;
use crate::value::{ToValue, Value};

unit_constraints! {
    /// The value must be absent
    Null,
    /// The value must be present
    NotNull,
    /// A caller-supplied predicate must hold
    Valid,
}

value_constraints! {
    /// The value must equal `value`
    Equals { value },
    /// The value must differ from `value`
    NotEquals { value },
    /// The value must be one of `values`
    In { values },
    /// The value must be none of `values`
    NotIn { values },
}

impl<'a, V> Property<'a, V> {
    /// Fails when the property is absent
    pub fn is_not_null(self) -> Self {
        self.check_presence(NotNull)
    }
}

impl<'a, V: ToValue> Property<'a, V> {
    /// Fails when the property is present
    pub fn is_null(self) -> Self {
        self.validate(Null, |value| value.is_none())
    }

    pub fn is_equal_to<U>(self, expected: U) -> Self
    where
        V: PartialEq<U>,
        U: ToValue,
    {
        let constraint = Equals {
            value: expected.to_value(),
        };
        self.validate_present(constraint, |value| *value == expected)
    }

    pub fn is_not_equal_to<U>(self, unexpected: U) -> Self
    where
        V: PartialEq<U>,
        U: ToValue,
    {
        let constraint = NotEquals {
            value: unexpected.to_value(),
        };
        self.validate_present(constraint, |value| *value != unexpected)
    }

    pub fn is_in<I, U>(self, allowed: I) -> Self
    where
        I: IntoIterator<Item = U>,
        V: PartialEq<U>,
        U: ToValue,
    {
        let allowed: Vec<U> = allowed.into_iter().collect();
        let constraint = In {
            values: Value::List(allowed.iter().map(ToValue::to_value).collect()),
        };
        self.validate_present(constraint, |value| allowed.iter().any(|u| *value == *u))
    }

    pub fn is_not_in<I, U>(self, forbidden: I) -> Self
    where
        I: IntoIterator<Item = U>,
        V: PartialEq<U>,
        U: ToValue,
    {
        let forbidden: Vec<U> = forbidden.into_iter().collect();
        let constraint = NotIn {
            values: Value::List(forbidden.iter().map(ToValue::to_value).collect()),
        };
        self.validate_present(constraint, |value| !forbidden.iter().any(|u| *value == *u))
    }

    /// Custom predicate, skipped when the property is absent
    pub fn is_valid<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        self.validate_present(Valid, predicate)
    }
}

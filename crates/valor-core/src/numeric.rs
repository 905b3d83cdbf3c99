//! Exact numeric and size views used by the built-in constraints
//!
//! Numbers are compared as [`BigDecimal`] so that integers, floats and decimals
//! share one implementation and keep their exact scale.
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::value::Value;
use bigdecimal::BigDecimal;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

/// Parse a float through its shortest round-trip representation
pub(crate) fn decimal_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}

/// Largest run of zeros [`DecimalParts`] pads when rendering positional notation
pub const MAX_PADDING_ZEROS: u64 = 4096;

/// Sign, unscaled digits and scale of an exact decimal
///
/// Digit counts are computed from the digits and the scale, so huge exponents
/// (`1E+100000000000`) never allocate. Rendering keeps trailing zeros so that
/// the scale of the source value survives formatting (`9999.990` stays three
/// fraction digits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalParts {
    negative: bool,
    digits: String,
    scale: i64,
}

impl DecimalParts {
    pub fn from_decimal(value: &BigDecimal) -> Self {
        let (unscaled, scale) = value.as_bigint_and_exponent();
        let text = unscaled.to_string();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest.to_owned()),
            None => (false, text),
        };
        Self {
            negative,
            digits,
            scale,
        }
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    fn is_zero(&self) -> bool {
        self.digits.bytes().all(|b| b == b'0')
    }

    /// Significant integer digits (`0.5` has none, `100` has three)
    pub fn integer_digits(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let len = self.digits.len() as i128;
        let count = (len - i128::from(self.scale)).max(0);
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    /// Fraction digits ignoring trailing zeros
    pub fn fraction_digits(&self) -> usize {
        if self.scale <= 0 || self.is_zero() {
            return 0;
        }
        let trailing = self.digits.len() - self.digits.trim_end_matches('0').len();
        let count = i128::from(self.scale) - trailing as i128;
        usize::try_from(count.max(0)).unwrap_or(usize::MAX)
    }

    /// Integer and fraction digit strings in positional notation
    ///
    /// The fraction keeps trailing zeros. `None` when rendering would pad more
    /// than [`MAX_PADDING_ZEROS`] zeros.
    pub fn split(&self) -> Option<(String, String)> {
        let len = self.digits.len() as u64;
        if self.scale <= 0 {
            if self.is_zero() {
                return Some(("0".to_owned(), String::new()));
            }
            let zeros = self.scale.unsigned_abs();
            if zeros > MAX_PADDING_ZEROS {
                return None;
            }
            let mut integer = self.digits.clone();
            integer.extend(std::iter::repeat('0').take(zeros as usize));
            return Some((integer, String::new()));
        }

        let scale = self.scale.unsigned_abs();
        if len > scale {
            let (integer, fraction) = self.digits.split_at((len - scale) as usize);
            return Some((integer.to_owned(), fraction.to_owned()));
        }
        let zeros = scale - len;
        if zeros > MAX_PADDING_ZEROS {
            return None;
        }
        let mut fraction = "0".repeat(zeros as usize);
        fraction.push_str(&self.digits);
        Some(("0".to_owned(), fraction))
    }
}

/// Positional notation, or `d.dddE±n` past the padding limit
impl fmt::Display for DecimalParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        match self.split() {
            Some((integer, fraction)) => {
                f.write_str(&integer)?;
                if !fraction.is_empty() {
                    write!(f, ".{}", fraction)?;
                }
                Ok(())
            }
            None => {
                let (lead, rest) = self.digits.split_at(1);
                let exponent = self.digits.len() as i128 - 1 - i128::from(self.scale);
                f.write_str(lead)?;
                if !rest.is_empty() {
                    write!(f, ".{}", rest)?;
                }
                write!(f, "E{:+}", exponent)
            }
        }
    }
}

/// Values that have an exact decimal view
pub trait Numeric {
    /// `None` for values with no finite decimal form (NaN, infinities)
    fn to_decimal(&self) -> Option<BigDecimal>;
}

macro_rules! impl_numeric_int {
    ($($ty:ty),+) => {
        $(
            impl Numeric for $ty {
                fn to_decimal(&self) -> Option<BigDecimal> {
                    Some(BigDecimal::from(*self))
                }
            }
        )+
    };
}

impl_numeric_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Numeric for isize {
    fn to_decimal(&self) -> Option<BigDecimal> {
        i64::try_from(*self).ok().map(BigDecimal::from)
    }
}

impl Numeric for usize {
    fn to_decimal(&self) -> Option<BigDecimal> {
        u64::try_from(*self).ok().map(BigDecimal::from)
    }
}

impl Numeric for f32 {
    fn to_decimal(&self) -> Option<BigDecimal> {
        if !self.is_finite() {
            return None;
        }
        BigDecimal::from_str(&self.to_string()).ok()
    }
}

impl Numeric for f64 {
    fn to_decimal(&self) -> Option<BigDecimal> {
        decimal_from_f64(*self)
    }
}

impl Numeric for BigDecimal {
    fn to_decimal(&self) -> Option<BigDecimal> {
        Some(self.clone())
    }
}

impl Numeric for Value {
    fn to_decimal(&self) -> Option<BigDecimal> {
        self.as_decimal()
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_decimal(&self) -> Option<BigDecimal> {
        (**self).to_decimal()
    }
}

/// Values with a size: character count for text, element count for collections
pub trait HasSize {
    fn size(&self) -> usize;

    /// What a size violation records: the text itself, or the element count
    fn size_value(&self) -> Value {
        Value::from(self.size())
    }
}

impl HasSize for str {
    fn size(&self) -> usize {
        self.chars().count()
    }

    fn size_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl HasSize for String {
    fn size(&self) -> usize {
        self.as_str().size()
    }

    fn size_value(&self) -> Value {
        self.as_str().size_value()
    }
}

impl<T> HasSize for [T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> HasSize for Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> HasSize for VecDeque<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> HasSize for BTreeSet<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S> HasSize for HashSet<T, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> HasSize for BTreeMap<K, V> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> HasSize for HashMap<K, V, S> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: HasSize + ?Sized> HasSize for &T {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn size_value(&self) -> Value {
        (**self).size_value()
    }
}

//! Runtime value model shared by violations, constraint parameters and formatters
//!
//! Every [`Value`] reports a [`ValueType`]: a stable [`TypeTag`] plus an explicitly
//! declared supertype list. Formatter dispatch walks that list instead of relying on
//! runtime type introspection.
//!
//! Copyright (c) 2025 Valor Team
//! Licensed under the Apache-2.0 license

use crate::numeric::DecimalParts;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::sync::Arc;

/// Stable identifier of a value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeTag(&'static str);

impl TypeTag {
    /// Create a tag from a static name
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The tag name
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Built-in type tags
pub mod tags {
    use super::TypeTag;

    pub const ANY: TypeTag = TypeTag::new("any");
    pub const NULL: TypeTag = TypeTag::new("null");
    pub const BOOL: TypeTag = TypeTag::new("bool");
    pub const NUMBER: TypeTag = TypeTag::new("number");
    pub const INTEGER: TypeTag = TypeTag::new("integer");
    pub const I64: TypeTag = TypeTag::new("i64");
    pub const U64: TypeTag = TypeTag::new("u64");
    pub const FLOAT: TypeTag = TypeTag::new("float");
    pub const F64: TypeTag = TypeTag::new("f64");
    pub const DECIMAL: TypeTag = TypeTag::new("decimal");
    pub const CHAR: TypeTag = TypeTag::new("char");
    pub const STRING: TypeTag = TypeTag::new("string");
    pub const ITERABLE: TypeTag = TypeTag::new("iterable");
    pub const LIST: TypeTag = TypeTag::new("list");
    pub const TEMPORAL: TypeTag = TypeTag::new("temporal");
    pub const DATE: TypeTag = TypeTag::new("date");
    pub const DATETIME: TypeTag = TypeTag::new("datetime");
}

/// A type tag together with its ordered supertypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueType {
    tag: TypeTag,
    supertypes: &'static [TypeTag],
}

impl ValueType {
    /// Declare a type and its supertypes, nearest first
    pub const fn new(tag: TypeTag, supertypes: &'static [TypeTag]) -> Self {
        Self { tag, supertypes }
    }

    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    pub const fn supertypes(&self) -> &'static [TypeTag] {
        self.supertypes
    }

    /// The exact tag followed by every supertype, in lookup order
    pub fn lookup_chain(&self) -> impl Iterator<Item = TypeTag> + '_ {
        std::iter::once(self.tag).chain(self.supertypes.iter().copied())
    }

    /// Whether `tag` is this type or one of its declared supertypes
    pub fn is_a(&self, tag: TypeTag) -> bool {
        self.lookup_chain().any(|t| t == tag)
    }
}

const NULL_TYPE: ValueType = ValueType::new(tags::NULL, &[tags::ANY]);
const BOOL_TYPE: ValueType = ValueType::new(tags::BOOL, &[tags::ANY]);
const I64_TYPE: ValueType = ValueType::new(tags::I64, &[tags::INTEGER, tags::NUMBER, tags::ANY]);
const U64_TYPE: ValueType = ValueType::new(tags::U64, &[tags::INTEGER, tags::NUMBER, tags::ANY]);
const F64_TYPE: ValueType = ValueType::new(tags::F64, &[tags::FLOAT, tags::NUMBER, tags::ANY]);
const DECIMAL_TYPE: ValueType = ValueType::new(tags::DECIMAL, &[tags::NUMBER, tags::ANY]);
const CHAR_TYPE: ValueType = ValueType::new(tags::CHAR, &[tags::ANY]);
const STRING_TYPE: ValueType = ValueType::new(tags::STRING, &[tags::ANY]);
const LIST_TYPE: ValueType = ValueType::new(tags::LIST, &[tags::ITERABLE, tags::ANY]);
const DATE_TYPE: ValueType = ValueType::new(tags::DATE, &[tags::TEMPORAL, tags::ANY]);
const DATETIME_TYPE: ValueType = ValueType::new(tags::DATETIME, &[tags::TEMPORAL, tags::ANY]);

/// Host-defined value that can travel through violations and message parameters
///
/// Implementors declare their own [`ValueType`] so applications can register a
/// formatter for them (a currency amount, an identifier type, ...).
pub trait CustomValue: fmt::Debug + fmt::Display + Send + Sync {
    /// Type tag and supertypes used for formatter lookup
    fn value_type(&self) -> ValueType;

    /// Access to the concrete type for formatters that downcast
    fn as_any(&self) -> &dyn Any;

    /// Exact decimal view, for number-like custom values
    fn as_decimal(&self) -> Option<BigDecimal> {
        None
    }

    /// Structural equality against another custom value
    fn eq_value(&self, other: &dyn CustomValue) -> bool {
        self.value_type() == other.value_type() && self.to_string() == other.to_string()
    }
}

/// A runtime value captured from the validated object graph
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Decimal(BigDecimal),
    Char(char),
    String(String),
    List(Vec<Value>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Custom(Arc<dyn CustomValue>),
}

impl Value {
    /// Wrap a host-defined value
    pub fn custom<C: CustomValue + 'static>(value: C) -> Self {
        Self::Custom(Arc::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Type tag and supertypes of this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => NULL_TYPE,
            Self::Bool(_) => BOOL_TYPE,
            Self::Int(_) => I64_TYPE,
            Self::UInt(_) => U64_TYPE,
            Self::Float(_) => F64_TYPE,
            Self::Decimal(_) => DECIMAL_TYPE,
            Self::Char(_) => CHAR_TYPE,
            Self::String(_) => STRING_TYPE,
            Self::List(_) => LIST_TYPE,
            Self::Date(_) => DATE_TYPE,
            Self::DateTime(_) => DATETIME_TYPE,
            Self::Custom(custom) => custom.value_type(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Exact decimal view of numeric values
    pub fn as_decimal(&self) -> Option<BigDecimal> {
        match self {
            Self::Int(n) => Some(BigDecimal::from(*n)),
            Self::UInt(n) => Some(BigDecimal::from(*n)),
            Self::Float(f) => crate::numeric::decimal_from_f64(*f),
            Self::Decimal(d) => Some(d.clone()),
            Self::Custom(custom) => custom.as_decimal(),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a == b,
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => a.eq_value(b.as_ref()),
            _ => false,
        }
    }
}

/// Locale-neutral stringification, the formatter of last resort
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(n) => write!(f, "{}", n),
            Self::UInt(n) => write!(f, "{}", n),
            Self::Float(n) => write!(f, "{}", n),
            Self::Decimal(d) => write!(f, "{}", DecimalParts::from_decimal(d)),
            Self::Char(c) => write!(f, "{}", c),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            Self::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::UInt(n) => serializer.serialize_u64(*n),
            Self::Float(n) => serializer.serialize_f64(*n),
            Self::Char(c) => serializer.serialize_char(*c),
            Self::String(s) => serializer.serialize_str(s),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            // Decimals, dates and custom values keep their exact textual form
            other => serializer.collect_str(other),
        }
    }
}

/// Conversion of captured property values into [`Value`]
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

macro_rules! impl_to_value {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(<$target>::from(*self))
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    value.to_value()
                }
            }
        )+
    };
}

impl_to_value!(Int as i64: i8, i16, i32, i64);
impl_to_value!(UInt as u64: u8, u16, u32, u64);
impl_to_value!(Float as f64: f64);
impl_to_value!(Bool as bool: bool);
impl_to_value!(Char as char: char);

/// Widened through the shortest representation, so `9999.999f32` stays `9999.999`
impl ToValue for f32 {
    fn to_value(&self) -> Value {
        let widened = self.to_string().parse().unwrap_or_else(|_| f64::from(*self));
        Value::Float(widened)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        value.to_value()
    }
}

impl ToValue for isize {
    fn to_value(&self) -> Value {
        i64::try_from(*self).map_or_else(|_| Value::String(self.to_string()), Value::Int)
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value {
        u64::try_from(*self).map_or_else(|_| Value::String(self.to_string()), Value::UInt)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        value.to_value()
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl ToValue for BigDecimal {
    fn to_value(&self) -> Value {
        Value::Decimal(self.clone())
    }
}

impl From<BigDecimal> for Value {
    fn from(value: BigDecimal) -> Self {
        Value::Decimal(value)
    }
}

impl ToValue for NaiveDate {
    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl ToValue for NaiveDateTime {
    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        values.to_value()
    }
}

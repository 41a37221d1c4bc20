//! The dynamically-typed JSON document tree.
//!
//! A [`Value`] exclusively owns everything reachable through it: containers
//! hold their children in heap collections, there is no sharing and no link
//! back to a parent or into the parsed input. `Clone` is a deep copy and
//! [`Value::take`] moves the content out, leaving `Null` behind.

mod from_value;
mod index;

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::error::ParseError;

pub use from_value::FromValue;
pub use index::ValueIndex;

/// Object storage. Keys are unique; equality ignores insertion order.
pub type Map = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// Discriminant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Double => "double",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::Double(_) => Kind::Double,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// `true` for both `Int` and `Double`.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Whether [`get_as::<T>`](Value::get_as) would succeed.
    pub fn is<'a, T: FromValue<'a>>(&'a self) -> bool {
        T::from_value(self).is_ok()
    }

    /// Typed read. Fails with a [`TypeError`](crate::TypeError) when the value
    /// holds another variant.
    ///
    /// Numbers follow a widening rule: `f64` accepts an `Int`, and `i64`
    /// accepts a `Double`, truncating it toward zero.
    ///
    /// ```
    /// use json_doc::Value;
    ///
    /// let v = Value::Int(7);
    /// assert_eq!(v.get_as::<f64>(), Ok(7.0));
    /// assert!(v.get_as::<&str>().is_err());
    /// ```
    pub fn get_as<'a, T: FromValue<'a>>(&'a self) -> Result<T, crate::TypeError> {
        T::from_value(self)
    }

    /// Typed read falling back to `default` on a variant mismatch.
    pub fn get_as_or<'a, T: FromValue<'a>>(&'a self, default: T) -> T {
        T::from_value(self).unwrap_or(default)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        i64::from_value(self).ok()
    }

    pub fn as_f64(&self) -> Option<f64> {
        f64::from_value(self).ok()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Non-mutating lookup by key or index.
    pub fn get<I: ValueIndex>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    pub fn get_mut<I: ValueIndex>(&mut self, index: I) -> Option<&mut Value> {
        index.index_into_mut(self)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(key))
    }

    /// Number of entries of an array or object; 0 for everything else.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(arr) => arr.len(),
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Moves the content out and leaves `Null` in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Replaces the content with an empty object and returns it.
    pub fn emplace_object(&mut self) -> &mut Map {
        *self = Value::Object(Map::new());
        match self {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    /// Replaces the content with an empty array and returns it.
    pub fn emplace_array(&mut self) -> &mut Vec<Value> {
        *self = Value::Array(Vec::new());
        match self {
            Value::Array(arr) => arr,
            _ => unreachable!(),
        }
    }

    /// Replaces the content with an empty string and returns it.
    pub fn emplace_string(&mut self) -> &mut String {
        *self = Value::String(String::new());
        match self {
            Value::String(s) => s,
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for Value {
    /// Compact JSON text, the same as [`to_string`](crate::to_string).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::serializer::to_string(self))
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s.as_bytes())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Double(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

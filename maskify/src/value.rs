//! The generic document tree that masking operates on.
//!
//! [`Value`] is decoded once at the boundary, from whichever format the caller
//! uses, and then traversed by matching on a closed set of variants. With the
//! `serde` feature enabled it deserializes from any self-describing format
//! (JSON, YAML, ...), as long as mapping keys are strings.

use std::collections::BTreeMap;

/// String-keyed mapping of nested values.
pub type Mapping = BTreeMap<String, Value>;

/// A decoded document node.
///
/// Variant order matters for untagged deserialization: scalars are tried
/// first, containers last.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Null, boolean, or number. Never masked, never descended into.
    Scalar(Scalar),
    /// A string leaf; the only kind of value a strategy rewrites.
    String(String),
    /// An ordered list.
    Sequence(Vec<Value>),
    /// A string-keyed map.
    Mapping(Mapping),
}

/// Opaque scalar leaves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Scalar {
    /// `null` / `~`.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// Any integer that fits in `i64`.
    Int(i64),
    /// Integers above `i64::MAX`.
    UInt(u64),
    /// Floating-point numbers.
    Float(f64),
}

impl Value {
    /// Returns the string slice if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the mapping if this is a [`Value::Mapping`].
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`Value::Sequence`].
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up `key` when this is a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|mapping| mapping.get(key))
    }

    /// Looks up a chain of keys through nested mappings.
    pub fn pointer<'a, I>(&self, path: I) -> Option<&Value>
    where
        I: IntoIterator<Item = &'a str>,
    {
        path.into_iter().try_fold(self, |node, key| node.get(key))
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Scalar(Scalar::Null)
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Scalar(Scalar::Int(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Scalar(Scalar::UInt(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Float(value))
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().collect())
    }
}

#[cfg(feature = "json")]
mod json {
    use serde_json::{Map, Number, Value as JsonValue};

    use super::{Scalar, Value};

    impl From<JsonValue> for Value {
        fn from(value: JsonValue) -> Self {
            match value {
                JsonValue::Null => Value::Scalar(Scalar::Null),
                JsonValue::Bool(flag) => Value::Scalar(Scalar::Bool(flag)),
                JsonValue::Number(number) => Value::Scalar(Scalar::from(&number)),
                JsonValue::String(text) => Value::String(text),
                JsonValue::Array(items) => {
                    Value::Sequence(items.into_iter().map(Value::from).collect())
                }
                JsonValue::Object(map) => Value::Mapping(
                    map.into_iter()
                        .map(|(key, value)| (key, Value::from(value)))
                        .collect(),
                ),
            }
        }
    }

    impl From<&Number> for Scalar {
        fn from(number: &Number) -> Self {
            if let Some(int) = number.as_i64() {
                Scalar::Int(int)
            } else if let Some(uint) = number.as_u64() {
                Scalar::UInt(uint)
            } else {
                // Only unrepresentable with `arbitrary_precision`.
                number.as_f64().map_or(Scalar::Null, Scalar::Float)
            }
        }
    }

    impl From<Scalar> for JsonValue {
        fn from(scalar: Scalar) -> Self {
            match scalar {
                Scalar::Null => JsonValue::Null,
                Scalar::Bool(flag) => JsonValue::Bool(flag),
                Scalar::Int(int) => JsonValue::Number(int.into()),
                Scalar::UInt(uint) => JsonValue::Number(uint.into()),
                // NaN and infinities have no JSON form.
                Scalar::Float(float) => {
                    Number::from_f64(float).map_or(JsonValue::Null, JsonValue::Number)
                }
            }
        }
    }

    impl From<Value> for JsonValue {
        fn from(value: Value) -> Self {
            match value {
                Value::Scalar(scalar) => scalar.into(),
                Value::String(text) => JsonValue::String(text),
                Value::Sequence(items) => {
                    JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
                }
                Value::Mapping(mapping) => JsonValue::Object(
                    mapping
                        .into_iter()
                        .map(|(key, value)| (key, JsonValue::from(value)))
                        .collect::<Map<String, JsonValue>>(),
                ),
            }
        }
    }
}

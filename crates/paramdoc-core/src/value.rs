//! Example value tree
//!
//! An [`ExampleValue`] is a plausible instance of a class's shape. Objects keep
//! field declaration order so the JSON encoder emits keys in the same order.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};

/// A leaf value in an example tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    Str(String),
}

impl Scalar {
    /// Convert a JSON scalar into a [`Scalar`].
    ///
    /// Returns `None` for `null`, arrays and objects.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Scalar::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(Scalar::Int)
                .or_else(|| n.as_f64().map(Scalar::Float)),
            Value::String(s) => Some(Scalar::Str(s.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn to_json(&self) -> Value {
        match self {
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Int(i) => Value::Number((*i).into()),
            Scalar::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            Scalar::Char(c) => Value::String(c.to_string()),
            Scalar::Str(s) => Value::String(s.clone()),
        }
    }
}

/// A node of an example tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExampleValue {
    Scalar(Scalar),
    Array(Vec<ExampleValue>),
    Object(IndexMap<String, ExampleValue>),
}

impl ExampleValue {
    /// Placeholder used for injected fields and opaque types
    pub fn empty_string() -> Self {
        ExampleValue::Scalar(Scalar::Str(String::new()))
    }

    pub fn empty_object() -> Self {
        ExampleValue::Object(IndexMap::new())
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, ExampleValue>> {
        match self {
            ExampleValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ExampleValue]> {
        match self {
            ExampleValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            ExampleValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Look up an object member by key
    pub fn get(&self, key: &str) -> Option<&ExampleValue> {
        self.as_object()?.get(key)
    }

    /// Convert to a `serde_json::Value`, preserving object key order.
    ///
    /// Non-finite floats become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            ExampleValue::Scalar(s) => s.to_json(),
            ExampleValue::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            ExampleValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Scalar> for ExampleValue {
    fn from(scalar: Scalar) -> Self {
        ExampleValue::Scalar(scalar)
    }
}

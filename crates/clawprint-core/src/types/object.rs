//! Read-only view over a JSON object returned by the registry.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A parsed JSON object with by-name field access.
///
/// Nested objects are reachable as `ApiObject`s through [`ApiObject::object`]
/// and [`ApiObject::objects`]; scalars pass through as plain JSON values.
/// Serializing an `ApiObject` yields exactly the JSON it was built from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiObject {
    fields: Map<String, Value>,
}

static NULL: Value = Value::Null;

impl ApiObject {
    /// Create an empty object
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value; `None` when the value is not an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Raw field value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field value as a string slice
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Field value as a float
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Field value as an integer
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Field value as a boolean
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Nested object field, wrapped
    pub fn object(&self, key: &str) -> Option<ApiObject> {
        self.get(key).cloned().and_then(ApiObject::from_value)
    }

    /// Object elements of a list field, each wrapped individually.
    ///
    /// Non-object elements are skipped; a missing or non-list field yields
    /// an empty vector.
    pub fn objects(&self, key: &str) -> Vec<ApiObject> {
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| ApiObject::from_value(item.clone()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Look up a nested value by JSON pointer (e.g. `/verification/level`)
    pub fn pointer(&self, pointer: &str) -> Option<Value> {
        self.to_value().pointer(pointer).cloned()
    }

    /// Whether the field was present in the response
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Field names in response order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the object has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Convert back to a plain JSON value
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    /// Consume into the underlying map
    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for ApiObject {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<ApiObject> for Value {
    fn from(object: ApiObject) -> Self {
        Value::Object(object.fields)
    }
}

impl Index<&str> for ApiObject {
    type Output = Value;

    /// Missing fields index to `Value::Null`, like `serde_json::Value`
    fn index(&self, key: &str) -> &Value {
        self.fields.get(key).unwrap_or(&NULL)
    }
}

//! [`Value`] — the tagged variant every component operates on.

use crate::{JsonArray, JsonNumber, JsonObject, TypeError};

/// A node in a hierarchical JSON value tree.
///
/// Exactly one case is active at a time. `Null`, `Bool`, `Number`, `String`,
/// and `Bytes` are primitives — immutable once constructed; replacing one
/// means replacing the slot that holds it. `Object` and `Array` are mutable
/// containers that exclusively own their children.
///
/// `Bytes` is a primitive alongside the others: it serializes as base64 text
/// and compares byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(JsonNumber),
    String(String),
    Bytes(Vec<u8>),
    Array(JsonArray),
    Object(JsonObject),
}

impl Value {
    /// Constructs an empty object container.
    pub fn new_object() -> Value {
        Value::Object(JsonObject::new())
    }

    /// Constructs an empty array container.
    pub fn new_array() -> Value {
        Value::Array(JsonArray::new())
    }

    /// The tag name, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, Value::Bytes(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// `true` for `Object` and `Array`, `false` for every primitive.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<JsonNumber> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Reads a number as `i64`; integral floats coerce.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(|n| n.as_i64())
    }

    /// Reads a number as `f64`; ints widen.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|n| n.as_f64())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut JsonArray> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut JsonObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Casts to an object, or reports which tag was found instead.
    pub fn expect_object(&self) -> Result<&JsonObject, TypeError> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(TypeError::new("object", other.type_name())),
        }
    }

    pub fn expect_object_mut(&mut self) -> Result<&mut JsonObject, TypeError> {
        match self {
            Value::Object(obj) => Ok(obj),
            other => Err(TypeError::new("object", other.type_name())),
        }
    }

    /// Casts to an array, or reports which tag was found instead.
    pub fn expect_array(&self) -> Result<&JsonArray, TypeError> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(TypeError::new("array", other.type_name())),
        }
    }

    pub fn expect_array_mut(&mut self) -> Result<&mut JsonArray, TypeError> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(TypeError::new("array", other.type_name())),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(JsonNumber::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(JsonNumber::from(i))
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Number(JsonNumber::from(u))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Number(JsonNumber::from(u))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(JsonNumber::from(f))
    }
}

impl From<JsonNumber> for Value {
    fn from(n: JsonNumber) -> Self {
        Value::Number(n)
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

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<JsonArray> for Value {
    fn from(arr: JsonArray) -> Self {
        Value::Array(arr)
    }
}

impl From<JsonObject> for Value {
    fn from(obj: JsonObject) -> Self {
        Value::Object(obj)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(JsonArray::from_iter(iter))
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(JsonObject::from_iter(iter))
    }
}

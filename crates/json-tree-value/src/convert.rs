//! Conversions between the native [`Value`] and [`serde_json::Value`].
//!
//! This is the interop seam: trees built by any serde-backed producer can
//! enter the codec and tree algebra by conversion, and native trees can leave
//! the same way.

use base64::Engine as _;

use crate::{JsonNumber, TypeError, Value};

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(convert_number(&n)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(JsonNumber::Int(i)) => serde_json::Value::from(*i),
            // Non-finite floats have no JSON representation; they map to
            // null, the same rule the writer applies.
            Value::Number(JsonNumber::Float(f)) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Bytes(b) => serde_json::Value::String(
                base64::engine::general_purpose::STANDARD.encode(b),
            ),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(obj) => serde_json::Value::Object(
                obj.iter()
                    .map(|(k, v)| (k.to_owned(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl Value {
    /// Constructs a primitive from a dynamic payload, rejecting containers.
    ///
    /// This is the runtime edge of "a primitive is built from a bool, a
    /// number, text, or bytes — nothing else": statically typed callers use
    /// the `From` impls, dynamically typed payloads go through here.
    pub fn primitive_from(v: serde_json::Value) -> Result<Value, TypeError> {
        match v {
            serde_json::Value::Array(_) => Err(TypeError::new("primitive", "array")),
            serde_json::Value::Object(_) => Err(TypeError::new("primitive", "object")),
            other => Ok(Value::from(other)),
        }
    }
}

fn convert_number(n: &serde_json::Number) -> JsonNumber {
    if let Some(i) = n.as_i64() {
        JsonNumber::Int(i)
    } else if let Some(u) = n.as_u64() {
        JsonNumber::from(u)
    } else {
        JsonNumber::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

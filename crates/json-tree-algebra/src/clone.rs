//! Deep copy and deep clone.

use json_tree_value::{JsonArray, JsonObject, Value};

use crate::error::AlgebraError;

/// Replaces the contents of `target` with a deep copy of `source`.
///
/// Both must be containers of the same tag, otherwise the call fails with
/// [`AlgebraError::TagMismatch`] and `target` is untouched. On success
/// `target` shares no structure with `source`.
pub fn copy_into(target: &mut Value, source: &Value) -> Result<(), AlgebraError> {
    match (target, source) {
        (Value::Object(dst), Value::Object(src)) => {
            dst.clear();
            for (key, v) in src.iter() {
                dst.insert(key, deep_clone(v));
            }
            Ok(())
        }
        (Value::Array(dst), Value::Array(src)) => {
            dst.clear();
            for v in src.iter() {
                dst.push(deep_clone(v));
            }
            Ok(())
        }
        (target, source) => Err(AlgebraError::TagMismatch {
            left: target.type_name(),
            right: source.type_name(),
        }),
    }
}

/// Returns an independent deep copy of `value`, whatever its tag.
///
/// Primitives return an equal-valued primitive; containers are rebuilt
/// entry-by-entry into fresh containers of the same kind.
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(*n),
        Value::String(s) => Value::String(s.clone()),
        Value::Bytes(b) => Value::Bytes(b.clone()),
        Value::Array(arr) => {
            let mut out = JsonArray::with_capacity(arr.len());
            for v in arr.iter() {
                out.push(deep_clone(v));
            }
            Value::Array(out)
        }
        Value::Object(obj) => {
            let mut out = JsonObject::with_capacity(obj.len());
            for (key, v) in obj.iter() {
                out.insert(key, deep_clone(v));
            }
            Value::Object(out)
        }
    }
}

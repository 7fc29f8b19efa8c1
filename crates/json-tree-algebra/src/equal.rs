//! Recursive structural equality.

use json_tree_value::Value;

/// Performs a deep structural equality check between two values.
///
/// Two values are equal only if their tags match. Primitives compare raw
/// payloads: `Int` and `Float` are distinct payloads even for the same
/// numeric value, and byte sequences compare byte-for-byte. Objects compare
/// as unordered key→value maps of equal size; arrays compare index-wise
/// with equal lengths.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Bytes(a), Value::Bytes(b)) => a == b,

        (Value::Array(a), Value::Array(b)) => {
            if a.len() != b.len() {
                return false;
            }
            a.iter().zip(b.iter()).all(|(x, y)| deep_equal(x, y))
        }

        (Value::Object(a), Value::Object(b)) => {
            if a.len() != b.len() {
                return false;
            }
            a.iter().all(|(key, av)| match b.get(key) {
                Some(bv) => deep_equal(av, bv),
                None => false,
            })
        }

        // Different tags are never equal.
        _ => false,
    }
}

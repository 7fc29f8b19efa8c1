//! Deep intersection: what two trees have in common.

use json_tree_value::{JsonArray, JsonObject, Value};

use crate::clone::deep_clone;
use crate::equal::deep_equal;

/// Returns what `a` and `b` have in common.
///
/// A total function: when either input is null, or the two inputs are not
/// containers of the same tag, the result is `Null`.
///
/// Object case: only keys present in both survive — nested same-tag
/// containers recurse and are kept only when the nested result is
/// non-empty; equal primitives are kept; everything else is dropped.
///
/// Array case: overlapping indices follow the same rules; indices beyond
/// the shorter array are never considered.
///
/// Empty nested results are dropped uniformly for objects and arrays in
/// both container cases.
pub fn intersection(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => Value::Object(intersect_objects(a, b)),
        (Value::Array(a), Value::Array(b)) => Value::Array(intersect_arrays(a, b)),
        _ => Value::Null,
    }
}

fn intersect_objects(a: &JsonObject, b: &JsonObject) -> JsonObject {
    let mut out = JsonObject::new();
    for (key, av) in a.iter() {
        let Some(bv) = b.get(key) else { continue };
        match (av, bv) {
            (Value::Object(ao), Value::Object(bo)) => {
                let nested = intersect_objects(ao, bo);
                if !nested.is_empty() {
                    out.insert(key, Value::Object(nested));
                }
            }
            (Value::Array(aa), Value::Array(ba)) => {
                let nested = intersect_arrays(aa, ba);
                if !nested.is_empty() {
                    out.insert(key, Value::Array(nested));
                }
            }
            (av, bv) => {
                if deep_equal(av, bv) {
                    out.insert(key, deep_clone(av));
                }
            }
        }
    }
    out
}

fn intersect_arrays(a: &JsonArray, b: &JsonArray) -> JsonArray {
    let mut out = JsonArray::new();
    for (av, bv) in a.iter().zip(b.iter()) {
        match (av, bv) {
            (Value::Object(ao), Value::Object(bo)) => {
                let nested = intersect_objects(ao, bo);
                if !nested.is_empty() {
                    out.push(Value::Object(nested));
                }
            }
            (Value::Array(aa), Value::Array(ba)) => {
                let nested = intersect_arrays(aa, ba);
                if !nested.is_empty() {
                    out.push(Value::Array(nested));
                }
            }
            (av, bv) => {
                if deep_equal(av, bv) {
                    out.push(deep_clone(av));
                }
            }
        }
    }
    out
}

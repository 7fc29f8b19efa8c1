//! Deep diff: what the left tree has that the right one does not.

use json_tree_value::{JsonArray, JsonObject, Value};

use crate::clone::deep_clone;
use crate::equal::deep_equal;
use crate::error::AlgebraError;

/// Returns what is in `a` that differs from or is absent in `b`.
///
/// Both must be containers of the same tag, otherwise the call fails with
/// [`AlgebraError::TagMismatch`]. Content exclusive to `b` is never
/// inspected and never appears in the result.
///
/// Object case: keys absent from `b` are included verbatim; keys where both
/// sides are objects (or both arrays) recurse, included only when the
/// nested diff is non-empty; anything else is included iff unequal.
///
/// Array case: overlapping indices recurse for same-tag containers
/// (included only when non-empty) and are included iff unequal otherwise;
/// elements of `a` beyond the end of `b` are appended wholesale, never
/// diffed.
pub fn diff(a: &Value, b: &Value) -> Result<Value, AlgebraError> {
    match (a, b) {
        (Value::Object(a), Value::Object(b)) => Ok(Value::Object(diff_objects(a, b))),
        (Value::Array(a), Value::Array(b)) => Ok(Value::Array(diff_arrays(a, b))),
        (a, b) => Err(AlgebraError::TagMismatch {
            left: a.type_name(),
            right: b.type_name(),
        }),
    }
}

fn diff_objects(a: &JsonObject, b: &JsonObject) -> JsonObject {
    let mut out = JsonObject::new();
    for (key, av) in a.iter() {
        let Some(bv) = b.get(key) else {
            out.insert(key, deep_clone(av));
            continue;
        };
        match (av, bv) {
            (Value::Object(ao), Value::Object(bo)) => {
                let nested = diff_objects(ao, bo);
                if !nested.is_empty() {
                    out.insert(key, Value::Object(nested));
                }
            }
            (Value::Array(aa), Value::Array(ba)) => {
                let nested = diff_arrays(aa, ba);
                if !nested.is_empty() {
                    out.insert(key, Value::Array(nested));
                }
            }
            (av, bv) => {
                if !deep_equal(av, bv) {
                    out.insert(key, deep_clone(av));
                }
            }
        }
    }
    out
}

fn diff_arrays(a: &JsonArray, b: &JsonArray) -> JsonArray {
    let mut out = JsonArray::new();
    let overlap = a.len().min(b.len());
    for (av, bv) in a.iter().zip(b.iter()) {
        match (av, bv) {
            (Value::Object(ao), Value::Object(bo)) => {
                let nested = diff_objects(ao, bo);
                if !nested.is_empty() {
                    out.push(Value::Object(nested));
                }
            }
            (Value::Array(aa), Value::Array(ba)) => {
                let nested = diff_arrays(aa, ba);
                if !nested.is_empty() {
                    out.push(Value::Array(nested));
                }
            }
            // Different tags are never deep-equal, so this covers both
            // "unequal same-tag primitives" and "mismatched tags".
            (av, bv) => {
                if !deep_equal(av, bv) {
                    out.push(deep_clone(av));
                }
            }
        }
    }
    for av in a.iter().skip(overlap) {
        out.push(deep_clone(av));
    }
    out
}

//! In-place deep merge.

use json_tree_value::{JsonArray, JsonObject, Value};

use crate::clone::deep_clone;
use crate::error::AlgebraError;

/// Merges `source` into `target`, mutating `target` in place.
///
/// Both must be containers of the same tag, otherwise the call fails with
/// [`AlgebraError::TagMismatch`] and `target` is untouched.
///
/// Object case: for every key in `source`, when both sides hold objects the
/// merge recurses, so unrelated sibling keys in the target's nested object
/// survive; in every other case `target[key]` is replaced with a deep copy
/// of `source[key]`. Arrays are replaced wholesale at key-match points.
///
/// Array case: overlapping indices recurse when both elements are objects
/// or both are arrays, and are overwritten otherwise; a longer source has
/// its tail appended, a longer target keeps its extra elements.
///
/// The signature takes `target` exclusively and `source` shared, so a
/// self-aliased call cannot be written; callers wanting `merge(t, t)`
/// semantics clone the source first.
pub fn merge(target: &mut Value, source: &Value) -> Result<(), AlgebraError> {
    match (target, source) {
        (Value::Object(dst), Value::Object(src)) => {
            merge_objects(dst, src);
            Ok(())
        }
        (Value::Array(dst), Value::Array(src)) => {
            merge_arrays(dst, src);
            Ok(())
        }
        (target, source) => Err(AlgebraError::TagMismatch {
            left: target.type_name(),
            right: source.type_name(),
        }),
    }
}

fn merge_objects(dst: &mut JsonObject, src: &JsonObject) {
    for (key, sv) in src.iter() {
        let recursed = match (dst.get_mut(key), sv) {
            (Some(Value::Object(d)), Value::Object(s)) => {
                merge_objects(d, s);
                true
            }
            _ => false,
        };
        if !recursed {
            dst.insert(key, deep_clone(sv));
        }
    }
}

fn merge_arrays(dst: &mut JsonArray, src: &JsonArray) {
    let overlap = dst.len().min(src.len());
    for (dv, sv) in dst.iter_mut().zip(src.iter()) {
        match (dv, sv) {
            (Value::Object(d), Value::Object(s)) => merge_objects(d, s),
            (Value::Array(d), Value::Array(s)) => merge_arrays(d, s),
            (dv, sv) => *dv = deep_clone(sv),
        }
    }
    for sv in src.iter().skip(overlap) {
        dst.push(deep_clone(sv));
    }
}

//! Concatenation: a union of two trees where the left side wins ties.

use json_tree_value::JsonArray;
use json_tree_value::Value;

use crate::clone::deep_clone;
use crate::error::AlgebraError;
use crate::merge::merge;

/// Returns the union of `a` and `b`, with `a` winning every tie.
///
/// One null side yields a deep clone of the other; two null sides are an
/// [`AlgebraError::EmptyConcat`] error. Otherwise both must be containers
/// of the same tag.
///
/// Object case: layer `b` into a fresh object, then layer `a` on top, so
/// `a`'s values win key conflicts and nested objects combine under merge
/// semantics. Array case: the elements of `a` followed by the elements of
/// `b`, deep-copied, with no de-duplication.
///
/// Both operands are read-only here, so a self-aliased `concat(v, v)` is
/// harmless — the result is built in a fresh tree.
pub fn concat(a: &Value, b: &Value) -> Result<Value, AlgebraError> {
    match (a, b) {
        (Value::Null, Value::Null) => Err(AlgebraError::EmptyConcat),
        (Value::Null, other) | (other, Value::Null) => Ok(deep_clone(other)),
        (Value::Object(_), Value::Object(_)) => {
            let mut out = Value::new_object();
            merge(&mut out, b)?;
            merge(&mut out, a)?;
            Ok(out)
        }
        (Value::Array(a), Value::Array(b)) => {
            let mut out = JsonArray::with_capacity(a.len() + b.len());
            for v in a.iter() {
                out.push(deep_clone(v));
            }
            for v in b.iter() {
                out.push(deep_clone(v));
            }
            Ok(Value::Array(out))
        }
        (a, b) => Err(AlgebraError::TagMismatch {
            left: a.type_name(),
            right: b.type_name(),
        }),
    }
}

//! Diff matrix tests: key presence, nested emptiness filtering, array
//! index rules, and the wholesale tail.

use json_tree_algebra::{deep_equal, diff, AlgebraError};
use json_tree_value::Value;
use serde_json::json;

fn v(j: serde_json::Value) -> Value {
    Value::from(j)
}

fn diffed(a: serde_json::Value, b: serde_json::Value) -> Value {
    diff(&v(a), &v(b)).unwrap()
}

// ---------------------------------------------------------------------------
// Object case
// ---------------------------------------------------------------------------

#[test]
fn changed_primitive_keys_survive() {
    let out = diffed(
        json!({"name": "X", "version": 1}),
        json!({"name": "X", "version": 2}),
    );
    assert!(deep_equal(&out, &v(json!({"version": 1}))));
}

#[test]
fn keys_absent_from_b_are_included_verbatim() {
    let out = diffed(json!({"a": 1, "extra": {"x": 1}}), json!({"a": 1}));
    assert!(deep_equal(&out, &v(json!({"extra": {"x": 1}}))));
}

#[test]
fn keys_exclusive_to_b_are_ignored() {
    let out = diffed(json!({"a": 1}), json!({"a": 1, "b_only": 9}));
    assert!(deep_equal(&out, &v(json!({}))));
}

#[test]
fn equal_nested_objects_drop_out() {
    let out = diffed(
        json!({"cfg": {"x": 1}, "k": 2}),
        json!({"cfg": {"x": 1}, "k": 3}),
    );
    assert!(deep_equal(&out, &v(json!({"k": 2}))));
}

#[test]
fn nested_object_diff_recurses() {
    let out = diffed(
        json!({"cfg": {"x": 1, "y": 2}}),
        json!({"cfg": {"x": 1, "y": 9}}),
    );
    assert!(deep_equal(&out, &v(json!({"cfg": {"y": 2}}))));
}

#[test]
fn nested_array_diff_recurses_and_filters_empty() {
    let out = diffed(json!({"xs": [1, 2]}), json!({"xs": [1, 2]}));
    assert!(deep_equal(&out, &v(json!({}))));
    let out = diffed(json!({"xs": [1, 2]}), json!({"xs": [1, 9]}));
    assert!(deep_equal(&out, &v(json!({"xs": [2]}))));
}

#[test]
fn mismatched_tags_at_a_key_include_a() {
    let out = diffed(json!({"k": {"a": 1}}), json!({"k": [1]}));
    assert!(deep_equal(&out, &v(json!({"k": {"a": 1}}))));
}

// ---------------------------------------------------------------------------
// Array case
// ---------------------------------------------------------------------------

#[test]
fn equal_primitives_drop_unequal_survive() {
    let out = diffed(json!([1, 2, 3]), json!([1, 9, 3]));
    assert!(deep_equal(&out, &v(json!([2]))));
}

#[test]
fn tail_beyond_b_is_appended_wholesale() {
    let out = diffed(json!([1, 2, 3, 4]), json!([1]));
    assert!(deep_equal(&out, &v(json!([2, 3, 4]))));
    // Even equal-looking tail elements are not diffed.
    let out = diffed(json!([1, 1, 1]), json!([1]));
    assert!(deep_equal(&out, &v(json!([1, 1]))));
}

#[test]
fn nested_containers_recurse_and_filter_empty() {
    let out = diffed(json!([{"a": 1}, [2]]), json!([{"a": 1}, [2]]));
    assert!(deep_equal(&out, &v(json!([]))));
    let out = diffed(json!([{"a": 1}]), json!([{"a": 2}]));
    assert!(deep_equal(&out, &v(json!([{"a": 1}]))));
}

#[test]
fn mismatched_tag_elements_are_included_unconditionally() {
    let out = diffed(json!([{"a": 1}, "x"]), json!(["x", {"a": 1}]));
    assert!(deep_equal(&out, &v(json!([{"a": 1}, "x"]))));
}

// ---------------------------------------------------------------------------
// Preconditions
// ---------------------------------------------------------------------------

#[test]
fn mismatched_top_level_tags_error() {
    assert_eq!(
        diff(&v(json!({})), &v(json!([]))).unwrap_err(),
        AlgebraError::TagMismatch {
            left: "object",
            right: "array"
        }
    );
    assert!(diff(&v(json!(1)), &v(json!(1))).is_err());
}

#[test]
fn diff_never_mutates_its_inputs() {
    let a = v(json!({"k": [1, 2]}));
    let b = v(json!({"k": [1]}));
    let _ = diff(&a, &b).unwrap();
    assert!(deep_equal(&a, &v(json!({"k": [1, 2]}))));
    assert!(deep_equal(&b, &v(json!({"k": [1]}))));
}

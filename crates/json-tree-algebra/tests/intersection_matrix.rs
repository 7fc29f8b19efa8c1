//! Intersection matrix tests: common keys, nested emptiness filtering, and
//! the total-function null cases.

use json_tree_algebra::{deep_equal, intersection};
use json_tree_value::Value;
use serde_json::json;

fn v(j: serde_json::Value) -> Value {
    Value::from(j)
}

fn intersected(a: serde_json::Value, b: serde_json::Value) -> Value {
    intersection(&v(a), &v(b))
}

// ---------------------------------------------------------------------------
// Object case
// ---------------------------------------------------------------------------

#[test]
fn only_common_equal_primitives_survive() {
    let out = intersected(
        json!({"a": 1, "b": 2, "c": 3}),
        json!({"a": 1, "b": 9, "d": 3}),
    );
    assert!(deep_equal(&out, &v(json!({"a": 1}))));
}

#[test]
fn nested_objects_recurse() {
    let out = intersected(
        json!({"cfg": {"x": 1, "y": 2}}),
        json!({"cfg": {"x": 1, "y": 9}}),
    );
    assert!(deep_equal(&out, &v(json!({"cfg": {"x": 1}}))));
}

#[test]
fn empty_nested_results_are_dropped() {
    // One consistent rule: empty nested objects and empty nested arrays are
    // both dropped, inside objects and inside arrays alike.
    let out = intersected(json!({"o": {"x": 1}}), json!({"o": {"x": 2}}));
    assert!(deep_equal(&out, &v(json!({}))));
    let out = intersected(json!({"xs": [1]}), json!({"xs": [2]}));
    assert!(deep_equal(&out, &v(json!({}))));
    let out = intersected(json!([[1]]), json!([[2]]));
    assert!(deep_equal(&out, &v(json!([]))));
}

#[test]
fn common_nested_arrays_keep_common_prefix_elements() {
    let out = intersected(json!({"xs": [1, 2, 3]}), json!({"xs": [1, 9, 3]}));
    assert!(deep_equal(&out, &v(json!({"xs": [1, 3]}))));
}

#[test]
fn mismatched_value_tags_drop_the_key() {
    let out = intersected(json!({"k": 1}), json!({"k": "1"}));
    assert!(deep_equal(&out, &v(json!({}))));
    let out = intersected(json!({"k": {"a": 1}}), json!({"k": [1]}));
    assert!(deep_equal(&out, &v(json!({}))));
}

// ---------------------------------------------------------------------------
// Array case
// ---------------------------------------------------------------------------

#[test]
fn indices_beyond_the_shorter_side_are_ignored() {
    let out = intersected(json!([1, 2, 3, 4]), json!([1, 2]));
    assert!(deep_equal(&out, &v(json!([1, 2]))));
}

#[test]
fn array_elements_intersect_by_index() {
    let out = intersected(json!([{"a": 1, "b": 2}]), json!([{"a": 1}]));
    assert!(deep_equal(&out, &v(json!([{"a": 1}]))));
}

// ---------------------------------------------------------------------------
// Null and mismatch cases
// ---------------------------------------------------------------------------

#[test]
fn null_inputs_yield_null() {
    assert_eq!(intersection(&Value::Null, &v(json!({"a": 1}))), Value::Null);
    assert_eq!(intersection(&v(json!({"a": 1})), &Value::Null), Value::Null);
    assert_eq!(intersection(&Value::Null, &Value::Null), Value::Null);
}

#[test]
fn mismatched_top_level_tags_yield_null() {
    assert_eq!(intersection(&v(json!({})), &v(json!([]))), Value::Null);
    assert_eq!(intersection(&v(json!(1)), &v(json!(1))), Value::Null);
}

#[test]
fn intersection_never_mutates_its_inputs() {
    let a = v(json!({"k": {"x": 1}}));
    let b = v(json!({"k": {"x": 1}}));
    let out = intersection(&a, &b);
    assert!(deep_equal(&out, &a));
    assert!(deep_equal(&a, &b));
}

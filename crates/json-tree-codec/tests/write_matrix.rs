//! Writer matrix tests: both formatting strategies, the escaping profile,
//! binary payloads, and non-finite float handling.

use json_tree_codec::{parse, to_string, to_string_pretty, write_to, Format, JsonEncoder};
use json_tree_value::{JsonNumber, Value};

fn v(j: serde_json::Value) -> Value {
    Value::from(j)
}

// ---------------------------------------------------------------------------
// Compact strategy
// ---------------------------------------------------------------------------

#[test]
fn compact_inserts_no_whitespace() {
    let tree = v(serde_json::json!({"a": [1, true, null], "b": {"c": "x"}}));
    assert_eq!(to_string(&tree), r#"{"a":[1,true,null],"b":{"c":"x"}}"#);
}

#[test]
fn compact_empty_containers() {
    assert_eq!(to_string(&Value::new_object()), "{}");
    assert_eq!(to_string(&Value::new_array()), "[]");
}

#[test]
fn compact_scalars() {
    assert_eq!(to_string(&Value::Null), "null");
    assert_eq!(to_string(&Value::Bool(true)), "true");
    assert_eq!(to_string(&Value::Bool(false)), "false");
    assert_eq!(to_string(&Value::from(42i64)), "42");
    assert_eq!(to_string(&Value::from("hi")), r#""hi""#);
}

// ---------------------------------------------------------------------------
// Pretty strategy
// ---------------------------------------------------------------------------

#[test]
fn pretty_indents_by_depth() {
    let tree = v(serde_json::json!({"a": 1, "b": {"c": [2, 3]}}));
    let expected = "{\n  \"a\": 1,\n  \"b\": {\n    \"c\": [\n      2,\n      3\n    ]\n  }\n}";
    assert_eq!(to_string_pretty(&tree), expected);
}

#[test]
fn pretty_empty_containers_stay_inline() {
    assert_eq!(to_string_pretty(&Value::new_object()), "{}");
    assert_eq!(to_string_pretty(&Value::new_array()), "[]");
    let tree = v(serde_json::json!({"a": {}, "b": []}));
    assert_eq!(to_string_pretty(&tree), "{\n  \"a\": {},\n  \"b\": []\n}");
}

#[test]
fn pretty_indent_unit_is_configurable() {
    let tree = v(serde_json::json!({"a": [1]}));
    let encoder = JsonEncoder::pretty().with_indent_unit(4);
    assert_eq!(encoder.encode(&tree), "{\n    \"a\": [\n        1\n    ]\n}");
}

// ---------------------------------------------------------------------------
// Escaping profile
// ---------------------------------------------------------------------------

#[test]
fn escapes_quotes_backslashes_and_named_controls() {
    let tree = Value::from("a\"b\\c\u{8}d\u{c}e\nf\rg\th");
    assert_eq!(to_string(&tree), r#""a\"b\\c\bd\fe\nf\rg\th""#);
}

#[test]
fn escapes_other_control_characters_as_u00xx() {
    assert_eq!(
        to_string(&Value::from("\u{1}\u{1f}")),
        "\"\\u0001\\u001f\""
    );
}

#[test]
fn does_not_escape_slashes() {
    assert_eq!(to_string(&Value::from("a/b")), r#""a/b""#);
}

#[test]
fn passes_non_ascii_through_unescaped() {
    assert_eq!(to_string(&Value::from("日本")), "\"日本\"");
}

// ---------------------------------------------------------------------------
// Numbers and bytes
// ---------------------------------------------------------------------------

#[test]
fn float_origin_survives_in_text() {
    assert_eq!(to_string(&Value::from(2.0)), "2.0");
    assert_eq!(to_string(&Value::from(0.1)), "0.1");
    assert_eq!(to_string(&Value::from(2i64)), "2");
}

#[test]
fn non_finite_floats_serialize_as_null() {
    for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let mut tree = Value::new_object();
        tree.as_object_mut().unwrap().insert("k", f);
        assert_eq!(to_string(&tree), r#"{"k":null}"#);
        assert_eq!(to_string_pretty(&tree), "{\n  \"k\": null\n}");
    }
}

#[test]
fn bytes_serialize_as_quoted_base64() {
    let tree = Value::Bytes(vec![1, 2, 3]);
    assert_eq!(to_string(&tree), r#""AQID""#);
    let empty = Value::Bytes(Vec::new());
    assert_eq!(to_string(&empty), r#""""#);
}

#[test]
fn number_variants_round_trip_through_text() {
    let int = parse(&to_string(&Value::from(7i64))).unwrap();
    assert_eq!(int.as_number(), Some(JsonNumber::Int(7)));
    let float = parse(&to_string(&Value::from(7.0))).unwrap();
    assert_eq!(float.as_number(), Some(JsonNumber::Float(7.0)));
}

// ---------------------------------------------------------------------------
// Sink variant and buffer reuse
// ---------------------------------------------------------------------------

#[test]
fn write_to_emits_utf8_bytes() {
    let tree = v(serde_json::json!({"k": "日本"}));
    let mut sink = Vec::new();
    write_to(&tree, Format::Compact, &mut sink).unwrap();
    assert_eq!(sink, "{\"k\":\"日本\"}".as_bytes());
}

#[test]
fn repeated_encodes_are_stable() {
    // Pooled buffers are cleared on acquire, so repeated encodes on one
    // thread never leak content between calls.
    let encoder = JsonEncoder::compact();
    let big = v(serde_json::json!({"a": [1, 2, 3, 4, 5, 6, 7, 8]}));
    let small = v(serde_json::json!([9]));
    let first = encoder.encode(&big);
    assert_eq!(encoder.encode(&small), "[9]");
    assert_eq!(encoder.encode(&big), first);
}

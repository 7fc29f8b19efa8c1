//! Two-strategy JSON text writer.

use std::fmt::Write as _;
use std::io;

use base64::Engine as _;
use json_tree_value::{JsonArray, JsonObject, Value};

use crate::pool;

/// Formatting strategy for [`JsonEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// No inserted whitespace.
    Compact,
    /// One entry per line, indented by `(depth + 1) * indent_unit` spaces.
    Pretty,
}

/// Serializes [`Value`] trees to JSON text.
///
/// Escaping profile: `"`, `\`, and the named control escapes
/// (`\b \f \n \r \t`), with any other character below 0x20 as `\u00XX`.
/// `/` is not escaped. Non-finite floats serialize as `null` in both
/// formats, since a bare `NaN` token would not be valid JSON. `Bytes`
/// serialize as quoted standard base64.
pub struct JsonEncoder {
    format: Format,
    indent_unit: usize,
}

impl JsonEncoder {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            indent_unit: 2,
        }
    }

    pub fn compact() -> Self {
        Self::new(Format::Compact)
    }

    pub fn pretty() -> Self {
        Self::new(Format::Pretty)
    }

    /// Overrides the pretty-printing indent unit (spaces per depth level).
    pub fn with_indent_unit(mut self, indent_unit: usize) -> Self {
        self.indent_unit = indent_unit;
        self
    }

    /// Serializes `value` to a string.
    pub fn encode(&self, value: &Value) -> String {
        pool::with_thread_buffer(|buf| {
            self.write_value(buf, value, 0);
            buf.clone()
        })
    }

    /// Serializes `value` as UTF-8 into `sink`.
    pub fn encode_to<W: io::Write>(&self, value: &Value, sink: &mut W) -> io::Result<()> {
        pool::with_thread_buffer(|buf| {
            self.write_value(buf, value, 0);
            sink.write_all(buf.as_bytes())
        })
    }

    fn write_value(&self, out: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Null => out.push_str("null"),
            Value::Bool(true) => out.push_str("true"),
            Value::Bool(false) => out.push_str("false"),
            // JsonNumber's Display renders the JSON literal, including the
            // non-finite-to-null rule.
            Value::Number(n) => {
                let _ = write!(out, "{n}");
            }
            Value::String(s) => write_escaped(out, s),
            Value::Bytes(b) => {
                out.push('"');
                out.push_str(&base64::engine::general_purpose::STANDARD.encode(b));
                out.push('"');
            }
            Value::Array(arr) => self.write_array(out, arr, depth),
            Value::Object(obj) => self.write_object(out, obj, depth),
        }
    }

    fn write_array(&self, out: &mut String, arr: &JsonArray, depth: usize) {
        if arr.is_empty() {
            out.push_str("[]");
            return;
        }
        match self.format {
            Format::Compact => {
                out.push('[');
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.write_value(out, v, depth + 1);
                }
                out.push(']');
            }
            Format::Pretty => {
                out.push_str("[\n");
                for (i, v) in arr.iter().enumerate() {
                    if i > 0 {
                        out.push_str(",\n");
                    }
                    self.push_indent(out, depth + 1);
                    self.write_value(out, v, depth + 1);
                }
                out.push('\n');
                self.push_indent(out, depth);
                out.push(']');
            }
        }
    }

    fn write_object(&self, out: &mut String, obj: &JsonObject, depth: usize) {
        if obj.is_empty() {
            out.push_str("{}");
            return;
        }
        match self.format {
            Format::Compact => {
                out.push('{');
                for (i, (key, v)) in obj.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    write_escaped(out, key);
                    out.push(':');
                    self.write_value(out, v, depth + 1);
                }
                out.push('}');
            }
            Format::Pretty => {
                out.push_str("{\n");
                for (i, (key, v)) in obj.iter().enumerate() {
                    if i > 0 {
                        out.push_str(",\n");
                    }
                    self.push_indent(out, depth + 1);
                    write_escaped(out, key);
                    out.push_str(": ");
                    self.write_value(out, v, depth + 1);
                }
                out.push('\n');
                self.push_indent(out, depth);
                out.push('}');
            }
        }
    }

    fn push_indent(&self, out: &mut String, depth: usize) {
        for _ in 0..depth * self.indent_unit {
            out.push(' ');
        }
    }
}

fn write_escaped(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Serializes `value` with no inserted whitespace.
pub fn to_string(value: &Value) -> String {
    JsonEncoder::compact().encode(value)
}

/// Serializes `value` with the pretty strategy (2-space indent unit).
pub fn to_string_pretty(value: &Value) -> String {
    JsonEncoder::pretty().encode(value)
}

/// Serializes `value` as UTF-8 into `sink` under `format`.
pub fn write_to<W: io::Write>(value: &Value, format: Format, sink: &mut W) -> io::Result<()> {
    JsonEncoder::new(format).encode_to(value, sink)
}

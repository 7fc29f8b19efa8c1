//! [`JsonObject`] — insertion-ordered string-keyed container.

use base64::Engine as _;
use indexmap::IndexMap;

use crate::Value;

/// A mapping from unique text keys to [`Value`].
///
/// Keys are unique; inserting an existing key overwrites its value (last
/// write wins). Iteration follows insertion order, but equality is
/// order-insensitive — two objects with the same entries are equal however
/// they were built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonObject {
    entries: IndexMap<String, Value>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Looks up a key. Missing keys return `None`, never an error.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Inserts a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes a key, preserving the insertion order of the remaining
    /// entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Reads a key as `bool`, falling back to `default` when the key is
    /// missing or holds a different tag.
    pub fn get_bool_or(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    /// Reads a key as `i64` (integral floats coerce), falling back to
    /// `default`.
    pub fn get_i64_or(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(Value::Number(n)) => n.as_i64().unwrap_or(default),
            _ => default,
        }
    }

    /// Reads a key as `f64` (ints widen), falling back to `default`.
    pub fn get_f64_or(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            Some(Value::Number(n)) => n.as_f64(),
            _ => default,
        }
    }

    /// Reads a key as text without coercion, falling back to `default`.
    pub fn get_str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get(key) {
            Some(Value::String(s)) => s.as_str(),
            _ => default,
        }
    }

    /// Reads a key as text, coercing numbers and booleans to their literal
    /// form. Containers, bytes, and null fall back to `default`.
    pub fn get_string_or(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => default.to_owned(),
        }
    }

    /// Reads a key as a byte sequence. A string value is decoded as base64
    /// (the wire form of binary payloads); anything else falls back to
    /// `default`.
    pub fn get_bytes_or(&self, key: &str, default: &[u8]) -> Vec<u8> {
        match self.get(key) {
            Some(Value::Bytes(b)) => b.clone(),
            Some(Value::String(s)) => base64::engine::general_purpose::STANDARD
                .decode(s)
                .unwrap_or_else(|_| default.to_vec()),
            _ => default.to_vec(),
        }
    }
}

impl FromIterator<(String, Value)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

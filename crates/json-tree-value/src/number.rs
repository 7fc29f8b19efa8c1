//! [`JsonNumber`] — a number that remembers its integer or floating-point
//! origin.

use std::fmt;

/// A JSON number.
///
/// A token containing `.` or an exponent parses as [`JsonNumber::Float`];
/// otherwise [`JsonNumber::Int`]. The two variants are distinct payloads:
/// `Int(1)` is never equal to `Float(1.0)`. Read coercions ([`as_i64`],
/// [`as_f64`]) bridge the variants without changing the stored one.
///
/// The `Display` implementation renders the JSON literal text, which is also
/// the string coercion used by typed reads. Non-finite floats render as
/// `null` — the only representation that stays valid JSON.
///
/// [`as_i64`]: JsonNumber::as_i64
/// [`as_f64`]: JsonNumber::as_f64
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    Int(i64),
    Float(f64),
}

impl JsonNumber {
    pub fn is_int(&self) -> bool {
        matches!(self, JsonNumber::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, JsonNumber::Float(_))
    }

    /// Reads the number as an `i64`.
    ///
    /// An integral float within `i64` range coerces; anything else returns
    /// `None`.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            JsonNumber::Int(i) => Some(i),
            JsonNumber::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64
                {
                    Some(f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Reads the number as an `f64`. Integers widen; this never fails.
    pub fn as_f64(&self) -> f64 {
        match *self {
            JsonNumber::Int(i) => i as f64,
            JsonNumber::Float(f) => f,
        }
    }

    /// `true` unless the number is a non-finite float.
    pub fn is_finite(&self) -> bool {
        match *self {
            JsonNumber::Int(_) => true,
            JsonNumber::Float(f) => f.is_finite(),
        }
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            JsonNumber::Int(i) => write!(f, "{i}"),
            JsonNumber::Float(v) if !v.is_finite() => write!(f, "null"),
            // Debug formatting of f64 is the shortest round-trip text and
            // always keeps a `.0` or exponent, so a Float origin survives
            // re-parsing.
            JsonNumber::Float(v) => write!(f, "{v:?}"),
        }
    }
}

impl From<i64> for JsonNumber {
    fn from(i: i64) -> Self {
        JsonNumber::Int(i)
    }
}

impl From<i32> for JsonNumber {
    fn from(i: i32) -> Self {
        JsonNumber::Int(i as i64)
    }
}

impl From<u32> for JsonNumber {
    fn from(u: u32) -> Self {
        JsonNumber::Int(u as i64)
    }
}

impl From<u64> for JsonNumber {
    fn from(u: u64) -> Self {
        // A u64 beyond i64 range widens to a float, trading precision for
        // totality (the same rule serde interop applies).
        match i64::try_from(u) {
            Ok(i) => JsonNumber::Int(i),
            Err(_) => JsonNumber::Float(u as f64),
        }
    }
}

impl From<f64> for JsonNumber {
    fn from(f: f64) -> Self {
        JsonNumber::Float(f)
    }
}

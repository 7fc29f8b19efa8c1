//! json-tree — hierarchical JSON value model, text codec, and tree algebra.
//!
//! Text parses into a [`Value`] tree, trees combine through the algebra
//! operations, and any tree serializes back to text:
//!
//! ```
//! use json_tree::{diff, merge, parse, to_string};
//!
//! let mut config = parse(r#"{"name": "svc", "port": 80}"#)?;
//! let overrides = parse(r#"{"port": 8080, "debug": true}"#)?;
//!
//! merge(&mut config, &overrides)?;
//! assert_eq!(
//!     to_string(&config),
//!     r#"{"name":"svc","port":8080,"debug":true}"#
//! );
//!
//! let base = parse(r#"{"name": "svc", "port": 80}"#)?;
//! let changed = diff(&config, &base)?;
//! assert_eq!(to_string(&changed), r#"{"port":8080,"debug":true}"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use json_tree_value::{JsonArray, JsonNumber, JsonObject, TypeError, Value};

pub use json_tree_codec::{
    parse, parse_reader, parse_slice, to_string, to_string_pretty, write_to, BufferPool, Format,
    JsonEncoder, ParseError, Parser, Position, Tokenizer, DEFAULT_DEPTH_LIMIT,
};

pub use json_tree_algebra::{
    concat, copy_into, deep_clone, deep_equal, diff, intersection, merge, AlgebraError,
};

//! json-tree-codec — self-contained JSON text codec for json-tree values.
//!
//! Text flows in through the [`Tokenizer`] and [`Parser`] to produce a
//! [`Value`] tree, and back out through the [`JsonEncoder`] under one of two
//! formatting strategies ([`Format::Compact`], [`Format::Pretty`]).
//!
//! [`Value`]: json_tree_value::Value

mod encoder;
mod error;
mod parser;
mod pool;
mod tokenizer;

pub use encoder::{to_string, to_string_pretty, write_to, Format, JsonEncoder};
pub use error::{ParseError, Position};
pub use parser::{parse, parse_reader, parse_slice, Parser, DEFAULT_DEPTH_LIMIT};
pub use pool::BufferPool;
pub use tokenizer::Tokenizer;

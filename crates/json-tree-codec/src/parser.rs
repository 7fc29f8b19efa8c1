//! Recursive-descent JSON parser building native [`Value`] trees.

use std::io::Read;

use json_tree_value::{JsonArray, JsonObject, Value};

use crate::error::ParseError;
use crate::tokenizer::Tokenizer;

/// Default container nesting bound. Nesting past it is a reported
/// [`ParseError::DepthLimitExceeded`], not a stack overflow.
pub const DEFAULT_DEPTH_LIMIT: usize = 512;

/// Parses `text` into a [`Value`] tree.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    Parser::new(text).parse()
}

/// Parses UTF-8 `bytes` into a [`Value`] tree.
pub fn parse_slice(bytes: &[u8]) -> Result<Value, ParseError> {
    Parser::from_slice(bytes).parse()
}

/// Reads `reader` to end and parses the contents. Stream errors surface as
/// [`ParseError::Io`].
pub fn parse_reader(mut reader: impl Read) -> Result<Value, ParseError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse_slice(&buf)
}

/// Consumes a [`Tokenizer`] to build a [`Value`] tree.
///
/// Grammar: standard JSON — no trailing commas, no comments, one top-level
/// value. Dispatch is on the first non-whitespace character; after the
/// top-level value any remaining non-whitespace input is a fatal
/// trailing-content error.
pub struct Parser<'a> {
    tok: Tokenizer<'a>,
    depth_limit: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            tok: Tokenizer::new(input),
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }

    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self {
            tok: Tokenizer::from_slice(bytes),
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }

    /// Overrides the container nesting bound.
    pub fn with_depth_limit(mut self, limit: usize) -> Self {
        self.depth_limit = limit;
        self
    }

    /// Parses the single top-level value.
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let value = self.parse_value(0)?;
        self.tok.skip_whitespace();
        if !self.tok.is_eof() {
            return Err(ParseError::TrailingContent {
                at: self.tok.position(),
            });
        }
        Ok(value)
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.tok.skip_whitespace();
        match self.tok.peek() {
            None => Err(ParseError::UnexpectedEof {
                at: self.tok.position(),
            }),
            Some(b'{') => self.parse_object(depth),
            Some(b'[') => self.parse_array(depth),
            Some(b'"') => {
                self.tok.expect(b'"')?;
                Ok(Value::String(self.tok.read_string()?))
            }
            Some(b) if b == b'-' || b.is_ascii_digit() => {
                Ok(Value::Number(self.tok.read_number()?))
            }
            Some(b) => {
                if self.tok.match_literal("true") {
                    Ok(Value::Bool(true))
                } else if self.tok.match_literal("false") {
                    Ok(Value::Bool(false))
                } else if self.tok.match_literal("null") {
                    Ok(Value::Null)
                } else {
                    Err(ParseError::UnexpectedCharacter {
                        found: b as char,
                        at: self.tok.position(),
                    })
                }
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.check_depth(depth)?;
        self.tok.expect(b'{')?;
        let mut obj = JsonObject::new();
        self.tok.skip_whitespace();
        if self.tok.peek() == Some(b'}') {
            self.tok.next();
            return Ok(Value::Object(obj));
        }
        loop {
            self.tok.skip_whitespace();
            self.tok.expect(b'"')?;
            let key = self.tok.read_string()?;
            self.tok.skip_whitespace();
            self.tok.expect(b':')?;
            let value = self.parse_value(depth + 1)?;
            // Duplicate keys: last write wins.
            obj.insert(key, value);
            self.tok.skip_whitespace();
            let at = self.tok.position();
            match self.tok.next() {
                Some(b',') => {}
                Some(b'}') => return Ok(Value::Object(obj)),
                Some(b) => {
                    return Err(ParseError::UnexpectedCharacter {
                        found: b as char,
                        at,
                    })
                }
                None => return Err(ParseError::UnexpectedEof { at }),
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.check_depth(depth)?;
        self.tok.expect(b'[')?;
        let mut arr = JsonArray::new();
        self.tok.skip_whitespace();
        if self.tok.peek() == Some(b']') {
            self.tok.next();
            return Ok(Value::Array(arr));
        }
        loop {
            let value = self.parse_value(depth + 1)?;
            arr.push(value);
            self.tok.skip_whitespace();
            let at = self.tok.position();
            match self.tok.next() {
                Some(b',') => {}
                Some(b']') => return Ok(Value::Array(arr)),
                Some(b) => {
                    return Err(ParseError::UnexpectedCharacter {
                        found: b as char,
                        at,
                    })
                }
                None => return Err(ParseError::UnexpectedEof { at }),
            }
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), ParseError> {
        if depth >= self.depth_limit {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.depth_limit,
                at: self.tok.position(),
            });
        }
        Ok(())
    }
}

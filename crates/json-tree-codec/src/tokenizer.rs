//! Byte-cursor scanner with position tracking.

use json_tree_value::JsonNumber;

use crate::error::{ParseError, Position};

/// A character-stream scanner over raw input bytes.
///
/// Tracks the absolute offset plus 1-indexed line and column for
/// diagnostics. Operates on bytes; UTF-8 is validated lazily inside string
/// contents, the only place non-ASCII input is legal.
pub struct Tokenizer<'a> {
    bytes: &'a [u8],
    cursor: usize,
    line: usize,
    column: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::from_slice(input.as_bytes())
    }

    pub fn from_slice(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            cursor: 0,
            line: 1,
            column: 1,
        }
    }

    /// The position of the next unconsumed byte.
    pub fn position(&self) -> Position {
        Position {
            offset: self.cursor,
            line: self.line,
            column: self.column,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.cursor >= self.bytes.len()
    }

    /// The next byte without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    /// Consumes and returns the next byte, updating line/column tracking.
    pub fn next(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.cursor += 1;
        if byte == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(byte)
    }

    /// Consumes the next byte, requiring it to be `expected`.
    pub fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        let at = self.position();
        match self.next() {
            Some(b) if b == expected => Ok(()),
            Some(b) => Err(ParseError::UnexpectedCharacter {
                found: b as char,
                at,
            }),
            None => Err(ParseError::UnexpectedEof { at }),
        }
    }

    /// Skips space, tab, newline, and carriage return.
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' | b'\n' | b'\r' => {
                    self.next();
                }
                _ => break,
            }
        }
    }

    /// Skips leading whitespace, then consumes the input byte-by-byte while
    /// it matches `literal`, stopping at the first mismatch.
    ///
    /// Matched prefix bytes stay consumed on failure, so callers must only
    /// use this where no other production can match the same position — the
    /// grammar guarantees that with first-character dispatch.
    pub fn match_literal(&mut self, literal: &str) -> bool {
        self.skip_whitespace();
        for expected in literal.bytes() {
            match self.peek() {
                Some(b) if b == expected => {
                    self.next();
                }
                _ => return false,
            }
        }
        true
    }

    /// Reads the rest of a string whose opening `"` has already been
    /// consumed, decoding escapes, and consumes the closing `"`.
    ///
    /// Escapes: `\" \\ \/ \b \f \n \r \t` and `\uXXXX` (exactly 4 hex
    /// digits, one UTF-16 code unit). Surrogate pairs are not joined; an
    /// unpaired surrogate decodes to U+FFFD.
    pub fn read_string(&mut self) -> Result<String, ParseError> {
        let mut out = String::new();
        loop {
            // Consume the raw run up to the next quote or escape. `"` and
            // `\` are ASCII, so the run always ends on a char boundary.
            let start = self.cursor;
            while let Some(b) = self.peek() {
                if b == b'"' || b == b'\\' {
                    break;
                }
                self.next();
            }
            if self.cursor > start {
                match std::str::from_utf8(&self.bytes[start..self.cursor]) {
                    Ok(run) => out.push_str(run),
                    Err(err) => {
                        return Err(ParseError::InvalidUtf8 {
                            at: Position {
                                offset: start + err.valid_up_to(),
                                line: self.line,
                                column: self.column,
                            },
                        })
                    }
                }
            }
            let at = self.position();
            match self.next() {
                None => return Err(ParseError::UnterminatedString { at }),
                Some(b'"') => return Ok(out),
                Some(_backslash) => self.read_escape(&mut out, at)?,
            }
        }
    }

    fn read_escape(&mut self, out: &mut String, at: Position) -> Result<(), ParseError> {
        match self.next() {
            None => Err(ParseError::UnterminatedString { at }),
            Some(b'"') => {
                out.push('"');
                Ok(())
            }
            Some(b'\\') => {
                out.push('\\');
                Ok(())
            }
            Some(b'/') => {
                out.push('/');
                Ok(())
            }
            Some(b'b') => {
                out.push('\u{0008}');
                Ok(())
            }
            Some(b'f') => {
                out.push('\u{000C}');
                Ok(())
            }
            Some(b'n') => {
                out.push('\n');
                Ok(())
            }
            Some(b'r') => {
                out.push('\r');
                Ok(())
            }
            Some(b't') => {
                out.push('\t');
                Ok(())
            }
            Some(b'u') => {
                let mut code: u32 = 0;
                for _ in 0..4 {
                    let digit = self
                        .next()
                        .and_then(|b| (b as char).to_digit(16))
                        .ok_or(ParseError::InvalidUnicodeEscape { at })?;
                    code = code * 16 + digit;
                }
                out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
                Ok(())
            }
            Some(other) => Err(ParseError::InvalidEscape {
                found: other as char,
                at,
            }),
        }
    }

    /// Lexes a number: `'-'? digit+ ('.' digit+)? ([eE] [+-]? digit+)?`.
    ///
    /// A token with `.` or an exponent yields a `Float`; otherwise an `Int`
    /// (an integer literal that overflows `i64` also falls back to `Float`).
    pub fn read_number(&mut self) -> Result<JsonNumber, ParseError> {
        let start = self.cursor;
        let mut is_float = false;

        if self.peek() == Some(b'-') {
            self.next();
        }
        self.read_digits()?;
        if self.peek() == Some(b'.') {
            is_float = true;
            self.next();
            self.read_digits()?;
        }
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            is_float = true;
            self.next();
            if matches!(self.peek(), Some(b'+') | Some(b'-')) {
                self.next();
            }
            self.read_digits()?;
        }

        // The token is ASCII by construction.
        let text = std::str::from_utf8(&self.bytes[start..self.cursor]).map_err(|_| {
            ParseError::InvalidNumber {
                at: self.position(),
            }
        })?;
        if !is_float {
            if let Ok(i) = text.parse::<i64>() {
                return Ok(JsonNumber::Int(i));
            }
        }
        text.parse::<f64>()
            .map(JsonNumber::Float)
            .map_err(|_| ParseError::InvalidNumber {
                at: self.position(),
            })
    }

    fn read_digits(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Some(b) if b.is_ascii_digit() => {}
            Some(_) => {
                return Err(ParseError::ExpectedDigit {
                    at: self.position(),
                })
            }
            None => {
                return Err(ParseError::UnexpectedEof {
                    at: self.position(),
                })
            }
        }
        while matches!(self.peek(), Some(b) if b.is_ascii_digit()) {
            self.next();
        }
        Ok(())
    }
}

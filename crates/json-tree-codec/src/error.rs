//! Positioned syntax errors for the tokenizer and parser.

use std::fmt;

use thiserror::Error;

/// Where in the input a syntax error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Absolute byte offset from the start of the input.
    pub offset: usize,
    /// 1-indexed line.
    pub line: usize,
    /// 1-indexed column, counted in bytes.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, column {} (byte {})",
            self.line, self.column, self.offset
        )
    }
}

/// A malformed-input error. Always fatal to the parse call that raised it;
/// the parser never recovers, retries, or returns a partial tree.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unexpected character `{found}` at {at}")]
    UnexpectedCharacter { found: char, at: Position },
    #[error("unexpected end of input at {at}")]
    UnexpectedEof { at: Position },
    #[error("unterminated string at {at}")]
    UnterminatedString { at: Position },
    #[error("invalid escape `\\{found}` at {at}")]
    InvalidEscape { found: char, at: Position },
    #[error("invalid \\u escape at {at}: expected 4 hex digits")]
    InvalidUnicodeEscape { at: Position },
    #[error("expected digit at {at}")]
    ExpectedDigit { at: Position },
    #[error("invalid number at {at}")]
    InvalidNumber { at: Position },
    #[error("invalid UTF-8 at {at}")]
    InvalidUtf8 { at: Position },
    #[error("trailing content after top-level value at {at}")]
    TrailingContent { at: Position },
    #[error("nesting depth limit of {limit} exceeded at {at}")]
    DepthLimitExceeded { limit: usize, at: Position },
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// The input position the error points at, when it has one (`Io` errors
    /// come from the underlying stream and carry none).
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::UnexpectedCharacter { at, .. }
            | ParseError::UnexpectedEof { at }
            | ParseError::UnterminatedString { at }
            | ParseError::InvalidEscape { at, .. }
            | ParseError::InvalidUnicodeEscape { at }
            | ParseError::ExpectedDigit { at }
            | ParseError::InvalidNumber { at }
            | ParseError::InvalidUtf8 { at }
            | ParseError::TrailingContent { at }
            | ParseError::DepthLimitExceeded { at, .. } => Some(*at),
            ParseError::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_position() {
        let err = ParseError::UnexpectedCharacter {
            found: 'x',
            at: Position {
                offset: 4,
                line: 2,
                column: 1,
            },
        };
        assert_eq!(
            err.to_string(),
            "unexpected character `x` at line 2, column 1 (byte 4)"
        );
    }
}

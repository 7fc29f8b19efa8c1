//! Structural precondition errors for the tree algebra.

use thiserror::Error;

/// Raised when an operation's structural preconditions do not hold. Always
/// fatal to the call; the target tree is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// The two operands must be containers of the same tag.
    #[error("operands must be containers of the same kind: {left} vs {right}")]
    TagMismatch {
        left: &'static str,
        right: &'static str,
    },
    /// Both concat operands were null — there is nothing to concatenate.
    #[error("cannot concatenate two null values")]
    EmptyConcat,
}

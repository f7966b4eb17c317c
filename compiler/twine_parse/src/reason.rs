//! Failure reasons.

use thiserror::Error;

/// Attempted to read past the end of the source.
///
/// Returned by [`Cursor`](crate::Cursor) reads. Primitives convert it into a
/// [`Reason::EndOfInput`] failure at the position of the attempted read; it
/// never travels past the primitive layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("reached end of input at offset {offset}")]
pub struct EndOfInput {
    offset: usize,
}

impl EndOfInput {
    pub(crate) fn new(offset: usize) -> Self {
        EndOfInput { offset }
    }

    /// Byte offset at which the read was attempted.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Why a parser failed.
///
/// Reasons are small owned values so failures stay cheap on the hot
/// backtracking path; the human-readable text is only produced on `Display`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Reason {
    /// A read ran past the end of the source.
    #[error("reached end of input")]
    EndOfInput,

    /// `literal` read a different character.
    #[error("found `{}`, expected `{}`", .found.escape_debug(), .expected.escape_debug())]
    Mismatch { found: char, expected: char },

    /// `none_of` read a character from its excluded set.
    #[error("unexpected `{}`", .found.escape_debug())]
    Excluded { found: char },

    /// `satisfies` read a character its predicate rejected.
    #[error("found `{}`, expected {expected}", .found.escape_debug())]
    Unsatisfied { found: char, expected: &'static str },

    /// `validate` or `validate_sequence` rejected a parsed value.
    #[error("validation failed")]
    ValidationFailed,

    /// `end_of_input` matched a prefix but input remains.
    #[error("cannot reach end of input")]
    TrailingInput,
}

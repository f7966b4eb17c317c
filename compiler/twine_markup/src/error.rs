//! Owned parse failure.

use thiserror::Error;
use twine_parse::{Failure, LinePosition, Reason};

/// A document failure detached from the source text.
///
/// [`Failure`] borrows the source through its cursor; `ParseError` keeps
/// only the reason and where it was reported, so it can be returned from
/// functions that own the input.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Failed on {position}: {reason}")]
pub struct ParseError {
    reason: Reason,
    position: LinePosition,
    offset: usize,
}

impl ParseError {
    pub fn reason(&self) -> &Reason {
        &self.reason
    }

    /// Zero-based `(line, column)` of the failure.
    pub fn position(&self) -> LinePosition {
        self.position
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Byte offset of the failure in the source.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl From<Failure<'_>> for ParseError {
    fn from(failure: Failure<'_>) -> Self {
        ParseError {
            position: failure.position(),
            offset: failure.at().offset(),
            reason: failure.into_reason(),
        }
    }
}

//! Parse outcome: success with a value, or failure with a reason.
//!
//! `Outcome` is the uniform return channel of every parser. Ordinary grammar
//! mismatches are data, not panics, so combinators can be written
//! generically and decide for themselves whether to propagate, relocate or
//! recover from a failure.
//!
//! | Variant | Carries | Produced by |
//! |---------|---------|-------------|
//! | `Success` | next cursor + value | any parser that matched |
//! | `Failure` | reason + failing cursor | mismatch, validation, end of input |
//!
//! The failing cursor is stored instead of an eager `(line, column)` pair.
//! Failures are created and discarded constantly during alternation and
//! repetition, so the O(offset) line scan is deferred until someone asks
//! for [`Failure::position`].

use std::fmt;

use crate::{Cursor, LinePosition, Reason};

/// A parser failure: why it failed and where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure<'s> {
    reason: Reason,
    at: Cursor<'s>,
}

impl<'s> Failure<'s> {
    #[cold]
    pub fn new(reason: Reason, at: Cursor<'s>) -> Self {
        Failure { reason, at }
    }

    pub fn reason(&self) -> &Reason {
        &self.reason
    }

    pub fn into_reason(self) -> Reason {
        self.reason
    }

    /// Cursor at which the failure is reported.
    pub fn at(&self) -> Cursor<'s> {
        self.at
    }

    /// Zero-based `(line, column)` at which the failure is reported.
    pub fn position(&self) -> LinePosition {
        self.at.line_position()
    }

    /// Report the same reason at a different cursor.
    ///
    /// Used by combinators that report failures at their own start position
    /// (`one_or_more`, `repeat`) rather than where the inner parser stopped.
    #[must_use]
    pub fn relocate(self, at: Cursor<'s>) -> Self {
        Failure {
            reason: self.reason,
            at,
        }
    }
}

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed on {}: {}", self.position(), self.reason)
    }
}

/// Result of applying a parser to a cursor.
///
/// # Invariant
///
/// Exactly one variant is populated. Reading the value of a `Failure`
/// through [`value`](Self::value) or [`into_value`](Self::into_value) is a
/// programming error and panics.
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<'s, T> {
    /// The parser matched.
    Success {
        /// Cursor just past the consumed input.
        cursor: Cursor<'s>,
        /// The parsed value.
        value: T,
    },

    /// The parser did not match.
    Failure(Failure<'s>),
}

impl<'s, T> Outcome<'s, T> {
    // === Constructors ===

    #[inline]
    pub fn success(cursor: Cursor<'s>, value: T) -> Self {
        Outcome::Success { cursor, value }
    }

    #[cold]
    pub fn failure(reason: Reason, at: Cursor<'s>) -> Self {
        Outcome::Failure(Failure::new(reason, at))
    }

    // === Predicates ===

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    // === Accessors ===

    /// Cursor after the match, or the cursor a failure is reported at.
    pub fn cursor(&self) -> Cursor<'s> {
        match self {
            Outcome::Success { cursor, .. } => *cursor,
            Outcome::Failure(failure) => failure.at(),
        }
    }

    /// Borrow the parsed value.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Outcome::Success { value, .. } => value,
            Outcome::Failure(failure) => {
                panic!("called `Outcome::value()` on a failure: {failure}")
            }
        }
    }

    /// Take the parsed value.
    ///
    /// # Panics
    ///
    /// Panics if this is a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Outcome::Success { value, .. } => value,
            Outcome::Failure(failure) => {
                panic!("called `Outcome::into_value()` on a failure: {failure}")
            }
        }
    }

    /// The failure reason, or `None` on success.
    pub fn reason(&self) -> Option<&Reason> {
        match self {
            Outcome::Success { .. } => None,
            Outcome::Failure(failure) => Some(failure.reason()),
        }
    }

    /// Zero-based `(line, column)` of [`cursor`](Self::cursor).
    pub fn position(&self) -> LinePosition {
        self.cursor().line_position()
    }

    // === Transformations ===

    /// Map the success value, passing failures through unchanged.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<'s, U> {
        match self {
            Outcome::Success { cursor, value } => Outcome::Success {
                cursor,
                value: f(value),
            },
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Convert to a `Result` of the value and the next cursor.
    pub fn into_result(self) -> Result<(T, Cursor<'s>), Failure<'s>> {
        match self {
            Outcome::Success { cursor, value } => Ok((value, cursor)),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<'s, T> From<Outcome<'s, T>> for Result<(T, Cursor<'s>), Failure<'s>> {
    fn from(outcome: Outcome<'s, T>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

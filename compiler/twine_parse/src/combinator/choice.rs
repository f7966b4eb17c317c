//! First-match alternation.

use crate::{Cursor, Outcome, Parser};

/// Tries `first`, falling back to `second`. Created by [`alternation`].
#[derive(Clone, Debug)]
pub struct Alternation<A, B> {
    first: A,
    second: B,
}

/// Try `first`; if it fails, run `second` from the *same* cursor.
///
/// This is PEG-style ordered choice, not longest match. Whatever `first`
/// consumed before failing is discarded, and `second`'s outcome, success or
/// failure, is returned as is. Failures of the two branches are not merged.
pub fn alternation<A, B>(first: A, second: B) -> Alternation<A, B>
where
    A: Parser,
    B: Parser<Output = A::Output>,
{
    Alternation { first, second }
}

impl<A, B> Parser for Alternation<A, B>
where
    A: Parser,
    B: Parser<Output = A::Output>,
{
    type Output = A::Output;

    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, A::Output> {
        match self.first.parse(cursor) {
            matched @ Outcome::Success { .. } => matched,
            Outcome::Failure(_) => self.second.parse(cursor),
        }
    }
}

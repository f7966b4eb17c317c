//! End-of-input anchoring.

use crate::{Cursor, Outcome, Parser, Reason};

/// Requires the inner parser to consume all remaining input.
/// Created by [`end_of_input`].
#[derive(Clone, Debug)]
pub struct AtEnd<P> {
    parser: P,
}

/// Succeed only if `parser` succeeds *and* leaves nothing unread.
///
/// Meant for the root of a grammar. Leftover input fails with
/// [`Reason::TrailingInput`] at the cursor where the leftover begins, which
/// is the furthest point the grammar accepted.
pub fn end_of_input<P: Parser>(parser: P) -> AtEnd<P> {
    AtEnd { parser }
}

impl<P: Parser> Parser for AtEnd<P> {
    type Output = P::Output;

    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, P::Output> {
        let (cursor, value) = chain!(self.parser.parse(cursor));
        if cursor.is_at_end() {
            Outcome::success(cursor, value)
        } else {
            Outcome::failure(Reason::TrailingInput, cursor)
        }
    }
}

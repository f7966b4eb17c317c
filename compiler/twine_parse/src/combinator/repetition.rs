//! Repetition: zero-or-more, one-or-more and exact counts.
//!
//! All three stop at the first failing attempt. On success the cursor is
//! left after the last *successful* attempt, so whatever the failing attempt
//! consumed is discarded.

use crate::{Cursor, Outcome, Parser};

/// Zero or more repetitions. Created by [`many`].
#[derive(Clone, Debug)]
pub struct Many<P> {
    parser: P,
}

/// Apply `parser` until it fails, collecting the values in order.
///
/// Never fails: zero matches yields an empty `Vec` at the original cursor.
///
/// An attempt that succeeds without consuming input is collected once and
/// ends the loop, so a zero-width parser cannot spin forever.
pub fn many<P: Parser>(parser: P) -> Many<P> {
    Many { parser }
}

impl<P: Parser> Parser for Many<P> {
    type Output = Vec<P::Output>;

    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        let (cursor, values) = collect_rest(&self.parser, cursor, Vec::new());
        Outcome::success(cursor, values)
    }
}

/// One or more repetitions. Created by [`one_or_more`].
#[derive(Clone, Debug)]
pub struct OneOrMore<P> {
    parser: P,
}

/// Like [`many`], but at least one match is required.
///
/// If the first attempt fails, its reason is reported at the cursor
/// `one_or_more` started from.
pub fn one_or_more<P: Parser>(parser: P) -> OneOrMore<P> {
    OneOrMore { parser }
}

impl<P: Parser> Parser for OneOrMore<P> {
    type Output = Vec<P::Output>;

    fn parse<'s>(&self, start: Cursor<'s>) -> Outcome<'s, Self::Output> {
        let (cursor, first) = match self.parser.parse(start) {
            Outcome::Success { cursor, value } => (cursor, value),
            Outcome::Failure(failure) => return Outcome::Failure(failure.relocate(start)),
        };
        let values = vec![first];
        if cursor.offset() == start.offset() {
            return Outcome::success(cursor, values);
        }
        let (cursor, values) = collect_rest(&self.parser, cursor, values);
        Outcome::success(cursor, values)
    }
}

/// Exactly `count` repetitions. Created by [`repeat`].
#[derive(Clone, Debug)]
pub struct Repeat<P> {
    parser: P,
    count: usize,
}

/// Apply `parser` exactly `count` times in sequence.
///
/// The first failing attempt fails the whole repetition: its reason is
/// reported at the cursor `repeat` started from and partial results are
/// dropped. `repeat(p, 0)` always succeeds with an empty `Vec`.
pub fn repeat<P: Parser>(parser: P, count: usize) -> Repeat<P> {
    Repeat { parser, count }
}

impl<P: Parser> Parser for Repeat<P> {
    type Output = Vec<P::Output>;

    fn parse<'s>(&self, start: Cursor<'s>) -> Outcome<'s, Self::Output> {
        let mut values = Vec::with_capacity(self.count);
        let mut cursor = start;
        for _ in 0..self.count {
            match self.parser.parse(cursor) {
                Outcome::Success {
                    cursor: next,
                    value,
                } => {
                    values.push(value);
                    cursor = next;
                }
                Outcome::Failure(failure) => return Outcome::Failure(failure.relocate(start)),
            }
        }
        Outcome::success(cursor, values)
    }
}

/// Keep applying `parser` from `cursor`, appending to `values`, until an
/// attempt fails or stops making progress.
fn collect_rest<'s, P: Parser>(
    parser: &P,
    mut cursor: Cursor<'s>,
    mut values: Vec<P::Output>,
) -> (Cursor<'s>, Vec<P::Output>) {
    loop {
        match parser.parse(cursor) {
            Outcome::Success {
                cursor: next,
                value,
            } => {
                values.push(value);
                if next.offset() == cursor.offset() {
                    return (next, values);
                }
                cursor = next;
            }
            Outcome::Failure(_) => return (cursor, values),
        }
    }
}

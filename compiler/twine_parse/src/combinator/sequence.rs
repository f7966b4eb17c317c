//! Sequencing: run two parsers back to back.

use crate::{Cursor, Outcome, Parser, Reason};

/// Runs `first`, then `second` on the remaining input, and combines both
/// values. Created by [`sequence`].
#[derive(Clone, Debug)]
pub struct Sequence<A, B, F> {
    first: A,
    second: B,
    combine: F,
}

/// Run `first` then `second`, combining their values with `combine`.
///
/// A failure of either parser is returned unchanged, so it points at the
/// character that did not match rather than at the start of the sequence.
pub fn sequence<A, B, F, C>(first: A, second: B, combine: F) -> Sequence<A, B, F>
where
    A: Parser,
    B: Parser,
    F: Fn(A::Output, B::Output) -> C,
{
    Sequence {
        first,
        second,
        combine,
    }
}

impl<A, B, F, C> Parser for Sequence<A, B, F>
where
    A: Parser,
    B: Parser,
    F: Fn(A::Output, B::Output) -> C,
{
    type Output = C;

    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, C> {
        let (cursor, first) = chain!(self.first.parse(cursor));
        let (cursor, second) = chain!(self.second.parse(cursor));
        Outcome::success(cursor, (self.combine)(first, second))
    }
}

fn keep_left<L, R>(left: L, _right: R) -> L {
    left
}

fn keep_right<L, R>(_left: L, right: R) -> R {
    right
}

fn keep_neither<L, R>(_left: L, _right: R) {}

/// Sequence keeping the first value. Created by [`left`].
pub type Left<A, B> =
    Sequence<A, B, fn(<A as Parser>::Output, <B as Parser>::Output) -> <A as Parser>::Output>;

/// Sequence keeping the second value. Created by [`right`].
pub type Right<A, B> =
    Sequence<A, B, fn(<A as Parser>::Output, <B as Parser>::Output) -> <B as Parser>::Output>;

/// Sequence discarding both values. Created by [`none`].
pub type Neither<A, B> = Sequence<A, B, fn(<A as Parser>::Output, <B as Parser>::Output)>;

/// Run `first` then `second`, keeping the value of `first`.
pub fn left<A: Parser, B: Parser>(first: A, second: B) -> Left<A, B> {
    sequence(first, second, keep_left as fn(_, _) -> _)
}

/// Run `first` then `second`, keeping the value of `second`.
pub fn right<A: Parser, B: Parser>(first: A, second: B) -> Right<A, B> {
    sequence(first, second, keep_right as fn(_, _) -> _)
}

/// Run `first` then `second`, discarding both values.
pub fn none<A: Parser, B: Parser>(first: A, second: B) -> Neither<A, B> {
    sequence(first, second, keep_neither as fn(_, _))
}

/// A sequence whose pair of values must pass a cross-field check.
/// Created by [`validate_sequence`].
#[derive(Clone, Debug)]
pub struct ValidateSequence<A, B, F, V> {
    first: A,
    second: B,
    combine: F,
    predicate: V,
}

/// Run `first` then `second`, and accept the pair only if `predicate`
/// holds.
///
/// Inner failures propagate unchanged, exactly as in [`sequence`]. A
/// rejected pair fails with [`Reason::ValidationFailed`] at the cursor the
/// sequence started from: the whole construct is wrong, not one character.
pub fn validate_sequence<A, B, F, V, C>(
    first: A,
    second: B,
    combine: F,
    predicate: V,
) -> ValidateSequence<A, B, F, V>
where
    A: Parser,
    B: Parser,
    F: Fn(A::Output, B::Output) -> C,
    V: Fn(&A::Output, &B::Output) -> bool,
{
    ValidateSequence {
        first,
        second,
        combine,
        predicate,
    }
}

impl<A, B, F, V, C> Parser for ValidateSequence<A, B, F, V>
where
    A: Parser,
    B: Parser,
    F: Fn(A::Output, B::Output) -> C,
    V: Fn(&A::Output, &B::Output) -> bool,
{
    type Output = C;

    fn parse<'s>(&self, start: Cursor<'s>) -> Outcome<'s, C> {
        let (cursor, first) = chain!(self.first.parse(start));
        let (cursor, second) = chain!(self.second.parse(cursor));
        if (self.predicate)(&first, &second) {
            Outcome::success(cursor, (self.combine)(first, second))
        } else {
            Outcome::failure(Reason::ValidationFailed, start)
        }
    }
}

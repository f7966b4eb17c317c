//! The `Parser` trait and its fluent combinator methods.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::combinator::{
    self, Alternation, AtEnd, Chars, IntoText, Left, Many, Map, Neither, OneOrMore, Repeat, Right,
    Sequence, Text, Validate, ValidateSequence,
};
use crate::{Cursor, Outcome};

/// A parser producing values of type `Output`.
///
/// Parsers are pure: applying one never mutates it, so a composed grammar
/// can be reused across inputs and shared between threads.
///
/// The combinator methods below are the fluent form of the free functions
/// in [`combinator`]; `a.left(b)` and `combinator::left(a, b)` build the
/// same parser.
pub trait Parser {
    type Output;

    /// Apply the parser at `cursor`.
    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output>;

    /// Apply the parser to the start of `source`.
    fn run<'s>(&self, source: &'s str) -> Outcome<'s, Self::Output> {
        self.parse(Cursor::new(source))
    }

    // === Sequencing ===

    /// Run `self` then `second`, combining both values.
    fn then<B, F, C>(self, second: B, combine: F) -> Sequence<Self, B, F>
    where
        Self: Sized,
        B: Parser,
        F: Fn(Self::Output, B::Output) -> C,
    {
        combinator::sequence(self, second, combine)
    }

    /// Run `self` then `second`, keeping the value of `self`.
    fn left<B: Parser>(self, second: B) -> Left<Self, B>
    where
        Self: Sized,
    {
        combinator::left(self, second)
    }

    /// Run `self` then `second`, keeping the value of `second`.
    fn right<B: Parser>(self, second: B) -> Right<Self, B>
    where
        Self: Sized,
    {
        combinator::right(self, second)
    }

    /// Run `self` then `second`, discarding both values.
    fn none<B: Parser>(self, second: B) -> Neither<Self, B>
    where
        Self: Sized,
    {
        combinator::none(self, second)
    }

    /// Run `self` then `second`, then check both values with `predicate`.
    ///
    /// A rejected pair fails at the position `self` started from.
    fn validate_sequence<B, F, V, C>(
        self,
        second: B,
        combine: F,
        predicate: V,
    ) -> ValidateSequence<Self, B, F, V>
    where
        Self: Sized,
        B: Parser,
        F: Fn(Self::Output, B::Output) -> C,
        V: Fn(&Self::Output, &B::Output) -> bool,
    {
        combinator::validate_sequence(self, second, combine, predicate)
    }

    // === Choice ===

    /// Try `self`; on failure, try `second` from the same cursor.
    fn or<B>(self, second: B) -> Alternation<Self, B>
    where
        Self: Sized,
        B: Parser<Output = Self::Output>,
    {
        combinator::alternation(self, second)
    }

    // === Repetition ===

    /// Zero or more repetitions. Never fails.
    fn many(self) -> Many<Self>
    where
        Self: Sized,
    {
        combinator::many(self)
    }

    /// One or more repetitions.
    fn one_or_more(self) -> OneOrMore<Self>
    where
        Self: Sized,
    {
        combinator::one_or_more(self)
    }

    /// Exactly `count` repetitions.
    fn repeat(self, count: usize) -> Repeat<Self>
    where
        Self: Sized,
    {
        combinator::repeat(self, count)
    }

    // === Transformation ===

    /// Transform the parsed value.
    fn map<F, U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        combinator::map(self, f)
    }

    /// Assemble the parsed character(s) into a `String`.
    fn text(self) -> Text<Self>
    where
        Self: Sized,
        Self::Output: IntoText,
    {
        combinator::text(self)
    }

    /// Split a parsed `String` into its characters.
    fn chars(self) -> Chars<Self>
    where
        Self: Sized + Parser<Output = String>,
    {
        combinator::chars(self)
    }

    /// Succeed only if `predicate` accepts the parsed value.
    fn validate<V>(self, predicate: V) -> Validate<Self, V>
    where
        Self: Sized,
        V: Fn(&Self::Output) -> bool,
    {
        combinator::validate(self, predicate)
    }

    /// Succeed only if `self` consumes the rest of the input.
    fn end_of_input(self) -> AtEnd<Self>
    where
        Self: Sized,
    {
        combinator::end_of_input(self)
    }

    // === Erasure ===

    /// Erase the combinator type into a cheaply clonable [`SharedParser`].
    fn shared(self) -> SharedParser<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Arc::new(self)
    }
}

/// A type-erased, reference-counted parser.
///
/// Grammar rules that are referenced from several places (or from a
/// [`Deferred`](crate::Deferred) cell) are stored as `SharedParser`s.
pub type SharedParser<T> = Arc<dyn Parser<Output = T> + Send + Sync>;

impl<P: Parser + ?Sized> Parser for &P {
    type Output = P::Output;

    #[inline]
    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    #[inline]
    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;

    #[inline]
    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, Self::Output> {
        (**self).parse(cursor)
    }
}

/// A parser backed by a plain function or closure.
///
/// Created by [`from_fn`].
pub struct FnParser<F, T> {
    f: F,
    marker: PhantomData<fn() -> T>,
}

/// Build a parser from a function of a cursor.
///
/// Handy for one-off leaf parsers that no primitive covers:
///
/// ```
/// use twine_parse::{from_fn, Outcome, Parser, Reason};
///
/// let digit = from_fn(|cursor| match cursor.read_one() {
///     Ok((c, next)) if c.is_ascii_digit() => Outcome::success(next, c),
///     Ok((found, _)) => Outcome::failure(
///         Reason::Unsatisfied { found, expected: "a digit" },
///         cursor,
///     ),
///     Err(_) => Outcome::failure(Reason::EndOfInput, cursor),
/// });
///
/// assert!(digit.run("7").is_success());
/// ```
pub fn from_fn<F, T>(f: F) -> FnParser<F, T>
where
    F: for<'s> Fn(Cursor<'s>) -> Outcome<'s, T>,
{
    FnParser {
        f,
        marker: PhantomData,
    }
}

impl<F, T> Parser for FnParser<F, T>
where
    F: for<'s> Fn(Cursor<'s>) -> Outcome<'s, T>,
{
    type Output = T;

    #[inline]
    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, T> {
        (self.f)(cursor)
    }
}

impl<F: Clone, T> Clone for FnParser<F, T> {
    fn clone(&self) -> Self {
        FnParser {
            f: self.f.clone(),
            marker: PhantomData,
        }
    }
}

//! Value transformation and validation.

use crate::{Cursor, Outcome, Parser, Reason};

/// Transforms a parsed value. Created by [`map`].
#[derive(Clone, Debug)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

/// Transform a successful value with `f`; failures pass through unchanged.
pub fn map<P, F, U>(parser: P, f: F) -> Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    Map { parser, f }
}

impl<P, F, U> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    #[inline]
    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, U> {
        self.parser.parse(cursor).map(&self.f)
    }
}

/// Values that can be assembled into a `String`.
///
/// Character parsers produce `char` or `Vec<char>`; grammars almost always
/// want the text instead.
pub trait IntoText {
    fn into_text(self) -> String;
}

impl IntoText for char {
    fn into_text(self) -> String {
        String::from(self)
    }
}

impl IntoText for Vec<char> {
    fn into_text(self) -> String {
        self.into_iter().collect()
    }
}

impl IntoText for String {
    fn into_text(self) -> String {
        self
    }
}

/// Assembles parsed characters into a `String`. Created by [`text`].
#[derive(Clone, Debug)]
pub struct Text<P> {
    parser: P,
}

/// Turn a character (or character sequence) parser into a string parser.
pub fn text<P>(parser: P) -> Text<P>
where
    P: Parser,
    P::Output: IntoText,
{
    Text { parser }
}

impl<P> Parser for Text<P>
where
    P: Parser,
    P::Output: IntoText,
{
    type Output = String;

    #[inline]
    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, String> {
        self.parser.parse(cursor).map(IntoText::into_text)
    }
}

/// Splits a parsed `String` into characters. Created by [`chars`].
#[derive(Clone, Debug)]
pub struct Chars<P> {
    parser: P,
}

/// Turn a string parser into a character-sequence parser.
pub fn chars<P>(parser: P) -> Chars<P>
where
    P: Parser<Output = String>,
{
    Chars { parser }
}

impl<P> Parser for Chars<P>
where
    P: Parser<Output = String>,
{
    type Output = Vec<char>;

    #[inline]
    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, Vec<char>> {
        self.parser.parse(cursor).map(|s| s.chars().collect())
    }
}

/// Rejects values that fail a predicate. Created by [`validate`].
#[derive(Clone, Debug)]
pub struct Validate<P, V> {
    parser: P,
    predicate: V,
}

/// Accept the parsed value only if `predicate` holds.
///
/// Inner failures pass through unchanged. A rejected value fails with
/// [`Reason::ValidationFailed`] at the cursor `validate` started from.
pub fn validate<P, V>(parser: P, predicate: V) -> Validate<P, V>
where
    P: Parser,
    V: Fn(&P::Output) -> bool,
{
    Validate { parser, predicate }
}

impl<P, V> Parser for Validate<P, V>
where
    P: Parser,
    V: Fn(&P::Output) -> bool,
{
    type Output = P::Output;

    fn parse<'s>(&self, start: Cursor<'s>) -> Outcome<'s, P::Output> {
        let (cursor, value) = chain!(self.parser.parse(start));
        if (self.predicate)(&value) {
            Outcome::success(cursor, value)
        } else {
            Outcome::failure(Reason::ValidationFailed, start)
        }
    }
}

//! Single-character leaf parsers.
//!
//! Every primitive either consumes exactly one character or fails. That is
//! what keeps repetition combinators from looping on zero-width matches.
//!
//! # Failure Positions
//!
//! - End of input: reported where the read was attempted.
//! - Rejected character: reported just *after* the character that was read,
//!   i.e. at the furthest point the primitive looked at.

use crate::combinator::{alternation, Alternation};
use crate::{Cursor, Outcome, Parser, Reason};

/// Read one character, converting end of input into a failure at `cursor`.
#[inline]
fn read<'s>(cursor: Cursor<'s>) -> Result<(char, Cursor<'s>), Outcome<'s, char>> {
    cursor
        .read_one()
        .map_err(|_| Outcome::failure(Reason::EndOfInput, cursor))
}

/// Consumes any single character. Created by [`any`].
#[derive(Clone, Copy, Debug)]
pub struct Any;

/// Consume one character unconditionally; fails only at end of input.
pub fn any() -> Any {
    Any
}

impl Parser for Any {
    type Output = char;

    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, char> {
        match read(cursor) {
            Ok((c, next)) => Outcome::success(next, c),
            Err(eoi) => eoi,
        }
    }
}

/// Consumes one specific character. Created by [`literal`].
#[derive(Clone, Copy, Debug)]
pub struct Literal {
    expected: char,
}

/// Consume one character equal to `expected`.
pub fn literal(expected: char) -> Literal {
    Literal { expected }
}

impl Parser for Literal {
    type Output = char;

    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, char> {
        match read(cursor) {
            Ok((c, next)) if c == self.expected => Outcome::success(next, c),
            Ok((found, next)) => Outcome::failure(
                Reason::Mismatch {
                    found,
                    expected: self.expected,
                },
                next,
            ),
            Err(eoi) => eoi,
        }
    }
}

/// Consumes one character accepted by a predicate. Created by
/// [`satisfies`] and the character-class helpers.
#[derive(Clone, Copy, Debug)]
pub struct Satisfy<F> {
    predicate: F,
    expected: &'static str,
}

/// Consume one character for which `predicate` holds.
pub fn satisfies<F: Fn(char) -> bool>(predicate: F) -> Satisfy<F> {
    Satisfy {
        predicate,
        expected: "a character matching the predicate",
    }
}

impl<F: Fn(char) -> bool> Satisfy<F> {
    /// Describe what the predicate accepts, for failure messages.
    #[must_use]
    pub fn expecting(self, expected: &'static str) -> Self {
        Satisfy {
            predicate: self.predicate,
            expected,
        }
    }
}

impl<F: Fn(char) -> bool> Parser for Satisfy<F> {
    type Output = char;

    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, char> {
        match read(cursor) {
            Ok((c, next)) if (self.predicate)(c) => Outcome::success(next, c),
            Ok((found, next)) => Outcome::failure(
                Reason::Unsatisfied {
                    found,
                    expected: self.expected,
                },
                next,
            ),
            Err(eoi) => eoi,
        }
    }
}

/// Consumes one character outside an excluded set. Created by [`none_of`].
#[derive(Clone, Debug)]
pub struct NoneOf {
    excluded: Box<[char]>,
}

/// Consume one character that is not in `excluded`.
pub fn none_of(excluded: impl IntoIterator<Item = char>) -> NoneOf {
    NoneOf {
        excluded: excluded.into_iter().collect(),
    }
}

impl Parser for NoneOf {
    type Output = char;

    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, char> {
        match read(cursor) {
            Ok((found, next)) if self.excluded.contains(&found) => {
                Outcome::failure(Reason::Excluded { found }, next)
            }
            Ok((c, next)) => Outcome::success(next, c),
            Err(eoi) => eoi,
        }
    }
}

// === Character classes ===

/// A named character class backed by a plain function.
pub type CharClass = Satisfy<fn(char) -> bool>;

/// Parser returned by [`newline`].
pub type Newline = Alternation<Literal, Literal>;

/// Parser returned by [`whitespace`].
pub type Whitespace = Alternation<CharClass, Newline>;

/// A letter or digit in the Unicode sense (`char::is_alphanumeric`).
pub fn letter_or_digit() -> CharClass {
    satisfies(char::is_alphanumeric as fn(char) -> bool).expecting("a letter or digit")
}

/// Horizontal whitespace: any Unicode whitespace except line breaks.
pub fn space() -> CharClass {
    fn is_space(c: char) -> bool {
        c.is_whitespace() && c != '\n' && c != '\r'
    }
    satisfies(is_space as fn(char) -> bool).expecting("a space")
}

/// A line break character: `\n` or `\r`.
pub fn newline() -> Newline {
    alternation(literal('\n'), literal('\r'))
}

/// Either a [`space`] or a [`newline`].
pub fn whitespace() -> Whitespace {
    alternation(space(), newline())
}

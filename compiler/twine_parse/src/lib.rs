//! Parser combinator engine.
//!
//! Grammars are built by composing small parser values instead of writing
//! recursive descent by hand. Every parser is a pure function from a
//! [`Cursor`] to an [`Outcome`]:
//!
//! - [`Cursor`]: immutable position into the source text
//! - [`Outcome`]: success (next cursor + value) or failure (reason + position)
//! - [`primitive`]: single-character leaf parsers
//! - [`combinator`]: sequencing, alternation, repetition, mapping, validation
//! - [`Deferred`]: late-bound parser for mutually recursive rules
//! - [`ensure_sufficient_stack`]: stack growth for deep recursion
//!
//! # Failure positions
//!
//! Failures are values, never panics. Where a failure is reported depends on
//! which combinator produced it:
//!
//! | Combinator | Reported at |
//! |------------|-------------|
//! | primitives (mismatch) | just after the rejected character |
//! | primitives (end of input) | where the read was attempted |
//! | `sequence`, `map`, `many` | position of the inner failure |
//! | `validate`, `validate_sequence` | start of the composed parser |
//! | `one_or_more` (empty), `repeat` | start of the composed parser |
//! | `end_of_input` | where unconsumed input begins |
//!
//! # Usage
//!
//! ```
//! use twine_parse::{primitive::{letter_or_digit, literal}, Parser};
//!
//! let word = letter_or_digit().one_or_more().text();
//! let quoted = literal('\'').right(word).left(literal('\''));
//!
//! let outcome = quoted.run("'hello'");
//! assert_eq!(outcome.into_value(), "hello");
//! ```

#[macro_use]
mod macros;

pub mod combinator;
mod cursor;
mod defer;
mod outcome;
mod parser;
pub mod primitive;
mod reason;
mod stack;

pub use cursor::{Cursor, LinePosition};
pub use defer::Deferred;
pub use outcome::{Failure, Outcome};
pub use parser::{from_fn, FnParser, Parser, SharedParser};
pub use reason::{EndOfInput, Reason};
pub use stack::ensure_sufficient_stack;

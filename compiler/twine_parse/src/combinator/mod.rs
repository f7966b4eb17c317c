//! Combinator algebra.
//!
//! Each combinator is a small struct implementing [`Parser`](crate::Parser)
//! plus a free constructor function. None of them retries on its own;
//! backtracking only happens through [`alternation`], which restarts its
//! second branch from the cursor the first branch was given.
//!
//! # Failure Positions
//!
//! Two reporting policies coexist and both are load-bearing for grammars:
//!
//! - **Propagate**: `sequence` (and `left`/`right`/`none`), `map`, `text`,
//!   `chars` return the inner failure unchanged, so the error points at the
//!   character that did not match.
//! - **Relocate to start**: `validate_sequence`, `validate`, `repeat` and an
//!   empty `one_or_more` report at the cursor they were given, so the error
//!   points at the start of the rule that was rejected as a whole.

mod anchor;
mod choice;
mod repetition;
mod sequence;
mod transform;

pub use anchor::{end_of_input, AtEnd};
pub use choice::{alternation, Alternation};
pub use repetition::{many, one_or_more, repeat, Many, OneOrMore, Repeat};
pub use sequence::{
    left, none, right, sequence, validate_sequence, Left, Neither, Right, Sequence,
    ValidateSequence,
};
pub use transform::{chars, map, text, validate, Chars, IntoText, Map, Text, Validate};

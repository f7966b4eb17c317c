//! Late-bound parsers for mutually recursive grammar rules.
//!
//! A grammar like `tag := start inner end` / `inner := many(tag | text)`
//! cannot be built bottom-up: each rule needs the other to exist first.
//! A [`Deferred`] is a named placeholder that can be composed into other
//! rules immediately and filled in with the real parser afterwards.
//!
//! # Ownership
//!
//! The cell holds only a [`Weak`] reference to its target. The grammar owns
//! the strong [`SharedParser`]s; a recursive rule therefore never keeps
//! itself alive through its own placeholder, and dropping the grammar frees
//! the whole graph.
//!
//! # Stack Safety
//!
//! Every invocation goes through [`ensure_sufficient_stack`], so deeply
//! nested input grows the native stack instead of overflowing it.

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

use tracing::trace;

use crate::{ensure_sufficient_stack, Cursor, Outcome, Parser, SharedParser};

type Target<T> = Weak<dyn Parser<Output = T> + Send + Sync>;

/// A placeholder parser, defined after it has been composed.
///
/// Clones share the same cell: defining any clone defines them all.
///
/// # Panics
///
/// Parsing through a `Deferred` that was never [`define`](Self::define)d,
/// or whose target has been dropped, is a grammar construction bug and
/// panics.
pub struct Deferred<T> {
    name: &'static str,
    target: Arc<OnceLock<Target<T>>>,
}

impl<T> Deferred<T> {
    /// Create an undefined placeholder. `name` appears in traces and panics.
    pub fn new(name: &'static str) -> Self {
        Deferred {
            name,
            target: Arc::new(OnceLock::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` once [`define`](Self::define) has been called.
    pub fn is_defined(&self) -> bool {
        self.target.get().is_some()
    }
}

impl<T: 'static> Deferred<T> {
    /// Point the placeholder at `parser`.
    ///
    /// Only a weak reference is stored; the caller must keep `parser` alive
    /// for as long as the placeholder is used.
    ///
    /// # Panics
    ///
    /// Panics if the placeholder was already defined.
    pub fn define(&self, parser: &SharedParser<T>) {
        let weak = Arc::downgrade(parser);
        if self.target.set(weak).is_err() {
            panic!("deferred parser `{}` defined twice", self.name);
        }
    }
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Deferred {
            name: self.name,
            target: Arc::clone(&self.target),
        }
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("name", &self.name)
            .field("defined", &self.is_defined())
            .finish()
    }
}

impl<T> Parser for Deferred<T> {
    type Output = T;

    fn parse<'s>(&self, cursor: Cursor<'s>) -> Outcome<'s, T> {
        let Some(parser) = self.target.get().and_then(Weak::upgrade) else {
            panic!(
                "deferred parser `{}` used before definition or after its grammar was dropped",
                self.name
            );
        };
        trace!(rule = self.name, offset = cursor.offset(), "enter");
        ensure_sufficient_stack(|| parser.parse(cursor))
    }
}

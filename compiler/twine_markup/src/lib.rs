//! Minimal tag markup: nested tags with string attributes and free text.
//!
//! ```text
//! <note lang="en">Remember <b>this</b></note>
//! ```
//!
//! # Architecture
//!
//! - [`ast`]: the closed [`ScriptNode`] family
//! - [`grammar`]: the markup rules, composed once from `twine_parse`
//!   combinators
//! - `render`: `Display` back to markup, plus [`ScriptNode::dump`]
//! - [`ParseError`]: owned failure for callers that outlive the source
//!
//! # Whitespace
//!
//! Text nodes keep their whitespace, newlines included. Inside tags:
//! no whitespace after `<`, at least one whitespace character before each
//! attribute, optional whitespace before `>` and around an end-tag name.
//!
//! # Usage
//!
//! ```
//! use twine_markup::{parse_document, ScriptNode};
//!
//! let root = parse_document(r#"<a b="1"><c>text</c></a>"#).unwrap();
//! let ScriptNode::Inner(inner) = &root else { unreachable!() };
//! let a = inner.children()[0].as_tag().unwrap();
//! assert_eq!(a.name(), "a");
//! assert_eq!(a.attribute("b"), Some("1"));
//! assert_eq!(root.to_string(), r#"<a b="1"><c>text</c></a>"#);
//! ```

pub mod ast;
mod error;
pub mod grammar;
mod render;

use std::sync::LazyLock;

use tracing::debug;
use twine_parse::{Outcome, Parser};

pub use ast::{Attributes, InnerNode, ScriptNode, TagNode, TextNode};
pub use error::ParseError;
pub use grammar::Grammar;

static GRAMMAR: LazyLock<Grammar> = LazyLock::new(Grammar::new);

/// Parse a whole document with the shared grammar.
///
/// On success the value is always a [`ScriptNode::Inner`] and the cursor is
/// at the end of `text`.
pub fn parse(text: &str) -> Outcome<'_, ScriptNode> {
    GRAMMAR.root().run(text)
}

/// Parse a whole document, converting a failure into an owned
/// [`ParseError`].
pub fn parse_document(text: &str) -> Result<ScriptNode, ParseError> {
    debug!(len = text.len(), "parsing document");
    match parse(text).into_result() {
        Ok((root, _)) => Ok(root),
        Err(failure) => {
            let error = ParseError::from(failure);
            debug!(%error, "document rejected");
            Err(error)
        }
    }
}

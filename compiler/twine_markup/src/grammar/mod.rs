//! Markup grammar rules.
//!
//! ```text
//! root          := inner_content EOF
//! inner_content := (tag | text)*
//! tag           := start_tag inner_content end_tag      names must match
//! start_tag     := '<' name (ws+ attribute)* ws* '>'    keys must be unique
//! end_tag       := '<' '/' ws* name ws* '>'
//! attribute     := name '=' '"' [^"]* '"'
//! text          := [^<>]+
//! name          := letter_or_digit+
//! ```
//!
//! `tag` and `inner_content` refer to each other; the cycle is closed with
//! a [`Deferred`] placeholder for `inner_content`.
//!
//! # Failure Positions
//!
//! A tag whose end name differs from its start name fails with
//! `ValidationFailed` at its `<`. Duplicate attribute keys fail with
//! `ValidationFailed` where the attribute list starts, right after the tag
//! name. Because `inner_content` is a `many`, neither failure is surfaced by
//! [`Grammar::root`]: the repetition stops in front of the tag and the
//! end-of-input anchor reports trailing input there. Use the individual
//! rules to observe the inner reason.

use rustc_hash::FxHashSet;
use tracing::debug;
use twine_parse::primitive::{letter_or_digit, literal, none_of, whitespace};
use twine_parse::{Deferred, Parser, SharedParser};

use crate::ast::{Attributes, InnerNode, ScriptNode, TagNode, TextNode};

/// Name and attributes of a start tag.
pub type StartTag = (String, Attributes);

/// The composed markup grammar.
///
/// Construction builds the full parser graph once; parsing never allocates
/// parsers. A `Grammar` is `Send + Sync` and can be shared freely.
pub struct Grammar {
    root: SharedParser<ScriptNode>,
    inner_content: SharedParser<InnerNode>,
    tag: SharedParser<TagNode>,
    text: SharedParser<TextNode>,
    start_tag: SharedParser<StartTag>,
    end_tag: SharedParser<String>,
    attribute: SharedParser<(String, String)>,
}

impl Grammar {
    pub fn new() -> Self {
        let deferred_content = Deferred::<InnerNode>::new("inner_content");

        let name = || letter_or_digit().one_or_more().text();
        let gap = || whitespace().many();

        let attribute = name()
            .left(literal('='))
            .left(literal('"'))
            .then(none_of(['"']).many().text(), |key, value| (key, value))
            .left(literal('"'))
            .shared();

        let attributes = whitespace()
            .one_or_more()
            .right(attribute.clone())
            .many()
            .validate(|attributes| has_unique_keys(attributes))
            .map(|attributes| attributes.into_iter().collect::<Attributes>());

        let start_tag = literal('<')
            .right(name())
            .then(attributes, |name, attributes| (name, attributes))
            .left(gap())
            .left(literal('>'))
            .shared();

        let end_tag = literal('<')
            .none(literal('/'))
            .none(gap())
            .right(name())
            .left(gap())
            .left(literal('>'))
            .shared();

        let tag = start_tag
            .clone()
            .then(deferred_content.clone(), |(name, attributes), inner| {
                (name, attributes, inner)
            })
            .validate_sequence(
                end_tag.clone(),
                |(name, attributes, inner), _| TagNode::new(name, attributes, inner),
                |(name, _, _), end| name == end,
            )
            .shared();

        let text = none_of(['<', '>'])
            .one_or_more()
            .text()
            .map(TextNode::new)
            .shared();

        let inner_content = tag
            .clone()
            .map(ScriptNode::Tag)
            .or(text.clone().map(ScriptNode::Text))
            .many()
            .map(InnerNode::new)
            .shared();
        deferred_content.define(&inner_content);

        let root = inner_content
            .clone()
            .end_of_input()
            .map(ScriptNode::Inner)
            .shared();

        debug!("markup grammar constructed");
        Grammar {
            root,
            inner_content,
            tag,
            text,
            start_tag,
            end_tag,
            attribute,
        }
    }

    /// A whole document, anchored at end of input. Yields `ScriptNode::Inner`.
    pub fn root(&self) -> &SharedParser<ScriptNode> {
        &self.root
    }

    pub fn inner_content(&self) -> &SharedParser<InnerNode> {
        &self.inner_content
    }

    pub fn tag(&self) -> &SharedParser<TagNode> {
        &self.tag
    }

    pub fn text(&self) -> &SharedParser<TextNode> {
        &self.text
    }

    pub fn start_tag(&self) -> &SharedParser<StartTag> {
        &self.start_tag
    }

    /// Yields the closing tag's name.
    pub fn end_tag(&self) -> &SharedParser<String> {
        &self.end_tag
    }

    /// Yields `(key, value)`.
    pub fn attribute(&self) -> &SharedParser<(String, String)> {
        &self.attribute
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

fn has_unique_keys(attributes: &[(String, String)]) -> bool {
    let mut seen = FxHashSet::default();
    attributes.iter().all(|(key, _)| seen.insert(key.as_str()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

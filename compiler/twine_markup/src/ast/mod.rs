//! Markup syntax tree.
//!
//! A document is a [`ScriptNode::Inner`] whose children are tags and text
//! runs. Nodes own their strings; a tree does not borrow from the source.
//!
//! # Invariants
//!
//! Enforced by the grammar for parsed trees, not by the constructors:
//! - a tag's start and end names are equal (only one name is stored);
//! - attribute keys are unique (the map cannot say otherwise);
//! - text nodes are non-empty and never adjacent to another text node.
//!
//! # Depth
//!
//! Trees are as deep as the markup they came from. Clone, comparison,
//! hashing and `Debug` grow the stack per level through
//! [`ensure_sufficient_stack`]; dropping releases nodes from a heap
//! worklist and never recurses.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use twine_parse::ensure_sufficient_stack;

/// Attribute map of a tag, ordered by key.
pub type Attributes = BTreeMap<String, String>;

/// A node of the markup tree.
pub enum ScriptNode {
    /// `<name attr="value">...</name>`
    Tag(TagNode),
    /// An ordered run of children: the document root, or a tag's body.
    Inner(InnerNode),
    /// Literal text between tags.
    Text(TextNode),
}

impl ScriptNode {
    pub fn as_tag(&self) -> Option<&TagNode> {
        match self {
            ScriptNode::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    pub fn as_inner(&self) -> Option<&InnerNode> {
        match self {
            ScriptNode::Inner(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            ScriptNode::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptNode::Tag(_) => "Tag",
            ScriptNode::Inner(_) => "Inner",
            ScriptNode::Text(_) => "Text",
        }
    }
}

impl Clone for ScriptNode {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            ScriptNode::Tag(tag) => ScriptNode::Tag(tag.clone()),
            ScriptNode::Inner(inner) => ScriptNode::Inner(inner.clone()),
            ScriptNode::Text(text) => ScriptNode::Text(text.clone()),
        })
    }
}

impl fmt::Debug for ScriptNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            ScriptNode::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            ScriptNode::Inner(inner) => f.debug_tuple("Inner").field(inner).finish(),
            ScriptNode::Text(text) => f.debug_tuple("Text").field(text).finish(),
        })
    }
}

impl PartialEq for ScriptNode {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (ScriptNode::Tag(a), ScriptNode::Tag(b)) => a == b,
            (ScriptNode::Inner(a), ScriptNode::Inner(b)) => a == b,
            (ScriptNode::Text(a), ScriptNode::Text(b)) => a == b,
            _ => false,
        })
    }
}

impl Eq for ScriptNode {}

impl Hash for ScriptNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ensure_sufficient_stack(|| {
            mem::discriminant(self).hash(state);
            match self {
                ScriptNode::Tag(tag) => tag.hash(state),
                ScriptNode::Inner(inner) => inner.hash(state),
                ScriptNode::Text(text) => text.hash(state),
            }
        });
    }
}

impl From<TagNode> for ScriptNode {
    fn from(tag: TagNode) -> Self {
        ScriptNode::Tag(tag)
    }
}

impl From<InnerNode> for ScriptNode {
    fn from(inner: InnerNode) -> Self {
        ScriptNode::Inner(inner)
    }
}

impl From<TextNode> for ScriptNode {
    fn from(text: TextNode) -> Self {
        ScriptNode::Text(text)
    }
}

/// A tag with its attributes and body.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagNode {
    name: String,
    attributes: Attributes,
    inner: InnerNode,
}

impl TagNode {
    pub fn new(name: impl Into<String>, attributes: Attributes, inner: InnerNode) -> Self {
        TagNode {
            name: name.into(),
            attributes,
            inner,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Value of the attribute `key`, if present.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn inner(&self) -> &InnerNode {
        &self.inner
    }
}

/// Ordered children of a document or tag body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct InnerNode {
    children: Vec<ScriptNode>,
}

impl InnerNode {
    pub fn new(children: Vec<ScriptNode>) -> Self {
        InnerNode { children }
    }

    pub fn children(&self) -> &[ScriptNode] {
        &self.children
    }

    pub fn into_children(mut self) -> Vec<ScriptNode> {
        mem::take(&mut self.children)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl Drop for InnerNode {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            match node {
                ScriptNode::Tag(mut tag) => pending.append(&mut tag.inner.children),
                ScriptNode::Inner(mut inner) => pending.append(&mut inner.children),
                ScriptNode::Text(_) => {}
            }
        }
    }
}

/// A run of literal text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextNode {
    text: String,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        TextNode { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

//! Rendering: markup serialization and debug tree dumps.
//!
//! `Display` writes a node back as markup. Attributes come out in key
//! order with double-quoted values and no optional whitespace, so rendering
//! a parsed tree and parsing the result yields the same tree.
//!
//! Both walks recurse once per nesting level and grow the stack as they go.

use std::fmt::{self, Write};

use twine_parse::ensure_sufficient_stack;

use crate::ast::{InnerNode, ScriptNode, TagNode, TextNode};

const INDENT: &str = "  ";

impl fmt::Display for ScriptNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            ScriptNode::Tag(tag) => fmt::Display::fmt(tag, f),
            ScriptNode::Inner(inner) => fmt::Display::fmt(inner, f),
            ScriptNode::Text(text) => fmt::Display::fmt(text, f),
        })
    }
}

impl fmt::Display for TagNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name())?;
        for (key, value) in self.attributes() {
            write!(f, " {key}=\"{value}\"")?;
        }
        write!(f, ">{}</{}>", self.inner(), self.name())
    }
}

impl fmt::Display for InnerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.children()
            .iter()
            .try_for_each(|child| fmt::Display::fmt(child, f))
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl ScriptNode {
    /// Indented tree, one node per line.
    ///
    /// ```text
    /// Inner
    ///   Tag a b="1"
    ///     Inner
    ///       Text "text"
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = dump_node(&mut out, self, 0);
        out
    }
}

fn dump_node(out: &mut String, node: &ScriptNode, depth: usize) -> fmt::Result {
    ensure_sufficient_stack(|| match node {
        ScriptNode::Tag(tag) => {
            indent(out, depth);
            write!(out, "Tag {}", tag.name())?;
            for (key, value) in tag.attributes() {
                write!(out, " {key}={value:?}")?;
            }
            out.push('\n');
            dump_inner(out, tag.inner(), depth + 1)
        }
        ScriptNode::Inner(inner) => dump_inner(out, inner, depth),
        ScriptNode::Text(text) => {
            indent(out, depth);
            writeln!(out, "Text {:?}", text.text())
        }
    })
}

fn dump_inner(out: &mut String, inner: &InnerNode, depth: usize) -> fmt::Result {
    indent(out, depth);
    out.push_str("Inner\n");
    inner
        .children()
        .iter()
        .try_for_each(|child| dump_node(out, child, depth + 1))
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

use pretty_assertions::assert_eq;

use crate::{parse_document, Attributes, InnerNode, ScriptNode, TagNode, TextNode};

fn sample() -> ScriptNode {
    let c = TagNode::new(
        "c",
        Attributes::new(),
        InnerNode::new(vec![TextNode::new("text").into()]),
    );
    let attributes = Attributes::from([("b".to_string(), "1".to_string())]);
    let a = TagNode::new("a", attributes, InnerNode::new(vec![c.into()]));
    InnerNode::new(vec![a.into()]).into()
}

#[test]
fn display_writes_markup() {
    assert_eq!(sample().to_string(), r#"<a b="1"><c>text</c></a>"#);
}

#[test]
fn display_orders_attributes_by_key() {
    let attributes = Attributes::from([
        ("z".to_string(), "1".to_string()),
        ("a".to_string(), "2".to_string()),
    ]);
    let tag = TagNode::new("t", attributes, InnerNode::default());
    assert_eq!(tag.to_string(), r#"<t a="2" z="1"></t>"#);
}

#[test]
fn display_drops_optional_whitespace() {
    let root = parse_document("<a  x=\"1\" ></ a >").unwrap();
    assert_eq!(root.to_string(), r#"<a x="1"></a>"#);
}

#[test]
fn display_keeps_text_verbatim() {
    let source = "line 1\n  <b>bold</b> \"quoted\"\n";
    assert_eq!(parse_document(source).unwrap().to_string(), source);
}

#[test]
fn dump_indents_one_node_per_line() {
    let expected = "\
Inner
  Tag a b=\"1\"
    Inner
      Tag c
        Inner
          Text \"text\"
";
    assert_eq!(sample().dump(), expected);
}

#[test]
fn dump_escapes_text() {
    let node = ScriptNode::Text(TextNode::new("a\nb"));
    assert_eq!(node.dump(), "Text \"a\\nb\"\n");
}

#[test]
fn dump_grows_stack_for_deep_trees() {
    const DEPTH: usize = 1_000;
    // A small thread stack that the unguarded walk would exhaust.
    let handle = std::thread::Builder::new()
        .stack_size(128 * 1024)
        .spawn(|| {
            let source = format!("{}x{}", "<a>".repeat(DEPTH), "</a>".repeat(DEPTH));
            let root = parse_document(&source).unwrap();
            (root.dump(), root.to_string() == source)
        })
        .unwrap();
    let (dump, renders_back) = handle.join().unwrap();
    assert!(renders_back);
    // The root Inner, a Tag and an Inner per level, then the text.
    assert_eq!(dump.lines().count(), 2 * DEPTH + 2);
    assert!(dump.ends_with("Text \"x\"\n"));
}

mod proptest_round_trip {
    use proptest::prelude::*;

    use crate::{parse_document, Attributes, InnerNode, ScriptNode, TagNode, TextNode};

    /// Merge adjacent text nodes, as the parser would.
    fn normalize(children: Vec<ScriptNode>) -> InnerNode {
        let mut merged: Vec<ScriptNode> = Vec::with_capacity(children.len());
        for child in children {
            if let (ScriptNode::Text(next), Some(ScriptNode::Text(prev))) =
                (&child, merged.last_mut())
            {
                *prev = TextNode::new(format!("{}{}", prev.text(), next.text()));
                continue;
            }
            merged.push(child);
        }
        InnerNode::new(merged)
    }

    fn arb_name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9]{1,6}"
    }

    fn arb_text() -> impl Strategy<Value = ScriptNode> {
        "[^<>]{1,8}".prop_map(|text| ScriptNode::Text(TextNode::new(text)))
    }

    fn arb_node() -> impl Strategy<Value = ScriptNode> {
        arb_text().prop_recursive(4, 32, 4, |inner| {
            let attributes = prop::collection::btree_map(arb_name(), "[^\"]{0,6}", 0..3);
            prop_oneof![
                arb_text(),
                (arb_name(), attributes, prop::collection::vec(inner, 0..4)).prop_map(
                    |(name, attributes, children): (String, Attributes, Vec<ScriptNode>)| {
                        ScriptNode::Tag(TagNode::new(name, attributes, normalize(children)))
                    }
                ),
            ]
        })
    }

    proptest! {
        #[test]
        fn rendered_tree_parses_back(children in prop::collection::vec(arb_node(), 0..5)) {
            let root = ScriptNode::Inner(normalize(children));
            let rendered = root.to_string();
            let reparsed = parse_document(&rendered);
            prop_assert_eq!(reparsed, Ok(root));
        }
    }
}

use pretty_assertions::assert_eq;
use twine_parse::{LinePosition, Reason};

use super::*;
use crate::{parse, parse_document};

fn text(content: &str) -> ScriptNode {
    TextNode::new(content).into()
}

fn tag(name: &str, attributes: &[(&str, &str)], children: Vec<ScriptNode>) -> ScriptNode {
    let attributes = attributes
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    TagNode::new(name, attributes, InnerNode::new(children)).into()
}

fn document(children: Vec<ScriptNode>) -> ScriptNode {
    InnerNode::new(children).into()
}

// === Documents ===

#[test]
fn empty_input_is_empty_document() {
    assert_eq!(parse_document("").unwrap(), document(vec![]));
}

#[test]
fn plain_text_is_one_text_node() {
    let source = "  hello,\n world!  ";
    assert_eq!(parse_document(source).unwrap(), document(vec![text(source)]));
}

#[test]
fn nested_tags_with_attributes() {
    let root = parse_document(r#"<a b="1"><c>text</c></a>"#).unwrap();
    assert_eq!(
        root,
        document(vec![tag(
            "a",
            &[("b", "1")],
            vec![tag("c", &[], vec![text("text")])]
        )])
    );
}

#[test]
fn mixed_text_and_siblings() {
    let root = parse_document("x<p>1</p> y <p>2</p>\n").unwrap();
    assert_eq!(
        root,
        document(vec![
            text("x"),
            tag("p", &[], vec![text("1")]),
            text(" y "),
            tag("p", &[], vec![text("2")]),
            text("\n"),
        ])
    );
}

#[test]
fn whitespace_inside_tags() {
    let root = parse_document("<a  x=\"1\"\n\ty=\"2\" ></ a\n>").unwrap();
    assert_eq!(root, document(vec![tag("a", &[("x", "1"), ("y", "2")], vec![])]));
}

#[test]
fn attribute_values_may_hold_markup_characters() {
    let root = parse_document(r#"<a t="x > <y> ''" e=""></a>"#).unwrap();
    assert_eq!(root, document(vec![tag("a", &[("t", "x > <y> ''"), ("e", "")], vec![])]));
}

#[test]
fn names_are_unicode_letters_and_digits() {
    let root = parse_document("<ключ1>т</ключ1>").unwrap();
    assert_eq!(root, document(vec![tag("ключ1", &[], vec![text("т")])]));
}

// === Rejections ===

#[test]
fn mismatched_end_tag_fails_at_start_tag() {
    let error = parse_document("<a></b>").unwrap_err();
    assert_eq!(error.position(), LinePosition::new(0, 0));

    let outcome = Grammar::new().tag().run("<a></b>");
    assert_eq!(outcome.reason(), Some(&Reason::ValidationFailed));
    assert_eq!(outcome.position(), LinePosition::new(0, 0));
}

#[test]
fn nested_mismatch_stops_content_before_outer_tag() {
    let grammar = Grammar::new();
    let outcome = grammar.inner_content().run("<x><a></b></x>");
    // The outer tag cannot close, so content stops in front of it.
    assert_eq!(outcome.cursor().offset(), 0);

    let outcome = grammar.tag().run("<a></b>");
    assert_eq!(outcome.reason(), Some(&Reason::ValidationFailed));
}

#[test]
fn duplicate_attribute_keys_fail_validation() {
    let grammar = Grammar::new();
    let outcome = grammar.start_tag().run(r#"<a x="1" x="2">"#);
    assert_eq!(outcome.reason(), Some(&Reason::ValidationFailed));
    // The attribute list starts right after the name, not at `<`.
    assert_eq!(outcome.position(), LinePosition::new(0, 2));

    let error = parse_document(r#"<a x="1" x="2"></a>"#).unwrap_err();
    assert_eq!(error.reason(), &Reason::TrailingInput);
    assert_eq!(error.position(), LinePosition::new(0, 0));
    assert!(parse_document(r#"<a x="1" y="2"></a>"#).is_ok());
}

#[test]
fn trailing_input_fails_at_anchor() {
    let error = parse_document("<a></a>>").unwrap_err();
    assert_eq!(error.reason(), &Reason::TrailingInput);
    assert_eq!(error.position(), LinePosition::new(0, 7));
    assert_eq!(error.to_string(), "Failed on (0, 7): cannot reach end of input");
}

#[test]
fn unclosed_tag_on_later_line() {
    let error = parse_document("line one\n<a></a>\n<b>").unwrap_err();
    assert_eq!(error.position(), LinePosition::new(2, 0));
    assert_eq!(error.offset(), 17);
}

#[test]
fn whitespace_after_open_bracket_is_rejected() {
    assert!(parse_document("< a></a>").is_err());
    assert!(parse_document(r#"<a x = "1"></a>"#).is_err());
    assert!(parse_document(r#"<ax="1"></ax>"#).is_err());
}

// === Individual rules ===

#[test]
fn attribute_rule_yields_pair() {
    let grammar = Grammar::default();
    let outcome = grammar.attribute().run(r#"key="some value""#);
    assert_eq!(
        outcome.into_value(),
        ("key".to_string(), "some value".to_string())
    );
}

#[test]
fn attribute_rule_reports_unclosed_value_at_end() {
    let outcome = Grammar::new().attribute().run(r#"k="open"#);
    assert_eq!(outcome.reason(), Some(&Reason::EndOfInput));
    assert_eq!(outcome.cursor().offset(), 7);
}

#[test]
fn end_tag_rule_yields_name() {
    let grammar = Grammar::new();
    assert_eq!(grammar.end_tag().run("</ div >").into_value(), "div");
    assert!(grammar.end_tag().run("<div>").is_failure());
}

#[test]
fn text_rule_stops_at_markup() {
    let outcome = Grammar::new().text().run("abc<d>");
    assert_eq!(outcome.cursor().offset(), 3);
    assert_eq!(outcome.into_value(), TextNode::new("abc"));
}

#[test]
fn root_is_always_inner() {
    let outcome = parse("<a>b</a>");
    assert!(outcome.value().as_inner().is_some());
    assert!(outcome.cursor().is_at_end());
}

#[test]
fn grammar_is_shareable_across_threads() {
    let grammar = std::sync::Arc::new(Grammar::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let grammar = std::sync::Arc::clone(&grammar);
            std::thread::spawn(move || {
                let source = format!("<t{i}>{i}</t{i}>");
                grammar.root().run(&source).is_success()
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

// === Deep nesting ===

#[test]
fn deep_nesting_parses() {
    const DEPTH: usize = 2_000;
    let source = format!("{}x{}", "<a>".repeat(DEPTH), "</a>".repeat(DEPTH));
    let root = parse_document(&source).unwrap();

    let mut depth = 0;
    let mut node = &root;
    loop {
        match node {
            ScriptNode::Inner(inner) => match inner.children() {
                [child] => node = child,
                other => panic!("expected one child, got {}", other.len()),
            },
            ScriptNode::Tag(tag) => {
                depth += 1;
                node = tag.inner().children().first().unwrap();
            }
            ScriptNode::Text(text) => {
                assert_eq!(text.text(), "x");
                break;
            }
        }
    }
    assert_eq!(depth, DEPTH);
}

#[test]
fn very_deep_document_renders_clones_and_drops() {
    const DEPTH: usize = 200_000;
    let source = format!("{}x{}", "<a>".repeat(DEPTH), "</a>".repeat(DEPTH));
    let root = parse_document(&source).unwrap();

    let rendered = root.to_string();
    assert_eq!(rendered.len(), source.len());
    assert!(rendered == source);

    let copy = root.clone();
    assert!(copy == root);
    drop(copy);
    drop(root);
}

mod proptest_documents {
    use proptest::prelude::*;

    use crate::{parse_document, InnerNode, ScriptNode, TextNode};

    proptest! {
        #[test]
        fn text_without_brackets_is_one_node(source in "[^<>]{1,64}") {
            let expected = ScriptNode::Inner(InnerNode::new(vec![TextNode::new(source.clone()).into()]));
            prop_assert_eq!(parse_document(&source).unwrap(), expected);
        }

        #[test]
        fn accepted_documents_render_back(source in "[<>/=\" a-c1\n]{0,32}") {
            if let Ok(root) = parse_document(&source) {
                let rendered = root.to_string();
                prop_assert_eq!(parse_document(&rendered), Ok(root));
            }
        }
    }
}

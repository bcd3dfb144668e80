use recognizer_framework::{Input, Position};
use xml_recognizers::{document, node, parse, XmlError};

#[test]
fn test_self_closing_root() {
    let input = Input::new(r#"<?xml version="1.0"?><foo />"#);
    let mut pos = Position::new();
    let doc = document(&input, &mut pos).expect("document");
    assert_eq!(doc.root.tag(), "foo");
    assert!(doc.root.children().is_empty());
    assert!(doc.root.attributes().is_empty());
    assert_eq!(doc.prolog.len(), 1);
    assert!(input.is_end(&pos));
}

#[test]
fn test_mismatched_close_tag_fails() {
    let input = Input::new(r#"<?xml version="1.0"?><foo></bar>"#);
    let mut pos = Position::new();
    assert!(document(&input, &mut pos).is_none());
    assert_eq!(pos, Position::new());
}

#[test]
fn test_nested_elements() {
    let input = Input::new(r#"<?xml version="1.0"?><foo><bar><baz/></bar></foo>"#);
    let mut pos = Position::new();
    let doc = document(&input, &mut pos).expect("document");
    let foo = &doc.root;
    assert_eq!(foo.children().len(), 1);
    let bar = &foo.children()[0];
    assert_eq!(bar.tag(), "bar");
    assert_eq!(bar.children().len(), 1);
    assert_eq!(bar.children()[0].tag(), "baz");
    assert!(bar.children()[0].children().is_empty());
}

#[test]
fn test_children_keep_document_order() {
    let doc = parse(
        r#"<?xml version="1.0" encoding="utf-8"?>
<list kind="letters">
  <a/>
  <b id="2"></b>
  <c />
</list>
"#,
    )
    .expect("document");
    let tags: Vec<&str> = doc.root.children().iter().map(|c| c.tag()).collect();
    assert_eq!(tags, ["a", "b", "c"]);
    assert_eq!(doc.root.attribute("kind"), Some("letters"));
    assert_eq!(doc.root.child("b").and_then(|b| b.attribute("id")), Some("2"));
    assert_eq!(doc.prolog["encoding"], "utf-8");
}

#[test]
fn test_unclosed_element_fails() {
    for text in ["<foo>", "<foo><bar/>", "<foo><bar>", "<foo"] {
        let input = Input::new(text);
        let mut pos = Position::new();
        assert!(node(&input, &mut pos).is_none(), "{text}");
        assert_eq!(pos.offset, 0, "{text}");
    }
}

#[test]
fn test_text_content_is_rejected() {
    let input = Input::new("<foo>text</foo>");
    let mut pos = Position::new();
    assert!(node(&input, &mut pos).is_none());
}

#[test]
fn test_deep_mismatch_fails_whole_tree() {
    let input = Input::new("<a><b><c></b></c></a>");
    let mut pos = Position::new();
    assert!(node(&input, &mut pos).is_none());
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse("<foo/>"), Err(XmlError::Prolog { offset: 0 }));
    assert_eq!(
        parse(r#"<?xml version="1.0"?><foo></bar>"#),
        Err(XmlError::Element { offset: 21 })
    );
    let trailing = parse(r#"<?xml version="1.0"?><foo/><bar/>"#);
    assert_eq!(trailing, Err(XmlError::TrailingContent { offset: 27 }));
    assert_eq!(trailing.map_err(|e| e.offset()), Err(27));
}

#[test]
fn test_parse_allows_trailing_whitespace() {
    assert!(parse("<?xml version=\"1.0\"?><foo/>\n\n").is_ok());
}

#[test]
fn test_error_messages() {
    let err = XmlError::Element { offset: 5 };
    assert_eq!(err.to_string(), "no well-formed root element at byte 5");
}

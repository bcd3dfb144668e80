//! Recognizers for the prolog, tags and elements.
//!
//! ```text
//! document := prolog node
//! prolog   := "<?xml" pairs? ws? "?>"
//! open     := ws? '<' name pairs? ws? '/'? '>'
//! close    := ws? "</" name ws? '>'
//! node     := open                      (self-closing)
//!           | open (close | node)*      (until the matching close)
//! ```

use crate::tree::{Document, Xml};
use recognizer_framework::{key_value_pairs, optional, Attributes, Capture, Input, Position, Primitives};
use tracing::debug;

/// An open tag as written in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTag<'a> {
    pub tag: Capture<'a>,
    pub attributes: Attributes,
    /// The tag ended with `/>`.
    pub self_closing: bool,
}

fn ends_tag_name(ch: char) -> bool {
    ch.is_whitespace() || ch == '/' || ch == '>'
}

/// Recognizes `<?xml version="1.0"?>` and returns its attributes.
pub fn prolog(input: &Input<'_>, pos: &mut Position) -> Option<Attributes> {
    let mut i = pos.save();
    if !input.literal("<?xml", &mut i) {
        return None;
    }
    let attributes = key_value_pairs(input, &mut i).unwrap_or_default();
    optional(input.whitespaces(&mut i));
    (input.literal("?>", &mut i) && pos.commit(i)).then_some(attributes)
}

/// Recognizes `<tag key="value" ...>` or `<tag ... />`.
pub fn open_tag<'a>(input: &Input<'a>, pos: &mut Position) -> Option<OpenTag<'a>> {
    let mut i = pos.save();
    optional(input.whitespaces(&mut i));
    if !input.one_char('<', &mut i) {
        return None;
    }
    let tag = input.until_matches_capture(&mut i, ends_tag_name)?;
    let attributes = key_value_pairs(input, &mut i).unwrap_or_default();
    optional(input.whitespaces(&mut i));
    let self_closing = input.one_char('/', &mut i);
    (input.one_char('>', &mut i) && pos.commit(i)).then_some(OpenTag {
        tag,
        attributes,
        self_closing,
    })
}

/// Recognizes `</tag>` and returns the tag name.
pub fn close_tag<'a>(input: &Input<'a>, pos: &mut Position) -> Option<Capture<'a>> {
    let mut i = pos.save();
    optional(input.whitespaces(&mut i));
    if !input.literal("</", &mut i) {
        return None;
    }
    let tag = input.until_matches_capture(&mut i, |ch| ch == '>' || ch.is_whitespace())?;
    optional(input.whitespaces(&mut i));
    (input.one_char('>', &mut i) && pos.commit(i)).then_some(tag)
}

/// Recognizes an element and everything nested in it.
///
/// Fails on a close tag whose name differs from the open tag, and on input
/// that ends, or stops looking like markup, before the matching close tag.
pub fn node(input: &Input<'_>, pos: &mut Position) -> Option<Xml> {
    let mut i = pos.save();
    let open = open_tag(input, &mut i)?;
    let mut children = Vec::new();

    if !open.self_closing {
        loop {
            if let Some(close) = close_tag(input, &mut i) {
                if close.as_str() == open.tag.as_str() {
                    break;
                }
                debug!(open = %open.tag, close = %close, offset = close.start(), "mismatched close tag");
                return None;
            }
            match node(input, &mut i) {
                Some(child) => children.push(child),
                None => {
                    debug!(tag = %open.tag, offset = i.offset, "element not closed");
                    return None;
                }
            }
        }
    }

    pos.commit(i)
        .then(|| Xml::new(open.tag.as_str(), open.attributes, children))
}

/// Recognizes a prolog followed by the root element.
pub fn document(input: &Input<'_>, pos: &mut Position) -> Option<Document> {
    let mut i = pos.save();
    let prolog = prolog(input, &mut i)?;
    let root = node(input, &mut i)?;
    pos.commit(i).then_some(Document { prolog, root })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_tag_self_closing() {
        let input = Input::new(r#"<foo a="1" />"#);
        let mut pos = Position::new();
        let open = open_tag(&input, &mut pos).expect("open tag");
        assert_eq!(open.tag, "foo");
        assert!(open.self_closing);
        assert_eq!(open.attributes["a"], "1");
        assert!(input.is_end(&pos));
    }

    #[test]
    fn test_open_tag_requires_name() {
        let input = Input::new("</foo>");
        let mut pos = Position::new();
        assert!(open_tag(&input, &mut pos).is_none());
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_close_tag() {
        let input = Input::new("  </foo >");
        let mut pos = Position::new();
        let tag = close_tag(&input, &mut pos);
        assert_eq!(tag.map(|t| t.as_str()), Some("foo"));
        assert!(input.is_end(&pos));
    }

    #[test]
    fn test_prolog_without_attributes() {
        let input = Input::new("<?xml ?>");
        let mut pos = Position::new();
        assert_eq!(prolog(&input, &mut pos), Some(Attributes::new()));
        assert!(input.is_end(&pos));
    }
}

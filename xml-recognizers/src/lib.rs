//! XML Recognizers
//!
//! A recursive-descent recognizer for a small subset of XML: a prolog
//! followed by one element tree. Elements carry attributes and child
//! elements; text content, comments, CDATA and entities are not supported.
//!
//! The recognizers in [`recognizers`] follow the usual contract and return
//! `None` with the position untouched when the input is not well formed,
//! mismatched close tags included. [`parse`] wraps them for callers that
//! want an error value.
//!
//! ```
//! let doc = xml_recognizers::parse(r#"<?xml version="1.0"?><foo><bar/></foo>"#).unwrap();
//! assert_eq!(doc.prolog["version"], "1.0");
//! assert_eq!(doc.root.tag(), "foo");
//! assert_eq!(doc.root.children().len(), 1);
//! ```

pub mod error;
pub mod recognizers;
pub mod tree;

pub use error::{Result, XmlError};
pub use recognizers::{close_tag, document, node, open_tag, prolog, OpenTag};
pub use tree::{Document, Xml};

use recognizer_framework::{optional, Input, Primitives};

/// Parses `text` as a prolog followed by a single root element. Trailing
/// whitespace is allowed, anything else after the root is an error.
pub fn parse(text: &str) -> Result<Document> {
    let input = Input::new(text);
    let mut pos = input.begin();

    let prolog = prolog(&input, &mut pos).ok_or(XmlError::Prolog { offset: pos.offset })?;
    let root = node(&input, &mut pos).ok_or(XmlError::Element { offset: pos.offset })?;

    optional(input.whitespaces(&mut pos));
    if !input.is_end(&pos) {
        return Err(XmlError::TrailingContent { offset: pos.offset });
    }
    Ok(Document { prolog, root })
}

use recognizer_framework::Attributes;
use std::fmt;

/// An element: tag, attributes and child elements in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Xml {
    tag: String,
    attributes: Attributes,
    children: Vec<Xml>,
}

impl Xml {
    pub fn new(tag: impl Into<String>, attributes: Attributes, children: Vec<Xml>) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            children,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Value of the attribute `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn children(&self) -> &[Xml] {
        &self.children
    }

    /// First child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&Xml> {
        self.children.iter().find(|child| child.tag == tag)
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        write!(f, "{:indent$}<{}", "", self.tag, indent = level)?;

        // HashMap order is arbitrary; sort for stable output.
        let mut attributes: Vec<_> = self.attributes.iter().collect();
        attributes.sort();
        for (key, value) in attributes {
            write!(f, " {key}=\"{value}\"")?;
        }

        if self.children.is_empty() {
            return writeln!(f, " />");
        }
        writeln!(f, ">")?;
        for child in &self.children {
            child.write_indented(f, level + 2)?;
        }
        writeln!(f, "{:indent$}</{}>", "", self.tag, indent = level)
    }
}

impl fmt::Display for Xml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

/// A parsed document: the prolog's attributes and the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub prolog: Attributes,
    pub root: Xml,
}

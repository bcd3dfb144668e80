//! XML parse errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, XmlError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XmlError {
    #[error("missing or malformed <?xml ...?> prolog at byte {offset}")]
    Prolog { offset: usize },

    #[error("no well-formed root element at byte {offset}")]
    Element { offset: usize },

    #[error("unexpected content after the root element at byte {offset}")]
    TrailingContent { offset: usize },
}

impl XmlError {
    /// Byte offset at which the failing stage started.
    pub fn offset(&self) -> usize {
        match *self {
            XmlError::Prolog { offset } | XmlError::Element { offset } | XmlError::TrailingContent { offset } => {
                offset
            }
        }
    }
}

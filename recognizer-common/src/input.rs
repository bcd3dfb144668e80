use crate::{Capture, Position};

/// The immutable text a parse runs over.
///
/// `Input` borrows its text, so every [`Capture`] taken from it is a
/// zero-copy view that cannot outlive the borrowed string. Copying an
/// `Input` is free; many parses and captures may share one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Input<'a> {
    text: &'a str,
}

impl<'a> Input<'a> {
    /// Creates an input over `text`.
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// Returns the whole input text.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Returns the length in bytes. A position whose offset equals this
    /// length has consumed the entire input.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns a position at the start of the input.
    pub fn begin(&self) -> Position {
        Position::new()
    }

    /// Returns `true` if `pos` has consumed the entire input.
    pub fn is_end(&self, pos: &Position) -> bool {
        pos.offset == self.text.len()
    }

    /// Returns the character at `pos`, or `None` past the end.
    #[inline]
    pub fn char_at(&self, pos: &Position) -> Option<char> {
        self.text.get(pos.offset..)?.chars().next()
    }

    /// Returns the text from `pos` to the end of the input.
    pub fn remaining(&self, pos: &Position) -> &'a str {
        self.text.get(pos.offset..).unwrap_or_default()
    }

    /// Returns the text between two byte offsets, or `None` if the range is
    /// out of bounds or splits a character.
    pub fn slice(&self, start: usize, end: usize) -> Option<Capture<'a>> {
        self.text.get(start..end).map(|text| Capture::new(text, start))
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(text: &'a String) -> Self {
        Self::new(text.as_str())
    }
}

impl std::fmt::Display for Input<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_char_at() {
        let input = Input::new("aé");
        let mut pos = input.begin();
        assert_eq!(input.char_at(&pos), Some('a'));
        pos.step('a');
        assert_eq!(input.char_at(&pos), Some('é'));
        pos.step('é');
        assert_eq!(input.char_at(&pos), None);
        assert!(input.is_end(&pos));
    }

    #[test]
    fn test_input_char_at_inside_character() {
        let input = Input::new("é");
        let pos = Position {
            offset: 1,
            index: 0,
            delta: 0,
        };
        assert_eq!(input.char_at(&pos), None);
    }

    #[test]
    fn test_input_slice() {
        let input = Input::new("hello world");
        let capture = input.slice(6, 11);
        assert_eq!(capture.map(|c| c.start()), Some(6));
        assert_eq!(capture.map(|c| c.as_str()), Some("world"));
        assert_eq!(input.slice(6, 20), None);
    }

    #[test]
    fn test_input_remaining() {
        let input = Input::new("hello world");
        let pos = Position {
            offset: 6,
            index: 6,
            delta: 0,
        };
        assert_eq!(input.remaining(&pos), "world");
        assert_eq!(input.remaining(&Position { offset: 99, ..pos }), "");
    }

    #[test]
    fn test_input_empty() {
        let input = Input::new("");
        assert!(input.is_empty());
        assert!(input.is_end(&input.begin()));
        assert_eq!(input.char_at(&input.begin()), None);
    }
}

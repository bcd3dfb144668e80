use std::ops::Deref;

/// Borrowed view of the input text a recognizer matched.
///
/// A capture is a slice of the [`Input`](crate::Input) it came from plus
/// the byte offset it starts at. It derefs to `str`, so it can be used
/// wherever `&str` is expected; call `to_string()` to keep the text after
/// the input goes away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Capture<'a> {
    /// Creates a capture of `text`, which starts at byte `start` of its input.
    pub fn new(text: &'a str, start: usize) -> Self {
        Self { text, start }
    }

    /// Creates a zero-length capture at `start`.
    pub fn empty_at(start: usize) -> Self {
        Self { text: "", start }
    }

    /// Returns the captured text with the input's lifetime.
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Returns the start offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the end offset.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Returns the length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Capture<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text)
    }
}

impl Deref for Capture<'_> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.text
    }
}

impl AsRef<str> for Capture<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl PartialEq<&str> for Capture<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<str> for Capture<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<Capture<'_>> for &str {
    fn eq(&self, other: &Capture<'_>) -> bool {
        *self == other.text
    }
}

impl From<Capture<'_>> for String {
    fn from(capture: Capture<'_>) -> Self {
        capture.text.to_owned()
    }
}

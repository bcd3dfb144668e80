use crate::{Capture, Input};

/// A cursor into an [`Input`].
///
/// Every recognizer receives a `&mut Position`. On failure it leaves the
/// position untouched; on success it moves the position just past the
/// matched text. A `Position` is `Copy`, so a rule takes a local copy, runs
/// its sub-rules against the copy, and commits the copy back only when the
/// whole rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Byte offset into the input. Always on a `char` boundary.
    pub offset: usize,
    /// Number of characters before `offset`.
    pub index: usize,
    /// Number of characters covered by the most recent successful advance.
    pub delta: usize,
}

impl Position {
    /// Creates a position at the start of the input.
    pub fn new() -> Self {
        Self {
            offset: 0,
            index: 0,
            delta: 0,
        }
    }

    /// Returns a copy of this position to run a sub-rule against.
    pub fn save(&self) -> Position {
        *self
    }

    /// Moves to `next` if it lies beyond the current offset.
    ///
    /// Returns `false` and leaves `self` untouched when `next` made no
    /// progress. Greedy recognizers rely on this to report an empty match as
    /// a failure.
    pub fn commit(&mut self, next: Position) -> bool {
        if next.offset == self.offset {
            return false;
        }
        self.delta = next.index.abs_diff(self.index);
        self.offset = next.offset;
        self.index = next.index;
        true
    }

    /// Like [`commit`](Self::commit), additionally returning the text between
    /// the current offset and `next`.
    pub fn commit_capture<'a>(&mut self, next: Position, input: &Input<'a>) -> Option<Capture<'a>> {
        let capture = input.slice(self.offset, next.offset)?;
        self.commit(next).then_some(capture)
    }

    /// Advances past `ch`, the character at the current offset.
    pub fn step(&mut self, ch: char) -> bool {
        self.offset += ch.len_utf8();
        self.index += 1;
        self.delta = 1;
        true
    }

    /// Advances past `ch` and returns it as a capture.
    pub fn step_capture<'a>(&mut self, ch: char, input: &Input<'a>) -> Option<Capture<'a>> {
        let mut next = *self;
        next.step(ch);
        self.commit_capture(next, input)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.offset)
    }
}

use recognizer_common::{Capture, Input, Position};

/// A grammar rule.
///
/// Any function or closure with the recognizer signature is a rule, so
/// grammars are plain functions that can be handed to filters and helpers
/// expecting one.
pub trait Recognizer {
    /// Attempts to match at `pos`.
    ///
    /// The position is advanced only if the rule matches.
    fn recognize(&self, input: &Input<'_>, pos: &mut Position) -> bool;

    /// Attempts to match at `pos` and returns the span of the whole match.
    ///
    /// A rule that succeeds without consuming anything yields `None`.
    fn recognize_capture<'a>(&self, input: &Input<'a>, pos: &mut Position) -> Option<Capture<'a>> {
        let mut next = pos.save();
        if !self.recognize(input, &mut next) {
            return None;
        }
        pos.commit_capture(next, input)
    }

    /// Returns true if the rule, anchored at the start of `text`, consumes
    /// all of it.
    fn recognize_all(&self, text: &str) -> bool {
        let input = Input::new(text);
        let mut pos = input.begin();
        self.recognize(&input, &mut pos) && input.is_end(&pos)
    }
}

impl<F> Recognizer for F
where
    F: Fn(&Input<'_>, &mut Position) -> bool,
{
    #[inline]
    fn recognize(&self, input: &Input<'_>, pos: &mut Position) -> bool {
        self(input, pos)
    }
}

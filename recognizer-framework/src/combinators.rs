//! Helpers for writing grammars as boolean expressions.

use recognizer_common::{Capture, Input, Position};

/// Accepts the outcome of a recognizer unconditionally.
///
/// Greedy recognizers fail on an empty match; wrapping them here makes the
/// run optional while the position still reflects whatever was consumed.
#[inline]
pub fn optional(_matched: bool) -> bool {
    true
}

/// Runs `sequence` on a copy of `pos` and commits the copy only if the
/// sequence succeeds and consumed input.
///
/// ```
/// use recognizer_framework::{attempt, Input, Position, Primitives};
///
/// let input = Input::new("Attn");
/// let mut pos = Position::new();
/// let matched = attempt(&mut pos, |i| input.literal_ignore_case("Attention", i))
///     || attempt(&mut pos, |i| input.literal_ignore_case("Attn", i));
/// assert!(matched);
/// assert_eq!(pos.offset, 4);
/// ```
pub fn attempt<F>(pos: &mut Position, sequence: F) -> bool
where
    F: FnOnce(&mut Position) -> bool,
{
    let mut next = pos.save();
    sequence(&mut next) && pos.commit(next)
}

/// Like [`attempt`], returning the text the sequence consumed.
pub fn attempt_capture<'a, F>(input: &Input<'a>, pos: &mut Position, sequence: F) -> Option<Capture<'a>>
where
    F: FnOnce(&mut Position) -> bool,
{
    let mut next = pos.save();
    if !sequence(&mut next) {
        return None;
    }
    pos.commit_capture(next, input)
}

//! `key="value"` attribute pairs, as found in XML tags and prologs.

use crate::combinators::optional;
use crate::primitives::Primitives;
use recognizer_common::{Capture, Input, Position};
use std::collections::HashMap;
use tracing::debug;

/// Attributes collected by [`key_value_pairs`], keyed by name.
pub type Attributes = HashMap<String, String>;

/// Separator used by the unsuffixed functions.
pub const DEFAULT_SEPARATOR: char = '=';

/// Characters that end a key, besides the separator and whitespace.
const KEY_TERMINATORS: [char; 5] = ['"', '<', '>', '/', '?'];

fn ends_key(ch: char, eq: char) -> bool {
    ch == eq || ch.is_whitespace() || KEY_TERMINATORS.contains(&ch)
}

/// Recognizes `key="value"`.
pub fn key_value_pair(input: &Input<'_>, pos: &mut Position) -> bool {
    key_value_pair_with(input, DEFAULT_SEPARATOR, pos)
}

/// Recognizes `key<eq>"value"` for a caller-chosen separator.
pub fn key_value_pair_with(input: &Input<'_>, eq: char, pos: &mut Position) -> bool {
    key_value_pair_capture_with(input, eq, pos).is_some()
}

/// Recognizes `key="value"` and returns the key and value text.
pub fn key_value_pair_capture<'a>(
    input: &Input<'a>,
    pos: &mut Position,
) -> Option<(Capture<'a>, Capture<'a>)> {
    key_value_pair_capture_with(input, DEFAULT_SEPARATOR, pos)
}

/// Recognizes `key<eq>"value"` and returns the key and value text.
///
/// The key starts with a letter or digit and runs up to the separator,
/// whitespace or one of `"<>/?`. The value may be empty.
pub fn key_value_pair_capture_with<'a>(
    input: &Input<'a>,
    eq: char,
    pos: &mut Position,
) -> Option<(Capture<'a>, Capture<'a>)> {
    let mut i = pos.save();

    let key_start = i.offset;
    if !(input.letter_or_digit(&mut i) && optional(input.until_matches(&mut i, |ch| ends_key(ch, eq)))) {
        return None;
    }
    let key = input.slice(key_start, i.offset)?;

    if !(input.one_char(eq, &mut i) && input.one_char('"', &mut i)) {
        return None;
    }
    let value_start = i.offset;
    optional(input.until_char('"', &mut i));
    let value = input.slice(value_start, i.offset)?;

    (input.one_char('"', &mut i) && pos.commit(i)).then_some((key, value))
}

/// Collects `key="value"` pairs separated by optional whitespace.
pub fn key_value_pairs(input: &Input<'_>, pos: &mut Position) -> Option<Attributes> {
    key_value_pairs_with(input, DEFAULT_SEPARATOR, pos)
}

/// Collects `key<eq>"value"` pairs separated by optional whitespace.
///
/// Returns `None` when not a single pair matched. A repeated key keeps the
/// last value.
pub fn key_value_pairs_with(input: &Input<'_>, eq: char, pos: &mut Position) -> Option<Attributes> {
    let mut attributes = Attributes::new();
    let mut i = pos.save();
    loop {
        let mut next = i.save();
        optional(input.whitespaces(&mut next));
        let Some((key, value)) = key_value_pair_capture_with(input, eq, &mut next) else {
            break;
        };
        if let Some(previous) = attributes.insert(key.to_string(), value.to_string()) {
            debug!(key = %key, previous = %previous, value = %value, "duplicate attribute overwritten");
        }
        i = next;
    }
    pos.commit(i).then_some(attributes)
}

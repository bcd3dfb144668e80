//! Zip codes and Canadian-style postal codes.

use recognizer_framework::{optional, Capture, Input, Position, Primitives};

/// Length of each half of a postal code.
const POSTAL_HALF_LEN: usize = 3;

/// Recognizes a zip code: one or more digits.
pub fn zip_code(input: &Input<'_>, pos: &mut Position) -> bool {
    input.digits(pos)
}

/// Recognizes a zip code and returns it.
pub fn zip_code_capture<'a>(input: &Input<'a>, pos: &mut Position) -> Option<Capture<'a>> {
    input.digits_capture(pos)
}

/// Returns the position after a postal code such as `A1A 1A1`.
///
/// Each half is a run of exactly three letters or digits; the halves may be
/// separated by whitespace. Without a separator the first run swallows both
/// halves, so `K1A0B1` is rejected.
fn scan_postal_code(input: &Input<'_>, pos: &Position) -> Option<Position> {
    let mut i = pos.save();
    if !(input.letters_or_digits(&mut i) && i.delta == POSTAL_HALF_LEN) {
        return None;
    }
    optional(input.whitespaces(&mut i));
    (input.letters_or_digits(&mut i) && i.delta == POSTAL_HALF_LEN).then_some(i)
}

/// Recognizes a postal code.
pub fn postal_code(input: &Input<'_>, pos: &mut Position) -> bool {
    scan_postal_code(input, pos).is_some_and(|next| pos.commit(next))
}

/// Recognizes a postal code and returns it, separator included.
pub fn postal_code_capture<'a>(input: &Input<'a>, pos: &mut Position) -> Option<Capture<'a>> {
    let next = scan_postal_code(input, pos)?;
    pos.commit_capture(next, input)
}

/// Recognizes a zip code, falling back to a postal code.
pub fn postal_or_zip_code(input: &Input<'_>, pos: &mut Position) -> bool {
    zip_code(input, pos) || postal_code(input, pos)
}

/// Recognizes a zip or postal code and returns it.
pub fn postal_or_zip_code_capture<'a>(input: &Input<'a>, pos: &mut Position) -> Option<Capture<'a>> {
    zip_code_capture(input, pos).or_else(|| postal_code_capture(input, pos))
}

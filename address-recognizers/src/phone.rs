//! Phone and fax numbers.
//!
//! ```text
//! ws? '+'? ws? digits? ws? ('(' digits ')')? ws? '/'? ws? (digits | delimiter)+
//! ```
//!
//! Only the trailing run of delimited digit groups is mandatory, and it
//! must contain at least one group of digits.

use recognizer_framework::{attempt, optional, Capture, Input, Position, Primitives};

/// Delimiters allowed between the digit groups of a phone number.
pub const PHONE_DELIMITERS: [char; 2] = [' ', '-'];

/// Recognizes a single digit in parentheses, e.g. `(0)`.
pub fn bracketed_digit(input: &Input<'_>, pos: &mut Position) -> bool {
    attempt(pos, |i| input.one_char('(', i) && input.digit(i) && input.one_char(')', i))
}

/// Recognizes `(d)` and returns the digit.
pub fn bracketed_digit_capture<'a>(input: &Input<'a>, pos: &mut Position) -> Option<Capture<'a>> {
    bracketed(input, pos, |i| input.digit_capture(i))
}

/// Recognizes digits in parentheses, e.g. `(089)`.
pub fn bracketed_digits(input: &Input<'_>, pos: &mut Position) -> bool {
    attempt(pos, |i| input.one_char('(', i) && input.digits(i) && input.one_char(')', i))
}

/// Recognizes `(ddd)` and returns the digits without the parentheses.
pub fn bracketed_digits_capture<'a>(input: &Input<'a>, pos: &mut Position) -> Option<Capture<'a>> {
    bracketed(input, pos, |i| input.digits_capture(i))
}

fn bracketed<'a, F>(input: &Input<'a>, pos: &mut Position, inner: F) -> Option<Capture<'a>>
where
    F: FnOnce(&mut Position) -> Option<Capture<'a>>,
{
    let mut i = pos.save();
    if !input.one_char('(', &mut i) {
        return None;
    }
    let captured = inner(&mut i)?;
    (input.one_char(')', &mut i) && pos.commit(i)).then_some(captured)
}

/// Recognizes digit groups separated by runs of `delimiters`, e.g.
/// `636-48018`. At least one group is required. Leading and trailing
/// delimiters are consumed.
pub fn delimited_digits(input: &Input<'_>, delimiters: &[char], pos: &mut Position) -> bool {
    scan_delimited(input, delimiters, pos, |_| {})
}

/// Like [`delimited_digits`], returning the whole span.
pub fn delimited_digits_capture<'a>(
    input: &Input<'a>,
    delimiters: &[char],
    pos: &mut Position,
) -> Option<Capture<'a>> {
    let start = pos.offset;
    scan_delimited(input, delimiters, pos, |_| {})
        .then(|| input.slice(start, pos.offset))
        .flatten()
}

/// Like [`delimited_digits`], returning each digit group.
pub fn delimited_digit_groups<'a>(
    input: &Input<'a>,
    delimiters: &[char],
    pos: &mut Position,
) -> Option<Vec<Capture<'a>>> {
    let mut groups = Vec::new();
    scan_delimited(input, delimiters, pos, |group| groups.push(group)).then_some(groups)
}

fn scan_delimited<'a, G>(input: &Input<'a>, delimiters: &[char], pos: &mut Position, mut on_group: G) -> bool
where
    G: FnMut(Capture<'a>),
{
    let mut i = pos.save();
    let mut groups = 0usize;
    loop {
        if let Some(group) = input.digits_capture(&mut i) {
            groups += 1;
            on_group(group);
        } else if !input.chars_of(delimiters, &mut i) {
            break;
        }
    }
    groups > 0 && pos.commit(i)
}

/// Returns the position after a phone number starting at `pos`, reporting
/// every digit group (country code, area code, body) in order.
fn scan_phone_number<'a, G>(input: &Input<'a>, pos: &Position, mut on_group: G) -> Option<Position>
where
    G: FnMut(Capture<'a>),
{
    let mut i = pos.save();
    let matched = optional(input.whitespaces(&mut i))
        && optional(input.one_char('+', &mut i))
        && optional(input.whitespaces(&mut i))
        && optional(input.digits_capture(&mut i).map(&mut on_group).is_some())
        && optional(input.whitespaces(&mut i))
        && optional(bracketed_digits_capture(input, &mut i).map(&mut on_group).is_some())
        && optional(input.whitespaces(&mut i))
        && optional(input.one_char('/', &mut i))
        && optional(input.whitespaces(&mut i))
        && scan_delimited(input, &PHONE_DELIMITERS, &mut i, &mut on_group);
    matched.then_some(i)
}

/// Recognizes a phone number such as `+49-89-636-48018` or
/// `(089) / 636-48018`.
pub fn phone_number(input: &Input<'_>, pos: &mut Position) -> bool {
    scan_phone_number(input, pos, |_| {}).is_some_and(|next| pos.commit(next))
}

/// Recognizes a phone number and returns its text.
pub fn phone_number_capture<'a>(input: &Input<'a>, pos: &mut Position) -> Option<Capture<'a>> {
    let next = scan_phone_number(input, pos, |_| {})?;
    pos.commit_capture(next, input)
}

/// Recognizes a phone number and returns its digit groups in order.
pub fn phone_number_groups<'a>(input: &Input<'a>, pos: &mut Position) -> Option<Vec<Capture<'a>>> {
    let mut groups = Vec::new();
    let next = scan_phone_number(input, pos, |group| groups.push(group))?;
    pos.commit(next).then_some(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_digit_is_single() {
        let input = Input::new("(12)");
        let mut pos = Position::new();
        assert!(!bracketed_digit(&input, &mut pos));
        assert!(bracketed_digits(&input, &mut pos));
        assert!(input.is_end(&pos));
    }

    #[test]
    fn test_bracketed_capture_excludes_parentheses() {
        let input = Input::new("(7)");
        let mut pos = Position::new();
        let digit = bracketed_digit_capture(&input, &mut pos);
        assert_eq!(digit.map(|d| d.as_str()), Some("7"));
        assert_eq!(pos.offset, 3);
    }

    #[test]
    fn test_unclosed_bracket_fails() {
        let input = Input::new("(555 ");
        let mut pos = Position::new();
        assert!(bracketed_digits_capture(&input, &mut pos).is_none());
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_delimiters_alone_are_not_a_number() {
        let input = Input::new(" - -");
        let mut pos = Position::new();
        assert!(!delimited_digits(&input, &PHONE_DELIMITERS, &mut pos));
        assert_eq!(pos.offset, 0);
    }
}

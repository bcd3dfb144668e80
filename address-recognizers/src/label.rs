//! "Attention" and "care of" labels.

use recognizer_framework::{optional, Capture, Input, Position, Primitives};

/// Spellings of the attention label, longest first so that no spelling is
/// shadowed by one of its prefixes.
const ATTENTION_LABELS: [&str; 3] = ["Attention", "Attn", "Att"];

const CARE_OF_LABELS: [&str; 2] = ["C/O", "C\\O"];

/// Recognizes `Attention`, `Attn` or `Att`, ignoring case.
pub fn attention_label(input: &Input<'_>, pos: &mut Position) -> bool {
    attention_label_capture(input, pos).is_some()
}

/// Recognizes an attention label and returns it as spelled in the input.
pub fn attention_label_capture<'a>(input: &Input<'a>, pos: &mut Position) -> Option<Capture<'a>> {
    ATTENTION_LABELS
        .iter()
        .find_map(|label| input.literal_ignore_case_capture(label, pos))
}

/// Recognizes an attention label optionally followed by `:` or whitespace.
pub fn attention(input: &Input<'_>, pos: &mut Position) -> bool {
    attention_capture(input, pos).is_some()
}

/// Like [`attention`], returning the label.
pub fn attention_capture<'a>(input: &Input<'a>, pos: &mut Position) -> Option<Capture<'a>> {
    let mut i = pos.save();
    let label = attention_label_capture(input, &mut i)?;
    optional(input.one_char(':', &mut i) || input.whitespaces(&mut i));
    pos.commit(i).then_some(label)
}

/// Recognizes `C/O` or `C\O`, ignoring case, after optional whitespace.
pub fn care_of(input: &Input<'_>, pos: &mut Position) -> bool {
    care_of_capture(input, pos).is_some()
}

/// Like [`care_of`], returning the label without the leading whitespace.
pub fn care_of_capture<'a>(input: &Input<'a>, pos: &mut Position) -> Option<Capture<'a>> {
    let mut i = pos.save();
    optional(input.whitespaces(&mut i));
    let label = CARE_OF_LABELS
        .iter()
        .find_map(|label| input.literal_ignore_case_capture(label, &mut i))?;
    pos.commit(i).then_some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attention_capture_is_longest_label() {
        let input = Input::new("Attention:  Some Person");
        let mut pos = Position::new();
        let label = attention_capture(&input, &mut pos);
        assert_eq!(label.map(|l| l.len()), Some(9));
        assert_eq!(pos.offset, 10);
    }

    #[test]
    fn test_attention_label_spellings() {
        for (text, len) in [("ATTN", 4), ("att", 3), ("Attention", 9), ("attentio", 3)] {
            let input = Input::new(text);
            let mut pos = Position::new();
            assert!(attention_label(&input, &mut pos), "{text}");
            assert_eq!(pos.offset, len, "{text}");
        }
    }

    #[test]
    fn test_attention_rejects_other_words() {
        let input = Input::new("At the door");
        let mut pos = Position::new();
        assert!(!attention(&input, &mut pos));
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_care_of() {
        for text in ["C/O Jane", "  c\\o Jane", "c/o"] {
            let input = Input::new(text);
            let mut pos = Position::new();
            let label = care_of_capture(&input, &mut pos);
            assert_eq!(label.map(|l| l.len()), Some(3), "{text}");
        }
        let input = Input::new("CO Jane");
        let mut pos = Position::new();
        assert!(!care_of(&input, &mut pos));
    }
}

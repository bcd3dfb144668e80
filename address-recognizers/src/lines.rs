//! Filters that pick the lines of an address block matching a grammar.
//!
//! Every rule is anchored at the start of the line. A [`Anchor::Line`]
//! filter additionally requires the rule, plus optional trailing
//! whitespace, to consume the whole line; an [`Anchor::Prefix`] filter only
//! looks at how the line begins.

use crate::label::{attention, care_of};
use crate::phone::phone_number;
use crate::postal::{postal_or_zip_code, zip_code};
use recognizer_framework::{optional, Input, Position, Primitives, Recognizer};
use tracing::trace;

/// A rule as a plain function pointer.
pub type Rule = fn(&Input<'_>, &mut Position) -> bool;

const PHONE_LABELS: [&str; 2] = ["Fax", "Phone"];

/// How much of a line a rule has to account for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The line starts with a match.
    Prefix,
    /// The match, followed by optional whitespace, is the entire line.
    Line,
}

/// Recognizes a `Phone:` or `Fax:` label followed by a phone number.
pub fn phone_line(input: &Input<'_>, pos: &mut Position) -> bool {
    let mut i = pos.save();
    optional(input.whitespaces(&mut i))
        && PHONE_LABELS
            .iter()
            .any(|label| input.literal_ignore_case(label, &mut i))
        && optional(input.whitespaces(&mut i))
        && optional(input.one_char(':', &mut i))
        && optional(input.whitespaces(&mut i))
        && phone_number(input, &mut i)
        && pos.commit(i)
}

/// Recognizes an attention label at the start of a line.
pub fn attention_line(input: &Input<'_>, pos: &mut Position) -> bool {
    attention(input, pos)
}

/// Recognizes a `c/o` label at the start of a line.
pub fn care_of_line(input: &Input<'_>, pos: &mut Position) -> bool {
    care_of(input, pos)
}

/// Returns the addressee of an attention line, e.g. `Some Person` for
/// `Attn:  Some Person`. `None` if the line is not an attention line or
/// names nobody.
pub fn attention_addressee(line: &str) -> Option<&str> {
    let input = Input::new(line);
    let mut pos = input.begin();
    if !attention(&input, &mut pos) {
        return None;
    }
    let addressee = input.remaining(&pos).trim();
    (!addressee.is_empty()).then_some(addressee)
}

/// Iterator over the lines accepted by a rule. Created by the
/// [`AddressLines`] methods.
#[derive(Debug, Clone)]
pub struct Matching<I, R> {
    lines: I,
    rule: R,
    anchor: Anchor,
    name: &'static str,
}

impl<I, R: Recognizer> Matching<I, R> {
    fn new(lines: I, rule: R, anchor: Anchor, name: &'static str) -> Self {
        Self {
            lines,
            rule,
            anchor,
            name,
        }
    }

    /// Returns true if `line` passes this filter.
    pub fn accepts(&self, line: &str) -> bool {
        let input = Input::new(line);
        let mut pos = input.begin();
        if !self.rule.recognize(&input, &mut pos) {
            return false;
        }
        match self.anchor {
            Anchor::Prefix => true,
            Anchor::Line => {
                optional(input.whitespaces(&mut pos));
                input.is_end(&pos)
            }
        }
    }
}

impl<'a, I, R> Iterator for Matching<I, R>
where
    I: Iterator<Item = &'a str>,
    R: Recognizer,
{
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(line) = self.lines.next() {
            if self.accepts(line) {
                trace!(filter = self.name, line, "accepted");
                return Some(line);
            }
            trace!(filter = self.name, line, "rejected");
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.lines.size_hint().1)
    }
}

/// Address-block filters for any iterator of lines. Order is preserved.
pub trait AddressLines<'a>: Iterator<Item = &'a str> + Sized {
    /// Lines holding a labelled phone or fax number and nothing else.
    fn phone_lines(self) -> Matching<Self, Rule> {
        Matching::new(self, phone_line as Rule, Anchor::Line, "phone")
    }

    /// Lines holding a zip or postal code and nothing else.
    fn postal_code_lines(self) -> Matching<Self, Rule> {
        Matching::new(self, postal_or_zip_code as Rule, Anchor::Line, "postal")
    }

    /// Lines holding a zip code and nothing else.
    fn zip_code_lines(self) -> Matching<Self, Rule> {
        Matching::new(self, zip_code as Rule, Anchor::Line, "zip")
    }

    /// Lines starting with an attention label.
    fn attention_lines(self) -> Matching<Self, Rule> {
        Matching::new(self, attention_line as Rule, Anchor::Prefix, "attention")
    }

    /// Lines starting with a `c/o` label.
    fn care_of_lines(self) -> Matching<Self, Rule> {
        Matching::new(self, care_of_line as Rule, Anchor::Prefix, "care-of")
    }

    /// Lines that `rule` matches in full, allowing trailing whitespace.
    fn full_lines<R: Recognizer>(self, rule: R) -> Matching<Self, R> {
        Matching::new(self, rule, Anchor::Line, "custom")
    }

    /// Lines that start with a match of `rule`.
    fn prefixed_lines<R: Recognizer>(self, rule: R) -> Matching<Self, R> {
        Matching::new(self, rule, Anchor::Prefix, "custom")
    }
}

impl<'a, I> AddressLines<'a> for I where I: Iterator<Item = &'a str> {}

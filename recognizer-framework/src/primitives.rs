use crate::class::CharClass;
use recognizer_common::{Capture, Input, Position};

/// Generates the single / while / until recognizers, each with a capturing
/// variant, for a named character class.
macro_rules! class_shorthands {
    ($($class:ident: $one:ident, $one_capture:ident, $many:ident, $many_capture:ident, $until:ident, $until_capture:ident;)*) => {
        $(
            #[doc = concat!("Recognizes one `", stringify!($class), "` character.")]
            #[inline]
            fn $one(&self, pos: &mut Position) -> bool {
                self.class(CharClass::$class, pos)
            }

            #[doc = concat!("Recognizes and captures one `", stringify!($class), "` character.")]
            #[inline]
            fn $one_capture(&self, pos: &mut Position) -> Option<Capture<'a>> {
                self.class_capture(CharClass::$class, pos)
            }

            #[doc = concat!("Recognizes a run of `", stringify!($class), "` characters. Fails on an empty run.")]
            #[inline]
            fn $many(&self, pos: &mut Position) -> bool {
                self.while_class(CharClass::$class, pos)
            }

            #[doc = concat!("Recognizes and captures a run of `", stringify!($class), "` characters.")]
            #[inline]
            fn $many_capture(&self, pos: &mut Position) -> Option<Capture<'a>> {
                self.while_class_capture(CharClass::$class, pos)
            }

            #[doc = concat!("Consumes everything up to the next `", stringify!($class), "` character.")]
            #[inline]
            fn $until(&self, pos: &mut Position) -> bool {
                self.until_class(CharClass::$class, pos)
            }

            #[doc = concat!("Consumes and captures everything up to the next `", stringify!($class), "` character.")]
            #[inline]
            fn $until_capture(&self, pos: &mut Position) -> Option<Capture<'a>> {
                self.until_class_capture(CharClass::$class, pos)
            }
        )*
    };
}

/// Primitive recognizers over an [`Input`].
///
/// Every method follows the same contract: on success the position is
/// moved just past the matched text, on failure it is left untouched.
/// Methods come in three shapes:
///
/// - single character (`digit`, `one_char`, `class`): match exactly one
///   character;
/// - while (`digits`, `chars`, `while_class`): match the longest run of
///   characters, and **fail when the run is empty**. Wrap the call in
///   [`optional`](crate::optional) where an absent run is acceptable;
/// - until (`until_digit`, `until_char`, `until_class`): consume every
///   character up to, not including, the terminator. Fails when the
///   terminator is at the current position.
///
/// Each shape has a `_capture` variant returning the matched text.
pub trait Primitives<'a> {
    /// Returns the input the recognizers run over.
    fn input(&self) -> &Input<'a>;

    /// Returns the position after the longest run of characters starting
    /// at `pos` that satisfy `predicate`.
    fn scan_while<P>(&self, pos: &Position, mut predicate: P) -> Position
    where
        P: FnMut(char) -> bool,
    {
        let input = self.input();
        let mut next = *pos;
        while let Some(ch) = input.char_at(&next) {
            if !predicate(ch) {
                break;
            }
            next.step(ch);
        }
        next
    }

    /// Recognizes one character satisfying `predicate`.
    #[inline]
    fn char_matches<P>(&self, pos: &mut Position, predicate: P) -> bool
    where
        P: FnOnce(char) -> bool,
    {
        match self.input().char_at(pos) {
            Some(ch) if predicate(ch) => pos.step(ch),
            _ => false,
        }
    }

    /// Recognizes and captures one character satisfying `predicate`.
    #[inline]
    fn char_matches_capture<P>(&self, pos: &mut Position, predicate: P) -> Option<Capture<'a>>
    where
        P: FnOnce(char) -> bool,
    {
        let input = self.input();
        let ch = input.char_at(pos).filter(|&ch| predicate(ch))?;
        pos.step_capture(ch, input)
    }

    /// Recognizes a non-empty run of characters satisfying `predicate`.
    fn while_matches<P>(&self, pos: &mut Position, predicate: P) -> bool
    where
        P: FnMut(char) -> bool,
    {
        let next = self.scan_while(pos, predicate);
        pos.commit(next)
    }

    /// Recognizes and captures a non-empty run of characters satisfying
    /// `predicate`.
    fn while_matches_capture<P>(&self, pos: &mut Position, predicate: P) -> Option<Capture<'a>>
    where
        P: FnMut(char) -> bool,
    {
        let next = self.scan_while(pos, predicate);
        pos.commit_capture(next, self.input())
    }

    /// Consumes characters up to the first one satisfying `predicate`.
    fn until_matches<P>(&self, pos: &mut Position, mut predicate: P) -> bool
    where
        P: FnMut(char) -> bool,
    {
        self.while_matches(pos, |ch| !predicate(ch))
    }

    /// Consumes and captures characters up to the first one satisfying
    /// `predicate`.
    fn until_matches_capture<P>(&self, pos: &mut Position, mut predicate: P) -> Option<Capture<'a>>
    where
        P: FnMut(char) -> bool,
    {
        self.while_matches_capture(pos, |ch| !predicate(ch))
    }

    /// Recognizes one character of `class`.
    #[inline]
    fn class(&self, class: CharClass, pos: &mut Position) -> bool {
        self.char_matches(pos, |ch| class.matches(ch))
    }

    /// Recognizes and captures one character of `class`.
    #[inline]
    fn class_capture(&self, class: CharClass, pos: &mut Position) -> Option<Capture<'a>> {
        self.char_matches_capture(pos, |ch| class.matches(ch))
    }

    /// Recognizes a non-empty run of `class` characters.
    fn while_class(&self, class: CharClass, pos: &mut Position) -> bool {
        self.while_matches(pos, |ch| class.matches(ch))
    }

    /// Recognizes and captures a non-empty run of `class` characters.
    fn while_class_capture(&self, class: CharClass, pos: &mut Position) -> Option<Capture<'a>> {
        self.while_matches_capture(pos, |ch| class.matches(ch))
    }

    /// Consumes everything up to the next `class` character.
    fn until_class(&self, class: CharClass, pos: &mut Position) -> bool {
        self.until_matches(pos, |ch| class.matches(ch))
    }

    /// Consumes and captures everything up to the next `class` character.
    fn until_class_capture(&self, class: CharClass, pos: &mut Position) -> Option<Capture<'a>> {
        self.until_matches_capture(pos, |ch| class.matches(ch))
    }

    class_shorthands! {
        Digit: digit, digit_capture, digits, digits_capture, until_digit, until_digit_capture;
        Letter: letter, letter_capture, letters, letters_capture, until_letter, until_letter_capture;
        LetterOrDigit: letter_or_digit, letter_or_digit_capture, letters_or_digits,
            letters_or_digits_capture, until_letter_or_digit, until_letter_or_digit_capture;
        WhiteSpace: whitespace, whitespace_capture, whitespaces, whitespaces_capture,
            until_whitespace, until_whitespace_capture;
        Symbol: symbol, symbol_capture, symbols, symbols_capture, until_symbol, until_symbol_capture;
        Punctuation: punctuation, punctuation_capture, punctuations, punctuations_capture,
            until_punctuation, until_punctuation_capture;
    }

    /// Recognizes the character `c`.
    #[inline]
    fn one_char(&self, c: char, pos: &mut Position) -> bool {
        self.char_matches(pos, |ch| ch == c)
    }

    /// Recognizes and captures the character `c`.
    #[inline]
    fn one_char_capture(&self, c: char, pos: &mut Position) -> Option<Capture<'a>> {
        self.char_matches_capture(pos, |ch| ch == c)
    }

    /// Recognizes a non-empty run of `c`.
    fn chars(&self, c: char, pos: &mut Position) -> bool {
        self.while_matches(pos, |ch| ch == c)
    }

    /// Recognizes and captures a non-empty run of `c`.
    fn chars_capture(&self, c: char, pos: &mut Position) -> Option<Capture<'a>> {
        self.while_matches_capture(pos, |ch| ch == c)
    }

    /// Consumes everything up to the next `c`.
    fn until_char(&self, c: char, pos: &mut Position) -> bool {
        self.while_matches(pos, |ch| ch != c)
    }

    /// Consumes and captures everything up to the next `c`.
    fn until_char_capture(&self, c: char, pos: &mut Position) -> Option<Capture<'a>> {
        self.while_matches_capture(pos, |ch| ch != c)
    }

    /// Recognizes one character from `set`.
    #[inline]
    fn one_of(&self, set: &[char], pos: &mut Position) -> bool {
        self.char_matches(pos, |ch| in_set(set, ch))
    }

    /// Recognizes and captures one character from `set`.
    #[inline]
    fn one_of_capture(&self, set: &[char], pos: &mut Position) -> Option<Capture<'a>> {
        self.char_matches_capture(pos, |ch| in_set(set, ch))
    }

    /// Recognizes a non-empty run of characters from `set`.
    fn chars_of(&self, set: &[char], pos: &mut Position) -> bool {
        self.while_matches(pos, |ch| in_set(set, ch))
    }

    /// Recognizes and captures a non-empty run of characters from `set`.
    fn chars_of_capture(&self, set: &[char], pos: &mut Position) -> Option<Capture<'a>> {
        self.while_matches_capture(pos, |ch| in_set(set, ch))
    }

    /// Consumes everything up to the next character from `set`.
    fn until_one_of(&self, set: &[char], pos: &mut Position) -> bool {
        self.while_matches(pos, |ch| !in_set(set, ch))
    }

    /// Consumes and captures everything up to the next character from `set`.
    fn until_one_of_capture(&self, set: &[char], pos: &mut Position) -> Option<Capture<'a>> {
        self.while_matches_capture(pos, |ch| !in_set(set, ch))
    }

    /// Returns the position just past `text` if the input at `pos` starts
    /// with it.
    fn scan_literal(&self, pos: &Position, text: &str, ignore_case: bool) -> Option<Position> {
        let input = self.input();
        let mut next = *pos;
        for expected in text.chars() {
            let ch = input.char_at(&next)?;
            if ch != expected && !(ignore_case && eq_ignore_case(ch, expected)) {
                return None;
            }
            next.step(ch);
        }
        Some(next)
    }

    /// Returns the position after as many back-to-back copies of `text` as
    /// the input holds at `pos`.
    fn scan_literals(&self, pos: &Position, text: &str, ignore_case: bool) -> Position {
        let mut next = *pos;
        if text.is_empty() {
            return next;
        }
        while let Some(after) = self.scan_literal(&next, text, ignore_case) {
            next = after;
        }
        next
    }

    /// Recognizes `text` exactly.
    fn literal(&self, text: &str, pos: &mut Position) -> bool {
        self.scan_literal(pos, text, false)
            .is_some_and(|next| pos.commit(next))
    }

    /// Recognizes and captures `text` exactly.
    fn literal_capture(&self, text: &str, pos: &mut Position) -> Option<Capture<'a>> {
        let next = self.scan_literal(pos, text, false)?;
        pos.commit_capture(next, self.input())
    }

    /// Recognizes `text`, ignoring case.
    fn literal_ignore_case(&self, text: &str, pos: &mut Position) -> bool {
        self.scan_literal(pos, text, true)
            .is_some_and(|next| pos.commit(next))
    }

    /// Recognizes and captures `text`, ignoring case. The capture holds the
    /// input's spelling.
    fn literal_ignore_case_capture(&self, text: &str, pos: &mut Position) -> Option<Capture<'a>> {
        let next = self.scan_literal(pos, text, true)?;
        pos.commit_capture(next, self.input())
    }

    /// Recognizes one or more repetitions of `text`.
    fn literals(&self, text: &str, pos: &mut Position) -> bool {
        let next = self.scan_literals(pos, text, false);
        pos.commit(next)
    }

    /// Recognizes and captures one or more repetitions of `text`.
    fn literals_capture(&self, text: &str, pos: &mut Position) -> Option<Capture<'a>> {
        let next = self.scan_literals(pos, text, false);
        pos.commit_capture(next, self.input())
    }

    /// Recognizes one or more repetitions of `text`, ignoring case.
    fn literals_ignore_case(&self, text: &str, pos: &mut Position) -> bool {
        let next = self.scan_literals(pos, text, true);
        pos.commit(next)
    }

    /// Recognizes and captures one or more repetitions of `text`, ignoring
    /// case.
    fn literals_ignore_case_capture(&self, text: &str, pos: &mut Position) -> Option<Capture<'a>> {
        let next = self.scan_literals(pos, text, true);
        pos.commit_capture(next, self.input())
    }
}

impl<'a> Primitives<'a> for Input<'a> {
    #[inline]
    fn input(&self) -> &Input<'a> {
        self
    }
}

/// Set membership, unrolled for the small sets grammars usually pass.
#[inline]
fn in_set(set: &[char], ch: char) -> bool {
    match *set {
        [] => false,
        [a] => ch == a,
        [a, b] => ch == a || ch == b,
        [a, b, c] => ch == a || ch == b || ch == c,
        _ => set.contains(&ch),
    }
}

fn eq_ignore_case(a: char, b: char) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(&b);
    }
    a.to_lowercase().eq(b.to_lowercase())
}

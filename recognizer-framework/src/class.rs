use unicode_general_category::{get_general_category, GeneralCategory};

/// A class of characters a single-character recognizer can test for.
///
/// Classes follow the Unicode general categories. An [`Input`] holds
/// Unicode scalar values, so a lone surrogate can never appear in it:
/// `Surrogate` and `HighSurrogate` match supplementary-plane characters
/// (the ones UTF-16 encodes as a high/low surrogate pair) and
/// `LowSurrogate` never matches.
///
/// [`Input`]: crate::Input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Decimal digit (Nd).
    Digit,
    /// Letter of any case (Lu, Ll, Lt, Lm, Lo).
    Letter,
    /// `Letter` or `Digit`.
    LetterOrDigit,
    /// Uppercase letter (Lu).
    Upper,
    /// Lowercase letter (Ll).
    Lower,
    /// White space as defined by `char::is_whitespace`.
    WhiteSpace,
    /// Math, currency, modifier and other symbols (Sm, Sc, Sk, So).
    Symbol,
    /// Punctuation (Pc, Pd, Ps, Pe, Pi, Pf, Po).
    Punctuation,
    /// Space, line and paragraph separators (Zs, Zl, Zp).
    Separator,
    /// Control character (Cc).
    Control,
    /// Character outside the Basic Multilingual Plane.
    Surrogate,
    /// Character whose UTF-16 encoding starts with a high surrogate.
    HighSurrogate,
    /// Never matches; see the type documentation.
    LowSurrogate,
}

impl CharClass {
    /// Every class, in declaration order.
    pub const ALL: [CharClass; 13] = [
        CharClass::Digit,
        CharClass::Letter,
        CharClass::LetterOrDigit,
        CharClass::Upper,
        CharClass::Lower,
        CharClass::WhiteSpace,
        CharClass::Symbol,
        CharClass::Punctuation,
        CharClass::Separator,
        CharClass::Control,
        CharClass::Surrogate,
        CharClass::HighSurrogate,
        CharClass::LowSurrogate,
    ];

    /// Returns `true` if `ch` belongs to this class.
    pub fn matches(self, ch: char) -> bool {
        match self {
            CharClass::Digit => is_digit(ch),
            CharClass::Letter => is_letter(ch),
            CharClass::LetterOrDigit => is_letter(ch) || is_digit(ch),
            CharClass::Upper => get_general_category(ch) == GeneralCategory::UppercaseLetter,
            CharClass::Lower => get_general_category(ch) == GeneralCategory::LowercaseLetter,
            CharClass::WhiteSpace => ch.is_whitespace(),
            CharClass::Symbol => matches!(
                get_general_category(ch),
                GeneralCategory::MathSymbol
                    | GeneralCategory::CurrencySymbol
                    | GeneralCategory::ModifierSymbol
                    | GeneralCategory::OtherSymbol
            ),
            CharClass::Punctuation => matches!(
                get_general_category(ch),
                GeneralCategory::ConnectorPunctuation
                    | GeneralCategory::DashPunctuation
                    | GeneralCategory::OpenPunctuation
                    | GeneralCategory::ClosePunctuation
                    | GeneralCategory::InitialPunctuation
                    | GeneralCategory::FinalPunctuation
                    | GeneralCategory::OtherPunctuation
            ),
            CharClass::Separator => matches!(
                get_general_category(ch),
                GeneralCategory::SpaceSeparator
                    | GeneralCategory::LineSeparator
                    | GeneralCategory::ParagraphSeparator
            ),
            CharClass::Control => ch.is_control(),
            CharClass::Surrogate | CharClass::HighSurrogate => u32::from(ch) > 0xFFFF,
            CharClass::LowSurrogate => false,
        }
    }
}

#[inline]
fn is_digit(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_digit();
    }
    get_general_category(ch) == GeneralCategory::DecimalNumber
}

#[inline]
fn is_letter(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic();
    }
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

//! Address Recognizers
//!
//! Grammars for the pieces of a postal address block: phone and fax
//! numbers, zip and postal codes, "Attention" and "c/o" labels. Every
//! grammar is a plain function with the recognizer signature, so it can be
//! called inline in a larger grammar or handed to the line filters in
//! [`lines`].
//!
//! ```
//! use address_recognizers::{phone_number_groups, AddressLines};
//! use recognizer_framework::{Input, Position};
//!
//! let input = Input::new("+1 (555) 555 555");
//! let mut pos = Position::new();
//! let groups = phone_number_groups(&input, &mut pos).unwrap_or_default();
//! let groups: Vec<&str> = groups.iter().map(|g| g.as_str()).collect();
//! assert_eq!(groups, ["1", "555", "555", "555"]);
//!
//! let block = "3000 Some street\nEnglewood, CO\n55555\nPhone: 555-555-5555";
//! assert_eq!(block.lines().phone_lines().count(), 1);
//! ```

pub mod label;
pub mod lines;
pub mod phone;
pub mod postal;

pub use label::{
    attention, attention_capture, attention_label, attention_label_capture, care_of, care_of_capture,
};
pub use lines::{
    attention_addressee, attention_line, care_of_line, phone_line, AddressLines, Anchor, Matching,
};
pub use phone::{
    bracketed_digit, bracketed_digit_capture, bracketed_digits, bracketed_digits_capture, delimited_digit_groups,
    delimited_digits, delimited_digits_capture, phone_number, phone_number_capture, phone_number_groups,
    PHONE_DELIMITERS,
};
pub use postal::{
    postal_code, postal_code_capture, postal_or_zip_code, postal_or_zip_code_capture, zip_code, zip_code_capture,
};

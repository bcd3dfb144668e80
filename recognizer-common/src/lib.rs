//! Recognizer Common
//!
//! Shared building blocks for the recognizer crates: the immutable [`Input`]
//! buffer, the [`Position`] cursor threaded through every recognizer, borrowed
//! [`Capture`]s of matched text, and the [`Rules`] left-recursion guard.

pub mod capture;
pub mod input;
pub mod position;
pub mod rules;

pub use capture::Capture;
pub use input::Input;
pub use position::Position;
pub use rules::{RuleId, Rules};

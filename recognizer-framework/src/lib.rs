//! Recognizer Framework
//!
//! Composable recognizers over an [`Input`]. A recognizer tests whether the
//! text at a [`Position`] matches a pattern and advances the position only
//! when it does. Grammars are written as boolean expressions over
//! recognizer calls: `&&` sequences, `||` alternates, and [`optional`]
//! turns a greedy recognizer that fails on an empty match into one that
//! always succeeds.
//!
//! ```
//! use recognizer_framework::{optional, Input, Position, Primitives};
//!
//! let input = Input::new("  (555)");
//! let mut pos = Position::new();
//! let mut i = pos.save();
//! let matched = optional(input.whitespaces(&mut i))
//!     && input.one_char('(', &mut i)
//!     && input.digits(&mut i)
//!     && input.one_char(')', &mut i)
//!     && pos.commit(i);
//! assert!(matched);
//! assert!(input.is_end(&pos));
//! ```

pub mod class;
pub mod combinators;
pub mod key_value;
pub mod primitives;
pub mod traits;

pub use class::CharClass;
pub use combinators::{attempt, attempt_capture, optional};
pub use key_value::{
    key_value_pair, key_value_pair_capture, key_value_pair_capture_with, key_value_pair_with,
    key_value_pairs, key_value_pairs_with, Attributes,
};
pub use primitives::Primitives;
pub use recognizer_common::{Capture, Input, Position, RuleId, Rules};
pub use traits::Recognizer;

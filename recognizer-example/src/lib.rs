//! Recognizer Example
//!
//! A lambda-calculus parser that exercises the left-recursion guard, and
//! the shared plumbing of the command-line tools in `src/bin`.

pub mod cli;
pub mod lambda;

pub use lambda::{parse, Env, LambdaError, Term};

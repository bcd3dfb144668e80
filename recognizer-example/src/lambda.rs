//! A tiny lambda calculus.
//!
//! ```text
//! term      := ws? apply
//! apply     := term (ws argument)*
//! argument  := lambda | bracketed | var
//! lambda    := letters ws? "->" term
//! bracketed := '(' term ws? ')'
//! var       := letters
//! ```
//!
//! `apply` is left recursive: its first operand is a full `term`, which
//! enters `apply` again at the same offset. The [`Rules`] guard cuts that
//! second entry and the operand is read as a plain `argument` instead.
//! Every offset is parsed once, so nesting depth costs linear time.
//! Application associates to the left; a lambda body extends as far right
//! as possible.

use recognizer_framework::{optional, Input, Position, Primitives, RuleId, Rules};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::trace;

const APPLY: RuleId = RuleId::new(0);

/// Nesting limit for [`Term::eval`].
pub const MAX_EVAL_DEPTH: usize = 512;

/// Bindings for the free variables of a term.
pub type Env = HashMap<String, Term>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LambdaError {
    #[error("expected a term at byte {offset}")]
    Syntax { offset: usize },

    #[error("unexpected input at byte {offset}")]
    TrailingInput { offset: usize },

    #[error("evaluation exceeded {limit} nested reductions")]
    TooDeep { limit: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Var(String),
    Lambda { param: String, body: Box<Term> },
    Apply { function: Box<Term>, argument: Box<Term> },
}

impl Term {
    pub fn var(name: impl Into<String>) -> Self {
        Term::Var(name.into())
    }

    pub fn lambda(param: impl Into<String>, body: Term) -> Self {
        Term::Lambda {
            param: param.into(),
            body: Box::new(body),
        }
    }

    pub fn apply(function: Term, argument: Term) -> Self {
        Term::Apply {
            function: Box::new(function),
            argument: Box::new(argument),
        }
    }

    /// Replaces the free occurrences of `name` with `value`.
    ///
    /// Bound variables are not renamed, so free variables of `value` can be
    /// captured by a lambda in `self` that binds the same name.
    pub fn substitute(&self, name: &str, value: &Term) -> Term {
        match self {
            Term::Var(var) if var == name => value.clone(),
            Term::Var(_) => self.clone(),
            Term::Lambda { param, .. } if param == name => self.clone(),
            Term::Lambda { param, body } => Term::lambda(param.clone(), body.substitute(name, value)),
            Term::Apply { function, argument } => {
                Term::apply(function.substitute(name, value), argument.substitute(name, value))
            }
        }
    }

    /// Replaces every free variable bound in `env` with its value.
    ///
    /// All names are looked up in one pass; a value is inserted as is, so
    /// names it mentions are not looked up again.
    pub fn substitute_env(&self, env: &Env) -> Term {
        self.close_over(env, &mut Vec::new())
    }

    fn close_over<'t>(&'t self, env: &Env, bound: &mut Vec<&'t str>) -> Term {
        match self {
            Term::Var(name) if !bound.contains(&name.as_str()) => {
                env.get(name).cloned().unwrap_or_else(|| self.clone())
            }
            Term::Var(_) => self.clone(),
            Term::Lambda { param, body } => {
                bound.push(param);
                let body = body.close_over(env, bound);
                bound.pop();
                Term::lambda(param.clone(), body)
            }
            Term::Apply { function, argument } => {
                Term::apply(function.close_over(env, bound), argument.close_over(env, bound))
            }
        }
    }

    /// Evaluates call-by-value after binding the free variables found in
    /// `env`. Unbound variables evaluate to themselves, and applying
    /// anything but a lambda leaves the application in place.
    pub fn eval(&self, env: &Env) -> Result<Term, LambdaError> {
        self.substitute_env(env).reduce(0)
    }

    fn reduce(self, depth: usize) -> Result<Term, LambdaError> {
        if depth > MAX_EVAL_DEPTH {
            return Err(LambdaError::TooDeep { limit: MAX_EVAL_DEPTH });
        }
        match self {
            Term::Apply { function, argument } => {
                let argument = (*argument).reduce(depth + 1)?;
                match (*function).reduce(depth + 1)? {
                    Term::Lambda { param, body } => body.substitute(&param, &argument).reduce(depth + 1),
                    function => Ok(Term::apply(function, argument)),
                }
            }
            term => Ok(term),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(name) => write!(f, "{name}"),
            Term::Lambda { param, body } => write!(f, "({param}->{body})"),
            Term::Apply { function, argument } => match **argument {
                Term::Apply { .. } => write!(f, "{function} ({argument})"),
                _ => write!(f, "{function} {argument}"),
            },
        }
    }
}

/// Recognizes a term.
pub fn term(input: &Input<'_>, pos: &mut Position, rules: &mut Rules) -> Option<Term> {
    let mut i = pos.save();
    optional(input.whitespaces(&mut i));
    let term = if rules.is_loop(APPLY, &i) {
        trace!(offset = i.offset, "application re-entered without progress");
        argument(input, &mut i, rules)
    } else {
        apply(input, &mut i, rules)
    }?;
    pos.commit(i).then_some(term)
}

/// A term followed by zero or more arguments. With no arguments the operand
/// itself is returned.
fn apply(input: &Input<'_>, pos: &mut Position, rules: &mut Rules) -> Option<Term> {
    let mut i = pos.save();
    let mut function = term(input, &mut i, rules)?;
    loop {
        let mut next = i.save();
        if !input.whitespaces(&mut next) {
            break;
        }
        let Some(argument) = argument(input, &mut next, rules) else {
            break;
        };
        function = Term::apply(function, argument);
        i = next;
    }
    pos.seek(i, rules).then_some(function)
}

fn argument(input: &Input<'_>, pos: &mut Position, rules: &mut Rules) -> Option<Term> {
    lambda(input, pos, rules)
        .or_else(|| bracketed(input, pos, rules))
        .or_else(|| var(input, pos))
}

fn lambda(input: &Input<'_>, pos: &mut Position, rules: &mut Rules) -> Option<Term> {
    let mut i = pos.save();
    let param = input.letters_capture(&mut i)?;
    optional(input.whitespaces(&mut i));
    if !input.literal("->", &mut i) {
        return None;
    }
    let body = term(input, &mut i, rules)?;
    pos.seek(i, rules).then(|| Term::lambda(param.as_str(), body))
}

fn bracketed(input: &Input<'_>, pos: &mut Position, rules: &mut Rules) -> Option<Term> {
    let mut i = pos.save();
    if !input.one_char('(', &mut i) {
        return None;
    }
    let inner = term(input, &mut i, rules)?;
    optional(input.whitespaces(&mut i));
    (input.one_char(')', &mut i) && pos.seek(i, rules)).then_some(inner)
}

fn var(input: &Input<'_>, pos: &mut Position) -> Option<Term> {
    input.letters_capture(pos).map(|name| Term::var(name.as_str()))
}

/// Parses `text` as a single term, allowing surrounding whitespace.
pub fn parse(text: &str) -> Result<Term, LambdaError> {
    let input = Input::new(text);
    let mut pos = input.begin();
    let mut rules = Rules::new();

    let parsed = term(&input, &mut pos, &mut rules).ok_or(LambdaError::Syntax { offset: pos.offset })?;

    optional(input.whitespaces(&mut pos));
    if !input.is_end(&pos) {
        return Err(LambdaError::TrailingInput { offset: pos.offset });
    }
    Ok(parsed)
}

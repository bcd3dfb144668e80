//! Parses and evaluates a lambda-calculus term.
//!
//! ```text
//! lambda-eval '(x -> y -> x) a b'
//! lambda-eval --let 'id=x -> x' 'id id z'
//! ```

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use recognizer_example::cli::init_logging;
use recognizer_example::{parse, Env};
use tracing::info;

#[derive(Parser)]
#[command(name = "lambda-eval")]
#[command(about = "Evaluate a lambda-calculus term", long_about = None)]
struct Cli {
    /// Term to evaluate, e.g. "(x -> x) y"
    expr: String,

    /// Bind a free variable before evaluating
    #[arg(long = "let", value_name = "NAME=TERM")]
    bindings: Vec<String>,

    /// Only print the parsed term
    #[arg(long)]
    parse_only: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn bind(env: &mut Env, binding: &str) -> Result<()> {
    let (name, term) = binding
        .split_once('=')
        .ok_or_else(|| anyhow!("binding {binding:?} is not of the form NAME=TERM"))?;
    let term = parse(term).with_context(|| format!("invalid term for {}", name.trim()))?;
    env.insert(name.trim().to_string(), term);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut env = Env::new();
    for binding in &cli.bindings {
        bind(&mut env, binding)?;
    }

    let term = parse(&cli.expr).context("invalid term")?;
    info!(%term, "parsed");
    if cli.parse_only {
        println!("{term}");
        return Ok(());
    }

    let value = term.eval(&env)?;
    println!("{value}");
    Ok(())
}

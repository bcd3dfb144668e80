//! Helpers shared by the binaries.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::Level;

/// Maps the number of `-v` flags to a log level.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs a fmt subscriber on stderr so stdout stays clean for results.
pub fn init_logging(verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(level_for(verbose))
        .with_writer(std::io::stderr)
        .init();
}

/// Reads `path`, or stdin when no path is given.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

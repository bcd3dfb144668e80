//! Parses an XML document and prints its element tree.

use anyhow::{Context, Result};
use clap::Parser;
use recognizer_example::cli::{init_logging, read_source};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "xml-tree")]
#[command(about = "Print the element tree of an XML document", long_about = None)]
struct Cli {
    /// Document to read; stdin when absent
    file: Option<PathBuf>,

    /// Also print the prolog attributes
    #[arg(long)]
    prolog: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = read_source(cli.file.as_deref())?;
    let doc = xml_recognizers::parse(&text).context("invalid document")?;
    debug!(root = doc.root.tag(), children = doc.root.children().len(), "parsed document");

    if cli.prolog {
        let mut prolog: Vec<_> = doc.prolog.iter().collect();
        prolog.sort();
        for (key, value) in prolog {
            println!("{key} = {value}");
        }
    }
    print!("{}", doc.root);
    Ok(())
}

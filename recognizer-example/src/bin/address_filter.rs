//! Prints the lines of an address block that match a grammar.
//!
//! ```text
//! address-filter --kind phone address.txt
//! cat address.txt | address-filter --kind attention --addressee
//! ```

use address_recognizers::{attention_addressee, AddressLines};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use recognizer_example::cli::{init_logging, read_source};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// Phone: or Fax: followed by a number
    Phone,
    /// Zip or postal code
    Postal,
    /// Zip code only
    Zip,
    /// Lines starting with Attention, Attn or Att
    Attention,
    /// Lines starting with c/o
    CareOf,
}

#[derive(Parser)]
#[command(name = "address-filter")]
#[command(about = "Print the lines of an address block that match a grammar", long_about = None)]
struct Cli {
    /// Kind of line to keep
    #[arg(long, value_enum, default_value_t = Kind::Phone)]
    kind: Kind,

    /// With --kind attention, print only the addressee
    #[arg(long)]
    addressee: bool,

    /// Address block to read; stdin when absent
    file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = read_source(cli.file.as_deref())?;
    let lines = text.lines();
    let matched: Vec<&str> = match cli.kind {
        Kind::Phone => lines.phone_lines().collect(),
        Kind::Postal => lines.postal_code_lines().collect(),
        Kind::Zip => lines.zip_code_lines().collect(),
        Kind::Attention if cli.addressee => lines.attention_lines().filter_map(attention_addressee).collect(),
        Kind::Attention => lines.attention_lines().collect(),
        Kind::CareOf => lines.care_of_lines().collect(),
    };
    info!(kind = ?cli.kind, matched = matched.len(), "filtered address block");

    for line in matched {
        println!("{line}");
    }
    Ok(())
}

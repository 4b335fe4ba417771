//! `rexp` - print the structure of engine values.
//!
//! Reads values in the JSON interchange form (one value object, or an array
//! of them) from a file or stdin and prints type, length, debug rendering and
//! attributes for each one.

mod inspect;
mod logging;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rexp", version, about = "Inspect engine values")]
struct Cli {
    /// Input file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Re-emit the decoded values as normalized JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let text = read_input(cli.input.as_ref())?;
    let values = inspect::decode_document(&text)?;
    tracing::debug!(count = values.len(), "decoded values");

    if cli.json {
        println!("{}", inspect::to_pretty_json(&values)?);
    } else {
        for value in &values {
            println!("{}", inspect::describe(value));
        }
    }
    Ok(())
}

//! Implementation of the `easytex dump` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};

/// Arguments for the dump command.
#[derive(Debug, Args)]
pub struct DumpArgs {
    /// Document to dump
    pub file: PathBuf,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Run the dump command.
pub fn run_dump(args: DumpArgs) -> Result<i32> {
    let document = super::load(&args.file)?;
    let json = if args.compact {
        serde_json::to_string(&document)
    } else {
        serde_json::to_string_pretty(&document)
    }
    .into_diagnostic()?;
    println!("{}", json);
    Ok(exitcode::OK)
}

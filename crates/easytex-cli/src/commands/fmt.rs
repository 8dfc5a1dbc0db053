//! Implementation of the `easytex fmt` command.

use std::fs::{read_to_string, write};
use std::path::PathBuf;

use clap::Args;
use easytex::format_document;
use miette::{miette, Result};
use owo_colors::{OwoColorize, Stream};

/// Arguments for the fmt command.
#[derive(Debug, Args)]
pub struct FmtArgs {
    /// Document to format
    pub file: PathBuf,

    /// Exit with non-zero code if the file is not already formatted
    #[arg(long, conflicts_with = "write")]
    pub check: bool,

    /// Rewrite the file in place instead of printing
    #[arg(long)]
    pub write: bool,
}

/// Run the fmt command.
pub fn run_fmt(args: FmtArgs) -> Result<i32> {
    let document = super::load(&args.file)?;
    let formatted = format_document(&document);

    if args.check {
        let current = read_to_string(&args.file)
            .map_err(|e| miette!("Failed to read {}: {}", args.file.display(), e))?;
        if current == formatted {
            return Ok(exitcode::OK);
        }
        eprintln!(
            "{} {}",
            "not formatted:".if_supports_color(Stream::Stderr, |text| text.yellow()),
            args.file.display()
        );
        return Ok(exitcode::DATAERR);
    }

    if args.write {
        write(&args.file, formatted)
            .map_err(|e| miette!("Failed to write {}: {}", args.file.display(), e))?;
    } else {
        print!("{}", formatted);
    }
    Ok(exitcode::OK)
}

//! Implementation of the `easytex check` command.

use std::path::PathBuf;

use clap::Args;
use easytex::{load_document, LoadError};
use miette::{IntoDiagnostic, Report, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use tracing::debug;

use crate::output::table::{format_summary_table, FileSummary};
use crate::output::EasytexDiagnostic;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Documents to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    path: String,
    kind: Option<String>,
    parts: Option<usize>,
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut summaries = Vec::with_capacity(args.files.len());
    let mut diagnostics: Vec<Report> = Vec::new();

    for path in &args.files {
        debug!(path = %path.display(), "checking file");
        let summary = match load_document(path) {
            Ok(document) => FileSummary::parsed(path, &document),
            Err(LoadError::Io { source, .. }) => {
                FileSummary::failed(path, format!("cannot read file: {source}"))
            }
            Err(LoadError::Parse {
                path: file,
                content,
                source,
            }) => {
                let diagnostic = EasytexDiagnostic::from_parse_error(&file, &content, &source);
                diagnostics.push(diagnostic.into());
                FileSummary::failed(path, source.to_string())
            }
        };
        summaries.push(summary);
    }

    let failed = summaries.iter().filter(|s| s.error.is_some()).count();

    if args.json {
        let json: Vec<CheckJson> = summaries
            .iter()
            .map(|s| CheckJson {
                path: s.path.display().to_string(),
                kind: s.kind.map(|kind| kind.as_str().to_owned()),
                parts: s.parts,
                error: s.error.clone(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else {
        for diagnostic in &diagnostics {
            eprintln!("{:?}", diagnostic);
        }
        println!("{}", format_summary_table(&summaries));
        if failed == 0 {
            let line = format!("{} file(s) OK", summaries.len());
            println!("{}", line.if_supports_color(Stream::Stdout, |text| text.green()));
        } else {
            let line = format!("{failed} of {} file(s) failed", summaries.len());
            println!("{}", line.if_supports_color(Stream::Stdout, |text| text.red()));
        }
    }

    if failed == 0 {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}

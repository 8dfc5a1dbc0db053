//! CLI command implementations.

mod check;
mod dump;
mod fmt;

use std::path::Path;

use easytex::{load_document, Document, LoadError};
use miette::{miette, Report, Result};

use crate::output::EasytexDiagnostic;

pub use check::{run_check, CheckArgs};
pub use dump::{run_dump, DumpArgs};
pub use fmt::{run_fmt, FmtArgs};

/// Load one document, turning failures into reports.
fn load(path: &Path) -> Result<Document> {
    load_document(path).map_err(report)
}

/// Render a load failure. Parse errors point into the file's text.
fn report(error: LoadError) -> Report {
    match error {
        LoadError::Io { path, source } => miette!("Failed to read {}: {}", path.display(), source),
        LoadError::Parse {
            path,
            content,
            source,
        } => EasytexDiagnostic::from_parse_error(&path, &content, &source).into(),
    }
}

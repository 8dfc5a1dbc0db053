//! Table formatting utilities for CLI output.

use std::path::{Path, PathBuf};

use comfy_table::{presets, ContentArrangement, Table};
use easytex::{Document, DocumentKind};

/// Check result for a single file.
pub struct FileSummary {
    pub path: PathBuf,
    /// Kind of the parsed document, if it parsed.
    pub kind: Option<DocumentKind>,
    /// Number of problems or sections.
    pub parts: Option<usize>,
    pub error: Option<String>,
}

impl FileSummary {
    pub fn parsed(path: &Path, document: &Document) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: Some(document.kind()),
            parts: Some(document.child_count()),
            error: None,
        }
    }

    pub fn failed(path: &Path, error: String) -> Self {
        Self {
            path: path.to_path_buf(),
            kind: None,
            parts: None,
            error: Some(error),
        }
    }
}

/// Format check results as an ASCII table.
pub fn format_summary_table(summaries: &[FileSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Kind", "Parts", "Status"]);

    for summary in summaries {
        table.add_row(vec![
            summary.path.display().to_string(),
            summary
                .kind
                .map_or_else(|| "-".to_string(), |kind| kind.to_string()),
            summary
                .parts
                .map_or_else(|| "-".to_string(), |parts| parts.to_string()),
            summary.error.clone().unwrap_or_else(|| "ok".to_string()),
        ]);
    }

    table
}

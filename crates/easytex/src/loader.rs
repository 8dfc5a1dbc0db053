//! Loading documents from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::ir::Document;
use crate::parser::{ParseError, parse_document};

/// Errors that occur while loading a document file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading the document.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but did not parse. `content` is the text that was
    /// read, so callers can point into it.
    #[error("{path}: {source}")]
    Parse {
        path: PathBuf,
        content: String,
        #[source]
        source: ParseError,
    },
}

/// Read and parse the document at `path`.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading document");
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        content,
        source,
    })
}

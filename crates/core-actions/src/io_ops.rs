//! File IO helpers used by the editor.
//!
//! Open failures are fatal and surface as `EditorError::Open`. Write failures
//! are reported back as a `WriteFileResult` so the caller can keep running.

use crate::EditorError;
use core_state::{Document, SaveError, load, save};
use std::path::Path;

pub(crate) fn open_document(path: &Path) -> Result<Document, EditorError> {
    load(path).map_err(|source| {
        tracing::error!(target: "io", file = %path.display(), ?source, "file_open_error");
        EditorError::Open {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Result of a write attempt.
#[derive(Debug)]
pub(crate) enum WriteFileResult {
    Success { bytes: usize },
    Error(SaveError),
}

impl WriteFileResult {
    /// Message bar text describing the outcome.
    pub(crate) fn status_text(&self) -> String {
        match self {
            WriteFileResult::Success { bytes } => format!("{bytes} bytes written to disk"),
            WriteFileResult::Error(SaveError::Io { source, .. }) => {
                format!("Can't save! I/O error: {source}")
            }
        }
    }
}

pub(crate) fn write_document(path: &Path, doc: &Document) -> WriteFileResult {
    match save(path, doc) {
        Ok(bytes) => WriteFileResult::Success { bytes },
        Err(e) => WriteFileResult::Error(e),
    }
}

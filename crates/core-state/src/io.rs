//! File persistence for documents.
//!
//! Synchronous and minimal: a whole-file read on open and a whole-file
//! write on save. The on-disk form is `Document::serialize`.

use crate::Document;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("write {path}: {source}", path = .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read and parse the file at `path`. Invalid UTF-8 is replaced rather than
/// rejected.
pub fn load(path: &Path) -> std::io::Result<Document> {
    let bytes = std::fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(target: "io", file = %path.display(), "invalid_utf8_replaced");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    let doc = Document::from_text(&text);
    tracing::debug!(
        target: "io",
        file = %path.display(),
        size_bytes = text.len(),
        line_count = doc.len(),
        "file_read_ok"
    );
    Ok(doc)
}

/// Write `doc` to `path`, returning the number of bytes written.
pub fn save(path: &Path, doc: &Document) -> Result<usize, SaveError> {
    let content = doc.serialize();
    match std::fs::write(path, content.as_bytes()) {
        Ok(()) => {
            tracing::debug!(target: "io", file = %path.display(), size_bytes = content.len(), "file_write_ok");
            Ok(content.len())
        }
        Err(source) => {
            tracing::error!(target: "io", file = %path.display(), ?source, "file_write_error");
            Err(SaveError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn load_then_save_expands_tabs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "a\tb\n\tc\nlast").unwrap();
        let doc = load(&path).unwrap();
        let out = dir.path().join("out.txt");
        let n = save(&out, &doc).unwrap();
        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "a   b\n    c\nlast\n");
        assert_eq!(n, written.len());
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("nope.txt")).is_err());
    }

    #[test]
    fn load_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bin.txt");
        std::fs::write(&path, b"ok\xff\n").unwrap();
        let doc = load(&path).unwrap();
        assert_eq!(doc.line(0).unwrap().text(), "ok\u{fffd}");
    }

    #[test]
    fn save_into_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = save(&path, &Document::new()).unwrap_err();
        assert!(err.to_string().contains("out.txt"));
    }
}

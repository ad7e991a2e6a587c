//! The editor loop.
//!
//! `Editor` owns the document, cursor and status line, reads one key at a
//! time from a `KeyReader`, applies it, and repaints through a
//! `FrameRenderer`. Key handling is split by concern:
//! * `dispatcher::motion`  - navigation keys mapped onto `Cursor` transitions
//! * `dispatcher::edit`    - text mutation (insert, split, merge, delete)
//! * `dispatcher::command` - save, filename prompt and quit confirmation
//!
//! Read and render failures are fatal and end the loop. Save failures are
//! reported in the message bar and the loop keeps running.

use std::path::PathBuf;

mod dispatcher;
mod editor;
mod io_ops;

pub use editor::{Editor, EditorConfig, UNTITLED};

/// Text shown in the message bar when the editor starts.
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Running,
    /// The document is dirty and quit was requested fewer times than needed.
    AwaitingForceQuit,
    /// Collecting a filename for an untitled document.
    Prompting,
    Terminated,
}

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("reading key")]
    Read(#[source] std::io::Error),
    #[error("rendering frame")]
    Render(#[source] std::io::Error),
    #[error("opening {path}", path = .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

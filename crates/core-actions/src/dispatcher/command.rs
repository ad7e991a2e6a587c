//! Save, filename prompt and quit confirmation.
//!
//! Saving an untitled document runs a blocking prompt loop that keeps
//! rendering and reading keys until a filename is committed, the prompt is
//! aborted, or input ends. Quitting a dirty document needs
//! `quit_confirmations` consecutive quit chords.

use crate::io_ops::{WriteFileResult, write_document};
use crate::{Editor, EditorError, EditorState};
use core_input::{Key, KeyReader};
use core_render::FrameRenderer;
use std::path::PathBuf;
use tracing::{debug, info, warn};

const SAVE_ABORTED: &str = "Save aborted";

/// How a filename prompt ended.
#[derive(Debug, PartialEq, Eq)]
enum PromptOutcome {
    Commit(PathBuf),
    Cancel,
    EndOfInput,
}

impl<R: KeyReader, V: FrameRenderer> Editor<R, V> {
    pub(crate) fn request_quit(&mut self) {
        if !self.dirty {
            self.terminate("quit");
            return;
        }
        self.quit_count += 1;
        let needed = self.config.quit_confirmations.max(1);
        if self.quit_count >= needed {
            warn!(target: "editor", "quit_discarding_changes");
            self.terminate("force_quit");
            return;
        }
        let remaining = needed - self.quit_count;
        self.set_status(format!(
            "WARNING: file has unsaved changes. Press Ctrl-Q {remaining} more time(s) to quit."
        ));
        self.state = EditorState::AwaitingForceQuit;
    }

    /// Write the document to its file, prompting for a name first if it has
    /// none. A clean document is left alone.
    pub(crate) fn save(&mut self) -> Result<(), EditorError> {
        if !self.dirty {
            debug!(target: "editor.save", "save_skipped_clean");
            return Ok(());
        }
        let path = match self.path.clone() {
            Some(path) => path,
            None => match self.prompt_filename()? {
                PromptOutcome::Commit(path) => {
                    self.set_path(path.clone());
                    path
                }
                PromptOutcome::Cancel | PromptOutcome::EndOfInput => return Ok(()),
            },
        };
        let result = write_document(&path, &self.doc);
        match &result {
            WriteFileResult::Success { bytes } => {
                self.dirty = false;
                info!(target: "editor.save", file = %path.display(), bytes, "saved");
            }
            WriteFileResult::Error(e) => {
                warn!(target: "editor.save", error = %e, "save_failed");
            }
        }
        self.set_status(result.status_text());
        Ok(())
    }

    fn prompt_filename(&mut self) -> Result<PromptOutcome, EditorError> {
        self.state = EditorState::Prompting;
        self.prompt.clear();
        loop {
            self.set_status(format!("Save as: {} (ESC to cancel)", self.prompt));
            self.refresh()?;
            match self.next_key()? {
                Key::None => {
                    self.prompt.clear();
                    self.terminate("end_of_input");
                    return Ok(PromptOutcome::EndOfInput);
                }
                Key::Escape => {
                    self.prompt.clear();
                    self.state = EditorState::Running;
                    self.set_status(SAVE_ABORTED);
                    debug!(target: "editor.save", "prompt_cancelled");
                    return Ok(PromptOutcome::Cancel);
                }
                Key::Enter if !self.prompt.is_empty() => {
                    let name = self.prompt.text();
                    self.prompt.clear();
                    self.state = EditorState::Running;
                    debug!(target: "editor.save", name = %name, "prompt_committed");
                    return Ok(PromptOutcome::Commit(PathBuf::from(name)));
                }
                Key::Backspace | Key::Delete => {
                    self.prompt.delete_last();
                }
                Key::Char(ch) if !ch.is_control() => self.prompt.push(ch),
                _ => {}
            }
        }
    }
}

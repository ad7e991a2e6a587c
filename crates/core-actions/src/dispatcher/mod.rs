//! Key dispatch.
//!
//! One decoded `Key` in, one state change out. Sub-modules:
//! * `motion`  - cursor movement, always followed by a column snap
//! * `edit`    - buffer mutation
//! * `command` - save, filename prompt, quit confirmation
//!
//! Any key other than the quit chord resets the quit confirmation counter.
//! Control characters without a binding are dropped.

use crate::{Editor, EditorError, EditorState};
use core_input::{CHORD_QUIT, CHORD_REFRESH, CHORD_SAVE, Key, KeyReader};
use core_render::FrameRenderer;

mod command;
mod edit;
mod motion;

impl<R: KeyReader, V: FrameRenderer> Editor<R, V> {
    /// Apply one key. Only the save prompt can fail, and only with a read or
    /// render error.
    pub fn process_key(&mut self, key: Key) -> Result<(), EditorError> {
        if key != Key::Char(CHORD_QUIT) {
            self.reset_quit_confirmation();
        }
        match key {
            Key::None => self.terminate("end_of_input"),
            Key::Char(CHORD_QUIT) => self.request_quit(),
            Key::Char(CHORD_SAVE) => self.save()?,
            Key::Char(CHORD_REFRESH) | Key::Escape => {}
            Key::Home
            | Key::End
            | Key::Left
            | Key::Right
            | Key::Up
            | Key::Down
            | Key::PageUp
            | Key::PageDown => self.navigate(key),
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete_forward(),
            Key::Enter => self.insert_newline(),
            Key::Char('\t') => self.insert_tab(),
            // Unbound chords never reach the buffer.
            Key::Char(ch) if ch.is_control() => {
                tracing::trace!(target: "editor", code = ch as u32, "control_ignored");
            }
            Key::Char(ch) => self.insert_char(ch),
        }
        Ok(())
    }

    fn reset_quit_confirmation(&mut self) {
        self.quit_count = 0;
        if self.state == EditorState::AwaitingForceQuit {
            self.state = EditorState::Running;
        }
    }
}

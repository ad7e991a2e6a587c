//! Navigation keys.
//!
//! `Cursor` has no reference to the document, so each transition is fed the
//! line lengths it needs. Every move ends with `snap` so the column never
//! dangles past the end of a shorter line.

use crate::Editor;
use core_input::{Key, KeyReader};
use core_render::FrameRenderer;

impl<R: KeyReader, V: FrameRenderer> Editor<R, V> {
    pub(crate) fn navigate(&mut self, key: Key) {
        let before = self.cursor;
        let n_lines = self.doc.len();
        let height = self.config.layout.text_rows();
        // 0-based index of the cursor line.
        let idx = self.cursor.line() - 1;
        match key {
            Key::Home => self.cursor.home(),
            Key::End => self.cursor.end(self.doc.line_len(idx)),
            Key::Left => {
                let prev_len = idx.checked_sub(1).map_or(0, |p| self.doc.line_len(p));
                self.cursor.left(prev_len);
            }
            Key::Right => self.cursor.right(self.doc.line_len(idx), n_lines),
            Key::Up => {
                self.cursor.up();
            }
            Key::Down => {
                self.cursor.down(n_lines);
            }
            Key::PageUp => self.cursor.page_up(height),
            Key::PageDown => self.cursor.page_down(height, n_lines),
            _ => return,
        }
        let len = self.doc.line_len(self.cursor.line() - 1);
        self.cursor.snap(len);
        tracing::trace!(
            target: "editor",
            ?key,
            from_col = before.col(),
            from_line = before.line(),
            col = self.cursor.col(),
            line = self.cursor.line(),
            "motion"
        );
    }
}

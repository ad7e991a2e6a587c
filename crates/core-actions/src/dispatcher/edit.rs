//! Text mutation (insert, newline, backspace, forward delete).
//!
//! The cursor is 1-based; `Document` is 0-based. Each handler converts once
//! at the top and moves the cursor with `set_position`, leaving offsets to
//! the next `scroll`. The document is marked dirty only when its content
//! actually changed.

use crate::Editor;
use core_input::KeyReader;
use core_render::FrameRenderer;
use core_text::spaces_to_next_stop;

impl<R: KeyReader, V: FrameRenderer> Editor<R, V> {
    pub(crate) fn insert_char(&mut self, ch: char) {
        let (line, col) = (self.cursor.line(), self.cursor.col());
        self.doc.insert_char(line - 1, col - 1, ch);
        self.cursor.set_position(col + 1, line);
        self.mark_dirty("insert_char");
    }

    /// A tab key inserts spaces up to the next tab stop.
    pub(crate) fn insert_tab(&mut self) {
        let (line, col) = (self.cursor.line(), self.cursor.col());
        let n = spaces_to_next_stop(col - 1);
        for i in 0..n {
            self.doc.insert_char(line - 1, col - 1 + i, ' ');
        }
        self.cursor.set_position(col + n, line);
        self.mark_dirty("insert_tab");
    }

    pub(crate) fn insert_newline(&mut self) {
        let (line, col) = (self.cursor.line(), self.cursor.col());
        self.doc.split_line(line - 1, col - 1);
        self.cursor.set_position(1, line + 1);
        self.mark_dirty("insert_newline");
    }

    /// Delete left of the cursor; at column 1, join the line onto the
    /// previous one.
    pub(crate) fn backspace(&mut self) {
        let (line, col) = (self.cursor.line(), self.cursor.col());
        if col > 1 {
            if self.doc.delete_char(line - 1, col - 2).is_some() {
                self.cursor.set_position(col - 1, line);
                self.mark_dirty("backspace");
            }
            return;
        }
        if line == 1 {
            return;
        }
        match self.doc.merge_with_previous(line - 1) {
            Some(join) => {
                self.cursor.set_position(join + 1, line - 1);
                self.mark_dirty("join_previous");
            }
            // Virtual trailing line: nothing to join, just step back.
            None => {
                let prev_len = self.doc.line_len(line - 2);
                self.cursor.left(prev_len);
            }
        }
    }

    /// Delete under the cursor; at end of line, pull the next line up.
    pub(crate) fn delete_forward(&mut self) {
        let (line, col) = (self.cursor.line(), self.cursor.col());
        if col - 1 < self.doc.line_len(line - 1) {
            if self.doc.delete_char(line - 1, col - 1).is_some() {
                self.mark_dirty("delete");
            }
        } else if self.doc.merge_with_next(line - 1) {
            self.mark_dirty("join_next");
        }
    }

    fn mark_dirty(&mut self, op: &'static str) {
        self.dirty = true;
        tracing::trace!(
            target: "editor",
            op,
            col = self.cursor.col(),
            line = self.cursor.line(),
            lines = self.doc.len(),
            "edit"
        );
    }
}

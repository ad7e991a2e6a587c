//! Cursor and viewport model.
//!
//! A `Cursor` carries the logical position `(col, line)`, both 1-based, and
//! the viewport scroll offsets `(col_offset, line_offset)`, both 0-based. The
//! cursor holds no reference to the document: every transition takes the
//! line lengths and line count it needs as arguments.
//!
//! Invariants (hold after every transition given truthful arguments):
//! * `1 <= line <= n_lines + 1`; `n_lines + 1` is the virtual trailing line.
//! * `1 <= col <= current_line_len + 1` once `snap` has run.
//! * After `scroll(w, h)`: `1 <= x() <= w` and `1 <= y() <= h`.
//!
//! No transition fails. Requests that cannot be honoured are no-ops.

mod layout;
pub use layout::{Layout, RESERVED_ROWS};

/// Columns of left context kept visible when scrolling horizontally.
pub const DEFAULT_MARGIN_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    col: usize,
    line: usize,
    col_offset: usize,
    line_offset: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            col: 1,
            line: 1,
            col_offset: 0,
            line_offset: 0,
        }
    }

    /// Cursor at `(col, line)` with zero offsets. Values below 1 are raised to 1.
    pub fn at(col: usize, line: usize) -> Self {
        Self {
            col: col.max(1),
            line: line.max(1),
            col_offset: 0,
            line_offset: 0,
        }
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col_offset(&self) -> usize {
        self.col_offset
    }

    pub fn line_offset(&self) -> usize {
        self.line_offset
    }

    /// 1-based screen column.
    pub fn x(&self) -> usize {
        self.col.saturating_sub(self.col_offset)
    }

    /// 1-based screen row.
    pub fn y(&self) -> usize {
        self.line.saturating_sub(self.line_offset)
    }

    /// Move to `(col, line)` directly. Used by edits that shift text under the
    /// cursor (merges, splits); offsets are left for `scroll` to fix up.
    pub fn set_position(&mut self, col: usize, line: usize) {
        self.col = col.max(1);
        self.line = line.max(1);
    }

    /// One column left, wrapping to the end of the previous line at column 1.
    pub fn left(&mut self, prev_line_len: usize) {
        if self.col > 1 {
            self.col -= 1;
        } else if self.line > 1 {
            self.line -= 1;
            self.end(prev_line_len);
        }
    }

    /// One column right, wrapping to the start of the next line (or the
    /// virtual trailing line) past the end of the current one.
    pub fn right(&mut self, cur_line_len: usize, n_lines: usize) {
        if self.col <= cur_line_len {
            self.col += 1;
        } else if self.line <= n_lines {
            self.line += 1;
            self.home();
        }
    }

    pub fn home(&mut self) {
        self.col = 1;
    }

    pub fn end(&mut self, line_len: usize) {
        self.col = line_len + 1;
    }

    /// Returns false when already on the first line.
    pub fn up(&mut self) -> bool {
        if self.line <= 1 {
            return false;
        }
        self.line -= 1;
        true
    }

    /// Returns false when already on the virtual trailing line.
    pub fn down(&mut self, n_lines: usize) -> bool {
        if self.line > n_lines {
            return false;
        }
        self.line += 1;
        true
    }

    /// Pull the column back to the end of a shorter line.
    pub fn snap(&mut self, cur_line_len: usize) {
        if self.col > cur_line_len + 1 {
            self.end(cur_line_len);
        }
    }

    /// Jump one screen up from the top of the viewport.
    pub fn page_up(&mut self, height: usize) {
        let height = height.max(1);
        self.line = (self.line_offset + 2).saturating_sub(height).max(1);
    }

    /// Jump one screen down from the bottom of the viewport, stopping at the
    /// virtual trailing line.
    pub fn page_down(&mut self, height: usize, n_lines: usize) {
        let height = height.max(1);
        let bottom = self.line_offset + height - 1;
        self.line = (bottom + height).min(n_lines + 1);
    }

    /// Recompute offsets with the default left margin.
    pub fn scroll(&mut self, width: usize, height: usize) {
        self.scroll_with_margin(width, height, DEFAULT_MARGIN_WIDTH);
    }

    /// Recompute the viewport offsets so the cursor is visible in a
    /// `width` x `height` content area. `margin` columns of left context are
    /// kept when scrolling back towards the start of the line.
    pub fn scroll_with_margin(&mut self, width: usize, height: usize, margin: usize) {
        let width = width.max(1);
        let height = height.max(1);
        let line0 = self.line - 1;
        let col0 = self.col - 1;

        if line0 < self.line_offset {
            self.line_offset = line0;
        }
        if line0 >= self.line_offset + height {
            self.line_offset = line0 + 1 - height;
        }

        if col0 < self.col_offset + margin {
            self.col_offset = col0.saturating_sub(margin);
        }
        if col0 >= self.col_offset + width {
            self.col_offset = col0 + 1 - width;
        }
        tracing::trace!(
            target: "editor.scroll",
            col = self.col,
            line = self.line,
            col_offset = self.col_offset,
            line_offset = self.line_offset,
            "scrolled"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(col: usize, line: usize, col_offset: usize, line_offset: usize) -> Cursor {
        Cursor {
            col,
            line,
            col_offset,
            line_offset,
        }
    }

    #[test]
    fn starts_at_origin() {
        let c = Cursor::new();
        assert_eq!((c.col(), c.line()), (1, 1));
        assert_eq!((c.col_offset(), c.line_offset()), (0, 0));
        assert_eq!((c.x(), c.y()), (1, 1));
    }

    #[test]
    fn screen_coordinates_subtract_offsets() {
        let c = cursor(10, 30, 4, 20);
        assert_eq!(c.x(), 6);
        assert_eq!(c.y(), 10);
    }

    #[test]
    fn left_moves_within_line() {
        let mut c = Cursor::at(3, 2);
        c.left(10);
        assert_eq!((c.col(), c.line()), (2, 2));
    }

    #[test]
    fn left_wraps_to_end_of_previous_line() {
        let mut c = Cursor::at(1, 2);
        c.left(5);
        assert_eq!((c.col(), c.line()), (6, 1));
    }

    #[test]
    fn left_at_origin_is_noop() {
        let mut c = Cursor::new();
        c.left(0);
        assert_eq!(c, Cursor::new());
    }

    #[test]
    fn right_moves_within_line_including_end_position() {
        let mut c = Cursor::at(5, 1);
        c.right(5, 3);
        assert_eq!((c.col(), c.line()), (6, 1));
    }

    #[test]
    fn right_wraps_to_start_of_next_line() {
        let mut c = Cursor::at(6, 1);
        c.right(5, 3);
        assert_eq!((c.col(), c.line()), (1, 2));
    }

    #[test]
    fn right_reaches_virtual_line_then_stops() {
        let mut c = Cursor::at(3, 2);
        c.right(2, 2);
        assert_eq!((c.col(), c.line()), (1, 3));
        c.right(0, 2);
        assert_eq!((c.col(), c.line()), (1, 3));
    }

    #[test]
    fn home_and_end() {
        let mut c = Cursor::at(4, 1);
        c.home();
        assert_eq!(c.col(), 1);
        c.end(7);
        assert_eq!(c.col(), 8);
    }

    #[test]
    fn up_and_down_bounds() {
        let mut c = Cursor::new();
        assert!(!c.up());
        assert!(c.down(1));
        assert_eq!(c.line(), 2);
        assert!(!c.down(1), "virtual line is the last stop");
        assert!(c.up());
        assert_eq!(c.line(), 1);
    }

    #[test]
    fn snap_clamps_only_when_past_end() {
        let mut c = Cursor::at(10, 1);
        c.snap(3);
        assert_eq!(c.col(), 4);
        c.snap(8);
        assert_eq!(c.col(), 4);
    }

    #[test]
    fn page_up_from_top_stays_on_first_line() {
        let mut c = cursor(1, 5, 0, 0);
        c.page_up(10);
        assert_eq!(c.line(), 1);
    }

    #[test]
    fn page_up_moves_one_screen_above_viewport() {
        let mut c = cursor(1, 45, 0, 40);
        c.page_up(10);
        assert_eq!(c.line(), 32);
    }

    #[test]
    fn page_down_moves_one_screen_below_viewport() {
        let mut c = cursor(1, 3, 0, 0);
        c.page_down(10, 100);
        assert_eq!(c.line(), 19);
    }

    #[test]
    fn page_down_clamps_to_virtual_line() {
        let mut c = cursor(1, 3, 0, 0);
        c.page_down(10, 5);
        assert_eq!(c.line(), 6);
    }

    #[test]
    fn scroll_down_puts_cursor_on_last_row() {
        let mut c = cursor(1, 15, 0, 0);
        c.scroll(80, 10);
        assert_eq!(c.line_offset(), 5);
        assert_eq!(c.y(), 10);
    }

    #[test]
    fn scroll_up_reveals_cursor_on_first_row() {
        let mut c = cursor(1, 3, 0, 8);
        c.scroll(80, 10);
        assert_eq!(c.line_offset(), 2);
        assert_eq!(c.y(), 1);
    }

    #[test]
    fn scroll_right_puts_cursor_on_last_column() {
        let mut c = cursor(25, 1, 0, 0);
        c.scroll(20, 10);
        assert_eq!(c.col_offset(), 5);
        assert_eq!(c.x(), 20);
    }

    #[test]
    fn scroll_left_keeps_margin_of_context() {
        let mut c = cursor(12, 1, 20, 0);
        c.scroll(20, 10);
        assert_eq!(c.col_offset(), 8);
        assert_eq!(c.x(), 4);
    }

    #[test]
    fn scroll_left_near_line_start_resets_offset() {
        let mut c = cursor(2, 1, 10, 0);
        c.scroll(20, 10);
        assert_eq!(c.col_offset(), 0);
    }

    #[test]
    fn scroll_within_view_keeps_offsets() {
        let mut c = cursor(10, 12, 5, 10);
        c.scroll(20, 10);
        assert_eq!((c.col_offset(), c.line_offset()), (5, 10));
    }

    #[test]
    fn scroll_with_custom_margin() {
        let mut c = cursor(12, 1, 20, 0);
        c.scroll_with_margin(20, 10, 0);
        assert_eq!(c.col_offset(), 11);
        assert_eq!(c.x(), 1);
    }
}

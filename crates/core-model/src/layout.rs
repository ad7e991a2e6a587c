//! Screen geometry.
//!
//! The terminal is split into a content area followed by two reserved rows:
//! the status bar and the message bar. All sizes are terminal cells.

/// Rows below the content area (status bar + message bar).
pub const RESERVED_ROWS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub columns: u16,
    pub rows: u16,
}

impl Layout {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Width of the content area, never 0.
    pub fn text_columns(&self) -> usize {
        usize::from(self.columns.max(1))
    }

    /// Height of the content area, never 0.
    pub fn text_rows(&self) -> usize {
        usize::from(self.rows.saturating_sub(RESERVED_ROWS).max(1))
    }
}

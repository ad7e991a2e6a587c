//! Document state: the ordered line buffer plus the transient status message.
//!
//! `Document` indices are 0-based. The editor layer translates from the
//! 1-based cursor. A line index equal to `len()` addresses the virtual
//! trailing line: it reads as empty and is materialized by the first edit
//! that types into it.

use core_text::Line;
use std::time::{Duration, Instant};

pub mod io;
pub use io::{SaveError, load, save};

/// Lines preallocated for a freshly loaded document.
const LINES_TO_PREALLOCATE: usize = 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Parse raw file text: one `Line` per `\n`-terminated line, a trailing
    /// `\r` stripped from each, tabs expanded. A final unterminated line is
    /// kept; an empty input yields an empty document.
    pub fn from_text(text: &str) -> Self {
        if text.contains("\r\n") {
            tracing::warn!(target: "io", "crlf_line_endings_normalized");
        }
        let mut lines = Vec::with_capacity(LINES_TO_PREALLOCATE);
        lines.extend(text.lines().map(Line::from_raw));
        Self { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    /// Length of line `idx`; 0 for the virtual trailing line or beyond.
    pub fn line_len(&self, idx: usize) -> usize {
        self.lines.get(idx).map_or(0, Line::len)
    }

    /// Line `idx` for mutation, appending empty lines up to it if it lies at
    /// or past the end.
    fn line_mut(&mut self, idx: usize) -> &mut Line {
        while self.lines.len() <= idx {
            self.lines.push(Line::new());
        }
        &mut self.lines[idx]
    }

    /// Insert `ch` at column `col` of line `line`.
    pub fn insert_char(&mut self, line: usize, col: usize, ch: char) {
        self.line_mut(line).insert_at(ch, col);
    }

    /// Remove the code point at column `col` of line `line`. Returns `None`
    /// when there is nothing to delete.
    pub fn delete_char(&mut self, line: usize, col: usize) -> Option<char> {
        let target = self.lines.get_mut(line)?;
        if col >= target.len() {
            return None;
        }
        target.delete_at(col)
    }

    /// Split line `line` at column `col`; the tail becomes a new line
    /// immediately after it. On the virtual trailing line this only
    /// materializes that line.
    pub fn split_line(&mut self, line: usize, col: usize) {
        if line >= self.lines.len() {
            self.line_mut(line);
            return;
        }
        let tail = self.lines[line].split_off(col);
        self.lines.insert(line + 1, tail);
    }

    /// Append line `line` onto line `line - 1` and remove it. Returns the
    /// previous line's original length (the join column), or `None` when
    /// there is no previous line or `line` does not exist.
    pub fn merge_with_previous(&mut self, line: usize) -> Option<usize> {
        if line == 0 || line >= self.lines.len() {
            return None;
        }
        let current = self.lines.remove(line);
        let prev = &mut self.lines[line - 1];
        let join = prev.len();
        prev.append(current);
        Some(join)
    }

    /// Append line `line + 1` onto line `line` and remove it. Returns false
    /// when there is no next line.
    pub fn merge_with_next(&mut self, line: usize) -> bool {
        if line + 1 >= self.lines.len() {
            return false;
        }
        let next = self.lines.remove(line + 1);
        self.lines[line].append(next);
        true
    }

    /// Save format: every line followed by `\n`.
    pub fn serialize(&self) -> String {
        let cap = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = String::with_capacity(cap);
        for line in &self.lines {
            out.extend(line.chars());
            out.push('\n');
        }
        out
    }
}

/// Transient message shown in the message bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

impl StatusMessage {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self::at(text, Instant::now())
    }

    pub fn at<S: Into<String>>(text: S, set_at: Instant) -> Self {
        Self {
            text: text.into(),
            set_at,
        }
    }

    /// True while less than `ttl` has elapsed since the message was set.
    pub fn is_visible(&self, now: Instant, ttl: Duration) -> bool {
        !self.text.is_empty() && now.saturating_duration_since(self.set_at) < ttl
    }
}

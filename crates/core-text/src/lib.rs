//! Single-line text storage.
//!
//! A `Line` is a vector of code points, one per screen column. Tabs are
//! expanded to spaces when a line is built from raw text, and the expanded
//! form is what gets rendered and what gets saved.
//!
//! Index arguments are clamped rather than rejected: an insert past the end
//! appends, a delete past the end removes the last code point.

use std::fmt;

pub mod tabs;

pub use tabs::{TAB_STOP, expand_tabs, spaces_to_next_stop};

const LINE_CHARS_TO_PREALLOCATE: usize = 128;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    chars: Vec<char>,
}

impl Line {
    pub fn new() -> Self {
        Self {
            chars: Vec::with_capacity(LINE_CHARS_TO_PREALLOCATE),
        }
    }

    /// Build a line from raw text, expanding tabs to the next `TAB_STOP`.
    pub fn from_raw(raw: &str) -> Self {
        Self {
            chars: expand_tabs(raw),
        }
    }

    /// Number of code points (screen columns) in the line.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Materialize the line as a `String`.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Insert `ch` before `index`; indices past the end append.
    pub fn insert_at(&mut self, ch: char, index: usize) {
        let index = index.min(self.chars.len());
        self.chars.insert(index, ch);
    }

    /// Remove the code point at `index`; indices past the end remove the
    /// last one. No-op on an empty line.
    pub fn delete_at(&mut self, index: usize) -> Option<char> {
        if self.chars.is_empty() {
            return None;
        }
        let index = index.min(self.chars.len() - 1);
        Some(self.chars.remove(index))
    }

    pub fn delete_last(&mut self) -> Option<char> {
        self.chars.pop()
    }

    pub fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    /// Move every code point of `other` onto the end of `self`.
    pub fn append(&mut self, mut other: Line) {
        self.chars.append(&mut other.chars);
    }

    /// Split at `index` (clamped), keeping the head and returning the tail.
    pub fn split_off(&mut self, index: usize) -> Line {
        let index = index.min(self.chars.len());
        Line {
            chars: self.chars.split_off(index),
        }
    }

    /// Code points in the half-open column range `[start, end)`, clamped to
    /// the line length.
    pub fn slice(&self, start: usize, end: usize) -> &[char] {
        let end = end.min(self.chars.len());
        let start = start.min(end);
        &self.chars[start..end]
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            fmt::Write::write_char(f, *ch)?;
        }
        Ok(())
    }
}

impl From<&str> for Line {
    fn from(raw: &str) -> Self {
        Self::from_raw(raw)
    }
}

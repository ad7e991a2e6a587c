//! The fixed set of terminal control sequences the renderer emits, each
//! queued as a crossterm command.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscSeq {
    CursorHide,
    CursorShow,
    /// Move the cursor to a 1-based `(row, col)`.
    CursorPosition { row: usize, col: usize },
    CursorTopLeft,
    InvertColors,
    RestoreRendition,
    LineClearFromCursor,
    ScreenClear,
}

impl EscSeq {
    /// Queue the sequence on `out` without flushing.
    pub fn queue<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self {
            EscSeq::CursorHide => queue!(out, Hide),
            EscSeq::CursorShow => queue!(out, Show),
            EscSeq::CursorPosition { row, col } => {
                queue!(out, MoveTo(to_origin_zero(col), to_origin_zero(row)))
            }
            EscSeq::CursorTopLeft => queue!(out, MoveTo(0, 0)),
            EscSeq::InvertColors => queue!(out, SetAttribute(Attribute::Reverse)),
            EscSeq::RestoreRendition => queue!(out, SetAttribute(Attribute::Reset)),
            EscSeq::LineClearFromCursor => queue!(out, Clear(ClearType::UntilNewLine)),
            EscSeq::ScreenClear => queue!(out, Clear(ClearType::All)),
        }
    }
}

/// crossterm positions are 0-based and `u16`.
fn to_origin_zero(n: usize) -> u16 {
    u16::try_from(n.saturating_sub(1)).unwrap_or(u16::MAX)
}

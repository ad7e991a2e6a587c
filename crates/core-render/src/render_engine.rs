//! Full-frame renderer.
//!
//! Paint order per frame: hide cursor, home, content rows, status bar,
//! message bar, place cursor, show cursor, flush. Each content row ends by
//! clearing the remains of the previous frame before the CRLF, so no
//! full-screen clear is needed between frames.

use crate::status::{StatusContext, compose_status};
use crate::timing::RenderStats;
use crate::writer::TerminalWriter;
use crate::{EscSeq, Frame, FrameRenderer};
use core_model::{Cursor, Layout};
use core_text::Line;
use std::io;
use std::time::{Duration, Instant};

/// How long a status message stays in the message bar.
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(5);

pub struct Renderer<W> {
    about: String,
    writer: W,
    layout: Layout,
    message_ttl: Duration,
    stats: RenderStats,
}

impl<W: TerminalWriter> Renderer<W> {
    pub fn new(name: &str, version: &str, writer: W, layout: Layout) -> Self {
        Self {
            about: format!("{name} -- version {version}"),
            writer,
            layout,
            message_ttl: DEFAULT_MESSAGE_TTL,
            stats: RenderStats::default(),
        }
    }

    pub fn with_message_ttl(mut self, ttl: Duration) -> Self {
        self.message_ttl = ttl;
        self
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Render `frame` judging status message expiry against `now`.
    pub fn render_at(&mut self, frame: &Frame<'_>, now: Instant) -> io::Result<()> {
        let started = Instant::now();
        self.writer.write_escape(EscSeq::CursorHide)?;
        self.writer.write_escape(EscSeq::CursorTopLeft)?;
        if frame.lines.is_empty() {
            self.render_homepage()?;
        } else {
            self.render_content(&frame.cursor, frame.lines)?;
        }
        self.render_status_bar(frame)?;
        self.render_message_bar(frame, now)?;
        self.writer.write_escape(EscSeq::CursorPosition {
            row: frame.cursor.y(),
            col: frame.cursor.x(),
        })?;
        self.writer.write_escape(EscSeq::CursorShow)?;
        self.writer.flush()?;

        let elapsed = started.elapsed();
        self.stats.record(elapsed);
        tracing::trace!(
            target: "render",
            elapsed_us = elapsed.as_micros() as u64,
            lines = frame.lines.len(),
            "frame_rendered"
        );
        Ok(())
    }

    fn render_homepage(&mut self) -> io::Result<()> {
        let height = self.layout.text_rows();
        let width = self.layout.text_columns();
        let banner_row = height / 3;
        for y in 1..=height {
            if y == banner_row {
                let about = center(&self.about, width);
                self.writer.write_str(&about)?;
            } else {
                self.writer.write_byte(b'~')?;
            }
            self.end_row()?;
        }
        Ok(())
    }

    fn render_content(&mut self, cursor: &Cursor, lines: &[Line]) -> io::Result<()> {
        let height = self.layout.text_rows();
        let width = self.layout.text_columns();
        let start = cursor.col_offset();
        for row in 0..height {
            let idx = row + cursor.line_offset();
            // Rows past the document (including the virtual trailing line)
            // show a filler.
            match lines.get(idx) {
                Some(line) => {
                    for ch in line.slice(start, start + width) {
                        self.writer.write_char(*ch)?;
                    }
                }
                None => self.writer.write_byte(b'~')?,
            }
            self.end_row()?;
        }
        Ok(())
    }

    fn render_status_bar(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let ctx = StatusContext {
            filename: frame.filename,
            line: frame.cursor.line(),
            total_lines: frame.lines.len(),
            dirty: frame.dirty,
        };
        let bar = compose_status(&ctx, self.layout.text_columns());
        self.writer.write_escape(EscSeq::InvertColors)?;
        self.writer.write_str(&bar)?;
        self.writer.write_escape(EscSeq::RestoreRendition)?;
        self.writer.write_str("\r\n")
    }

    fn render_message_bar(&mut self, frame: &Frame<'_>, now: Instant) -> io::Result<()> {
        let age = now.saturating_duration_since(frame.last_status_time);
        if !frame.status_msg.is_empty() && age < self.message_ttl {
            let width = self.layout.text_columns();
            for ch in frame.status_msg.chars().take(width) {
                self.writer.write_char(ch)?;
            }
        }
        self.writer.write_escape(EscSeq::LineClearFromCursor)
    }

    /// Clear leftovers of the previous frame on this row, then CRLF.
    fn end_row(&mut self) -> io::Result<()> {
        self.writer.write_escape(EscSeq::LineClearFromCursor)?;
        self.writer.write_str("\r\n")
    }
}

impl<W: TerminalWriter> FrameRenderer for Renderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.render_at(frame, Instant::now())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.writer.write_escape(EscSeq::ScreenClear)?;
        self.writer.write_escape(EscSeq::CursorTopLeft)?;
        self.writer.flush()
    }
}

/// Center `s` in a field of `width` columns, truncating to `width`.
fn center(s: &str, width: usize) -> String {
    let len = s.chars().count();
    let right_aligned_to = (width + len) / 2;
    let padded = format!("{s:>right_aligned_to$}");
    let full = format!("{padded:<width$}");
    full.chars().take(width).collect()
}

//! Terminal writer abstraction.
//!
//! Design invariants:
//! * Writes preserve ordering.
//! * Nothing reaches the underlying device before `flush`, provided a frame
//!   fits in the buffer capacity.
//! * The writer owns no global state.

use crate::EscSeq;
use std::io::{self, BufWriter, Write};

/// Buffer capacity for one frame. Large enough for a full repaint of a big
/// terminal so a frame is emitted in a single device write.
const FRAME_BUFFER_BYTES: usize = 64 * 1024;

pub trait TerminalWriter {
    fn write_byte(&mut self, b: u8) -> io::Result<()>;
    fn write_char(&mut self, c: char) -> io::Result<()>;
    fn write_str(&mut self, s: &str) -> io::Result<()>;
    fn write_escape(&mut self, seq: EscSeq) -> io::Result<()>;
    fn flush(&mut self) -> io::Result<()>;
}

pub struct BufferedWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> BufferedWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: BufWriter::with_capacity(FRAME_BUFFER_BYTES, inner),
        }
    }

    /// The underlying device, as written so far.
    pub fn get_ref(&self) -> &W {
        self.inner.get_ref()
    }
}

impl<W: Write> TerminalWriter for BufferedWriter<W> {
    fn write_byte(&mut self, b: u8) -> io::Result<()> {
        self.inner.write_all(&[b])
    }

    fn write_char(&mut self, c: char) -> io::Result<()> {
        let mut utf8 = [0u8; 4];
        self.inner.write_all(c.encode_utf8(&mut utf8).as_bytes())
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())
    }

    fn write_escape(&mut self, seq: EscSeq) -> io::Result<()> {
        seq.queue(&mut self.inner)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

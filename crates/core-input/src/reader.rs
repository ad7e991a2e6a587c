//! Zero-allocation key reader.
//!
//! `RawKeyReader` reads each keypress into one fixed buffer that is reused
//! by every call. The slice handed back borrows the reader mutably, so a
//! caller cannot hold on to one chunk while asking for the next.

use std::io::{self, Read};

/// Longest chunk treated as one keypress. Longer than any escape sequence
/// or UTF-8 code point produced by a standard keyboard.
pub const MAX_KEY_BYTES: usize = 8;

/// Source of raw keypress chunks.
pub trait KeyReader {
    /// Read the bytes of exactly one keypress or escape chord. An empty slice
    /// signals end of input.
    fn read_key(&mut self) -> io::Result<&[u8]>;
}

pub struct RawKeyReader<R> {
    inner: R,
    buf: [u8; MAX_KEY_BYTES],
}

impl<R: Read> RawKeyReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: [0; MAX_KEY_BYTES],
        }
    }
}

impl<R: Read> KeyReader for RawKeyReader<R> {
    fn read_key(&mut self) -> io::Result<&[u8]> {
        let n = loop {
            match self.inner.read(&mut self.buf) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        tracing::trace!(target: "input", bytes = n, "key_read");
        Ok(&self.buf[..n])
    }
}

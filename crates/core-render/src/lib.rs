//! Frame composition: editor snapshot in, terminal byte stream out.
//!
//! Exposed components:
//! - `escape`: the fixed escape sequences the renderer emits, queued as
//!   crossterm commands.
//! - `writer`: `TerminalWriter` capability and its buffered implementation.
//! - `status`: status bar text composition.
//! - `render_engine`: `Renderer`, which paints a whole `Frame` per call.
//! - `timing`: per-renderer frame time counters.
//!
//! Invariants:
//! - Every `render` repaints the full screen; no state carries over between
//!   frames except what is already on the terminal.
//! - Output is buffered and reaches the device only on the final flush of a
//!   `render` or `clear` call.
//! - Slices never read past the end of a line or the right edge of the
//!   viewport.

use core_model::Cursor;
use core_text::Line;
use std::time::Instant;

pub mod escape;
pub mod render_engine;
pub mod status;
pub mod timing;
pub mod writer;

pub use escape::EscSeq;
pub use render_engine::{DEFAULT_MESSAGE_TTL, Renderer};
pub use timing::RenderStats;
pub use writer::{BufferedWriter, TerminalWriter};

/// Immutable snapshot of editor state for one repaint.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub cursor: Cursor,
    pub lines: &'a [Line],
    pub filename: &'a str,
    pub status_msg: &'a str,
    pub last_status_time: Instant,
    pub dirty: bool,
}

/// Rendering side of the editor loop.
pub trait FrameRenderer {
    /// Paint one complete frame and flush it.
    fn render(&mut self, frame: &Frame<'_>) -> std::io::Result<()>;
    /// Wipe the screen and home the cursor.
    fn clear(&mut self) -> std::io::Result<()>;
}

//! Keyboard input: raw terminal chunks in, logical `Key` values out.
//!
//! Two halves:
//! * `reader` owns the fixed-size byte buffer a key chunk is read into.
//! * `key_token` classifies one chunk as exactly one `Key` (pure, infallible).
//!
//! Ctrl chords arrive as bare code points below 0x20 (the terminal clears
//! bits 5 and 6 of the base character). `decode` only claims the chords that
//! name an editing function (Backspace, Delete); Save / Quit / Refresh stay
//! plain `Key::Char` values and are matched by the dispatcher via the
//! `CHORD_*` constants below.

mod key_token;
mod reader;

pub use key_token::decode;
pub use reader::{KeyReader, MAX_KEY_BYTES, RawKeyReader};

/// Offset of the function-key band in the numeric encoding, past the end of
/// the Unicode range.
pub const FUNCTION_KEY_BASE: u32 = 1_000_000;

/// Mask applied to an ASCII character to produce its Ctrl chord.
pub const CTRL_MASK: u8 = 0x1f;

/// Ctrl-`c` as the code point the terminal delivers in raw mode.
pub const fn ctrl(c: char) -> char {
    ((c as u8) & CTRL_MASK) as char
}

pub const CHORD_QUIT: char = ctrl('q');
pub const CHORD_SAVE: char = ctrl('s');
pub const CHORD_REFRESH: char = ctrl('l');
pub const CHORD_BACKSPACE: char = ctrl('h');
pub const CHORD_DELETE: char = ctrl('d');

/// One logical keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Empty read: the input stream has ended.
    None,
    Char(char),
    Delete,
    Down,
    End,
    Home,
    Left,
    PageUp,
    PageDown,
    Right,
    Up,
    Backspace,
    Escape,
    Enter,
}

impl Key {
    /// Numeric encoding: the code point for `Char`, `FUNCTION_KEY_BASE + n`
    /// for function keys and 0 for `None`. Used for log output.
    pub fn code(self) -> u32 {
        let ordinal = match self {
            Key::None => return 0,
            Key::Char(c) => return c as u32,
            Key::Delete => 0,
            Key::Down => 1,
            Key::End => 2,
            Key::Home => 3,
            Key::Left => 4,
            Key::PageUp => 5,
            Key::PageDown => 6,
            Key::Right => 7,
            Key::Up => 8,
            Key::Backspace => 9,
            Key::Escape => 10,
            Key::Enter => 11,
        };
        FUNCTION_KEY_BASE + ordinal
    }
}

use crate::{CHORD_BACKSPACE, CHORD_DELETE, Key};

const ESC: u8 = 0x1b;
const DEL: u8 = 127;

/// Classify one raw input chunk as a single `Key`.
///
/// Escape sequences are tried first (CSI `ESC [` and SS3 `ESC O`), then the
/// single-byte controls, and finally the chunk is decoded as one UTF-8 code
/// point. An unrecognised escape sequence decodes as `Key::Escape`. Invalid
/// UTF-8 decodes to `U+FFFD`.
pub fn decode(chunk: &[u8]) -> Key {
    let Some(&first) = chunk.first() else {
        return Key::None;
    };
    if let Some(key) = decode_escape_sequence(chunk) {
        return key;
    }
    if first == CHORD_BACKSPACE as u8 || first == DEL {
        return Key::Backspace;
    }
    if first == CHORD_DELETE as u8 {
        return Key::Delete;
    }
    if first == ESC {
        return Key::Escape;
    }
    if first == b'\r' || first == b'\n' {
        return Key::Enter;
    }
    Key::Char(decode_code_point(chunk))
}

fn decode_escape_sequence(chunk: &[u8]) -> Option<Key> {
    match chunk {
        [ESC, b'[' | b'O', final_byte] => match final_byte {
            b'A' => Some(Key::Up),
            b'B' => Some(Key::Down),
            b'C' => Some(Key::Right),
            b'D' => Some(Key::Left),
            b'H' => Some(Key::Home),
            b'F' => Some(Key::End),
            _ => None,
        },
        [ESC, b'[', digit, b'~'] => match digit {
            b'1' | b'7' => Some(Key::Home),
            b'3' => Some(Key::Delete),
            b'4' | b'8' => Some(Key::End),
            b'5' => Some(Key::PageUp),
            b'6' => Some(Key::PageDown),
            _ => None,
        },
        _ => None,
    }
}

/// Decode the first UTF-8 code point of `bytes`.
fn decode_code_point(bytes: &[u8]) -> char {
    let valid = match std::str::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    };
    valid
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

use core_input::{CHORD_QUIT, CHORD_SAVE, Key, KeyReader, RawKeyReader, decode};
use pretty_assertions::assert_eq;
use std::io::{self, Read};

/// Delivers each scripted keypress as its own read, the way a raw-mode tty does.
struct Keystrokes(Vec<&'static [u8]>);

impl Read for Keystrokes {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.0.is_empty() {
            return Ok(0);
        }
        let chunk = self.0.remove(0);
        buf[..chunk.len()].copy_from_slice(chunk);
        Ok(chunk.len())
    }
}

fn decode_all(strokes: &[&'static [u8]]) -> Vec<Key> {
    let mut reader = RawKeyReader::new(Keystrokes(strokes.to_vec()));
    let mut keys = Vec::new();
    loop {
        let key = decode(reader.read_key().expect("scripted read"));
        keys.push(key);
        if key == Key::None {
            return keys;
        }
    }
}

#[test]
fn decodes_a_typing_session() {
    let keys = decode_all(&[
        b"h",
        b"\x1b[D",
        "ß".as_bytes(),
        b"\r",
        b"\x7f",
        b"\x1b[3~",
        &[0x13],
        &[0x11],
    ]);
    assert_eq!(
        keys,
        vec![
            Key::Char('h'),
            Key::Left,
            Key::Char('ß'),
            Key::Enter,
            Key::Backspace,
            Key::Delete,
            Key::Char(CHORD_SAVE),
            Key::Char(CHORD_QUIT),
            Key::None,
        ]
    );
}

#[test]
fn page_and_home_variants() {
    let keys = decode_all(&[b"\x1b[5~", b"\x1b[6~", b"\x1bOH", b"\x1b[8~"]);
    assert_eq!(
        keys,
        vec![Key::PageUp, Key::PageDown, Key::Home, Key::End, Key::None]
    );
}

use core_model::{Cursor, Layout};
use core_render::{BufferedWriter, Frame, FrameRenderer, Renderer};
use core_text::Line;
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

const HIDE: &str = "\x1b[?25l";
const SHOW: &str = "\x1b[?25h";
const HOME: &str = "\x1b[1;1H";
const EOL: &str = "\x1b[K\r\n";
const INV: &str = "\x1b[7m";
const RST: &str = "\x1b[0m";
const CLR: &str = "\x1b[K";

fn renderer(columns: u16, rows: u16) -> Renderer<BufferedWriter<Vec<u8>>> {
    Renderer::new("Kestrel editor", "0.1.0", BufferedWriter::new(Vec::new()), Layout::new(columns, rows))
}

fn output(r: &Renderer<BufferedWriter<Vec<u8>>>) -> String {
    String::from_utf8(r.writer().get_ref().clone()).expect("renderer emits UTF-8")
}

fn lines(raw: &[&str]) -> Vec<Line> {
    raw.iter().map(|s| Line::from_raw(s)).collect()
}

fn frame<'a>(cursor: Cursor, lines: &'a [Line], msg: &'a str, at: Instant) -> Frame<'a> {
    Frame {
        cursor,
        lines,
        filename: "notes.txt",
        status_msg: msg,
        last_status_time: at,
        dirty: false,
    }
}

#[test]
fn renders_content_status_and_cursor() {
    let mut r = renderer(20, 5);
    let doc = lines(&["hello", "world"]);
    let now = Instant::now();
    let mut cursor = Cursor::at(3, 2);
    cursor.scroll(20, 3);
    r.render_at(&frame(cursor, &doc, "", now), now).unwrap();

    let expected = [
        HIDE,
        HOME,
        "hello",
        EOL,
        "world",
        EOL,
        "~",
        EOL,
        INV,
        // Left segment cut to width - 1; right segment no longer fits.
        " notes.txt - 2 line ",
        RST,
        "\r\n",
        CLR,
        "\x1b[2;3H",
        SHOW,
    ]
    .concat();
    assert_eq!(output(&r), expected);
}

#[test]
fn slices_lines_by_viewport_offsets() {
    let mut r = renderer(4, 4);
    let doc = lines(&["0123456789", "ab", "xyz"]);
    let now = Instant::now();
    let mut cursor = Cursor::at(9, 3);
    cursor.scroll(4, 2);
    assert_eq!((cursor.col_offset(), cursor.line_offset()), (5, 1));
    r.render_at(&frame(cursor, &doc, "", now), now).unwrap();

    let out = output(&r);
    let content = out
        .strip_prefix(&format!("{HIDE}{HOME}"))
        .expect("frame starts by hiding and homing the cursor");
    // Line 2 ("ab") is shorter than the column offset; line 3 is cut too.
    assert!(content.starts_with(&format!("{EOL}{EOL}{INV}")));
    assert!(out.ends_with(&format!("\x1b[2;4H{SHOW}")));
}

#[test]
fn empty_document_shows_banner_on_third_row() {
    let mut r = renderer(30, 11);
    let now = Instant::now();
    r.render_at(&frame(Cursor::new(), &[], "", now), now).unwrap();
    let out = output(&r);

    let rows: Vec<&str> = out
        .strip_prefix(&format!("{HIDE}{HOME}"))
        .expect("frame starts by hiding and homing the cursor")
        .split(EOL)
        .collect();
    // 9 content rows, banner on row 9 / 3 = 3.
    assert_eq!(rows[0], "~");
    assert_eq!(rows[1], "~");
    // The banner is one column wider than the screen.
    assert_eq!(rows[2], "Kestrel editor -- version 0.1.");
    assert_eq!(rows[3], "~");
    assert_eq!(rows[8], "~");
}

#[test]
fn status_message_expires_after_five_seconds() {
    let set_at = Instant::now();
    let doc = lines(&["x"]);

    let mut shown = renderer(20, 3);
    shown
        .render_at(&frame(Cursor::new(), &doc, "saved", set_at), set_at + Duration::from_millis(4900))
        .unwrap();
    assert!(output(&shown).contains(&format!("\r\nsaved{CLR}")));

    let mut hidden = renderer(20, 3);
    hidden
        .render_at(&frame(Cursor::new(), &doc, "saved", set_at), set_at + Duration::from_millis(5100))
        .unwrap();
    let out = output(&hidden);
    assert!(!out.contains("saved"));
    assert!(out.contains(&format!("{RST}\r\n{CLR}")));
}

#[test]
fn dirty_flag_marks_status_bar() {
    let mut r = renderer(40, 3);
    let doc = lines(&["x"]);
    let now = Instant::now();
    let mut f = frame(Cursor::new(), &doc, "", now);
    f.dirty = true;
    r.render_at(&f, now).unwrap();
    assert!(output(&r).contains(" notes.txt - 1 lines (modified)"));
    assert_eq!(r.stats().frames, 1);
}

#[test]
fn clear_wipes_screen_and_homes() {
    let mut r = renderer(10, 3);
    r.clear().unwrap();
    assert_eq!(output(&r), "\x1b[2J\x1b[1;1H");
}

use core_model::Cursor;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Move {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
}

fn any_move() -> impl Strategy<Value = Move> {
    prop_oneof![
        Just(Move::Left),
        Just(Move::Right),
        Just(Move::Up),
        Just(Move::Down),
        Just(Move::Home),
        Just(Move::End),
        Just(Move::PageUp),
        Just(Move::PageDown),
    ]
}

/// Length of the 1-based `line`; the virtual trailing line is empty.
fn len_of(lines: &[usize], line: usize) -> usize {
    lines.get(line - 1).copied().unwrap_or(0)
}

/// Apply one move the way the editor does: transition, then snap.
fn apply(c: &mut Cursor, m: Move, lines: &[usize], height: usize) {
    let n = lines.len();
    let line = c.line();
    match m {
        Move::Left => c.left(if line > 1 { len_of(lines, line - 1) } else { 0 }),
        Move::Right => c.right(len_of(lines, line), n),
        Move::Up => {
            c.up();
        }
        Move::Down => {
            c.down(n);
        }
        Move::Home => c.home(),
        Move::End => c.end(len_of(lines, line)),
        Move::PageUp => c.page_up(height),
        Move::PageDown => c.page_down(height, n),
    }
    c.snap(len_of(lines, c.line()));
}

proptest! {
    #[test]
    fn invariants_hold_after_every_move(
        lines in prop::collection::vec(0usize..120, 0..60),
        moves in prop::collection::vec(any_move(), 0..200),
        width in 1usize..100,
        height in 1usize..40,
    ) {
        let mut c = Cursor::new();
        for m in moves {
            apply(&mut c, m, &lines, height);
            c.scroll(width, height);
            prop_assert!(c.line() >= 1 && c.line() <= lines.len() + 1);
            prop_assert!(c.col() >= 1 && c.col() <= len_of(&lines, c.line()) + 1);
            prop_assert!(c.y() >= 1 && c.y() <= height);
            prop_assert!(c.x() >= 1 && c.x() <= width);
        }
    }

    #[test]
    fn invariants_hold_from_any_valid_start(
        lines in prop::collection::vec(0usize..120, 0..60),
        start_line in any::<prop::sample::Index>(),
        start_col in any::<prop::sample::Index>(),
        moves in prop::collection::vec(any_move(), 0..100),
        width in 1usize..100,
        height in 1usize..40,
    ) {
        let line = 1 + start_line.index(lines.len() + 1);
        let col = 1 + start_col.index(len_of(&lines, line) + 1);
        let mut c = Cursor::at(col, line);
        c.scroll(width, height);
        prop_assert!(c.y() >= 1 && c.y() <= height);
        prop_assert!(c.x() >= 1 && c.x() <= width);
        for m in moves {
            apply(&mut c, m, &lines, height);
            c.scroll(width, height);
            prop_assert!(c.line() >= 1 && c.line() <= lines.len() + 1);
            prop_assert!(c.col() >= 1 && c.col() <= len_of(&lines, c.line()) + 1);
            prop_assert!(c.y() >= 1 && c.y() <= height);
            prop_assert!(c.x() >= 1 && c.x() <= width);
        }
    }

    #[test]
    fn scroll_is_idempotent(
        col in 1usize..500,
        line in 1usize..500,
        col_offset in 0usize..500,
        line_offset in 0usize..500,
        width in 1usize..200,
        height in 1usize..100,
    ) {
        let mut start = Cursor::at(col, line);
        // Establish arbitrary previous offsets by scrolling from a far position.
        start.set_position(col_offset + 1, line_offset + 1);
        start.scroll(1, 1);
        start.set_position(col, line);

        let mut once = start;
        once.scroll(width, height);
        let mut twice = once;
        twice.scroll(width, height);
        prop_assert_eq!(once, twice);
    }
}

/// Fixed tab stop interval.
pub const TAB_STOP: usize = 4;

/// Spaces a tab typed at 0-based column `col` expands to.
pub fn spaces_to_next_stop(col: usize) -> usize {
    TAB_STOP - col % TAB_STOP
}

/// Decode `raw` into code points, replacing each tab with the spaces needed
/// to reach the next tab stop (always at least one).
pub fn expand_tabs(raw: &str) -> Vec<char> {
    let tabs = raw.matches('\t').count();
    let mut out = Vec::with_capacity(raw.chars().count() + tabs * (TAB_STOP - 1));
    for ch in raw.chars() {
        if ch == '\t' {
            let n = spaces_to_next_stop(out.len());
            out.extend(std::iter::repeat_n(' ', n));
        } else {
            out.push(ch);
        }
    }
    out
}

//! Status bar composition.
//!
//! Format: ` <name> - <N> lines[ (modified)]` on the left, `<line>/<N> ` on
//! the right, the gap filled with spaces. `<name>` is cut to 20 characters.
//! The left segment is cut to leave at least one padding column; the right
//! segment is dropped when it does not fit after the left one.

/// Longest file name shown in the status bar.
pub const MAX_FILENAME_CHARS: usize = 20;

/// Inputs needed to compose the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusContext<'a> {
    pub filename: &'a str,
    /// 1-based cursor line.
    pub line: usize,
    pub total_lines: usize,
    pub dirty: bool,
}

pub fn left_segment(ctx: &StatusContext<'_>) -> String {
    let modified = if ctx.dirty { " (modified)" } else { "" };
    format!(
        " {:.max$} - {} lines{}",
        ctx.filename,
        ctx.total_lines,
        modified,
        max = MAX_FILENAME_CHARS
    )
}

pub fn right_segment(ctx: &StatusContext<'_>) -> String {
    format!("{}/{} ", ctx.line, ctx.total_lines)
}

/// Compose the status bar text, exactly `width` characters wide.
pub fn compose_status(ctx: &StatusContext<'_>, width: usize) -> String {
    let lhs = left_segment(ctx);
    let rhs = right_segment(ctx);
    let lhs_len = lhs.chars().count().min(width.saturating_sub(1));
    let mut out = String::with_capacity(width);
    out.extend(lhs.chars().take(lhs_len));

    let remaining = width - lhs_len;
    let rhs_len = rhs.chars().count();
    if remaining >= rhs_len {
        out.extend(std::iter::repeat_n(' ', remaining - rhs_len));
        out.push_str(&rhs);
    } else {
        out.extend(std::iter::repeat_n(' ', remaining));
    }
    out
}

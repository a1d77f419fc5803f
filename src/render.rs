//! Source-snippet rendering for diagnostics.
//!
//! `spec.md` §1 names this as an assumed-available external utility
//! (`render_span(file_text, start_pos, end_pos) -> string`). It's a handful
//! of lines, so it's implemented directly here rather than pulled in as a
//! dependency.

use crate::position::Position;

/// Render the line(s) containing `[start, end)` with a `^^^` underline
/// beneath the offending span, the way the original interpreter's
/// `string_with_arrows` helper does.
pub fn render_span(file_text: &str, start: &Position, end: &Position) -> String {
    let mut result = String::new();

    let idx_start = file_text[..start.idx.min(file_text.len())]
        .rfind('\n')
        .map(|i| i + 1)
        .unwrap_or(0);
    let mut idx_end = file_text[start.idx.min(file_text.len())..]
        .find('\n')
        .map(|i| i + start.idx)
        .unwrap_or(file_text.len());
    if idx_end < idx_start {
        idx_end = file_text.len();
    }

    let line_count = end.line - start.line + 1;
    let mut idx_start = idx_start;
    let mut idx_end = idx_end;

    for i in 0..line_count {
        let line = &file_text[idx_start.min(file_text.len())..idx_end.min(file_text.len())];

        let col_start = if i == 0 { start.col } else { 0 };
        let col_end = if i == line_count - 1 {
            end.col
        } else {
            line.chars().count()
        };

        result.push_str(line);
        result.push('\n');
        result.push_str(&" ".repeat(col_start));
        result.push_str(&"^".repeat(col_end.saturating_sub(col_start).max(1)));

        idx_start = idx_end;
        idx_end = file_text[idx_start.min(file_text.len())..]
            .find('\n')
            .map(|j| j + idx_start)
            .unwrap_or(file_text.len());

        if i != line_count - 1 {
            result.push('\n');
        }
    }

    result.replace('\t', "")
}

// src/search.rs - Literal substring search with a single wrap-around

use crate::buffer::Buffer;
use crate::position::Position;

/// Find the next occurrence of `query` after `start`.
///
/// Scans from the column after `start` to the end of the buffer, then wraps
/// to the first line and scans up to, but not including, `start`. A match
/// sitting exactly at `start` is never reported, so repeating a search from
/// the previous hit moves on to the next occurrence. Matching is literal and
/// case-sensitive; an empty query matches nothing.
pub fn find(buffer: &Buffer, query: &str, start: Position) -> Option<Position> {
    if query.is_empty() || buffer.line_count() == 0 {
        return None;
    }
    let start_line = start.line.min(buffer.line_count() - 1);

    // Rest of the starting line
    if let Some(line) = buffer.line(start_line) {
        let from = Buffer::col_to_byte(&line, start.col.saturating_add(1));
        if let Some(col) = find_from(&line, query, from) {
            return Some(Position::new(start_line, col));
        }
    }

    // Following lines, then wrap around to the top
    let count = buffer.line_count();
    for offset in 1..count {
        let idx = (start_line + offset) % count;
        let line = buffer.line(idx)?;
        if let Some(col) = find_from(&line, query, 0) {
            return Some(Position::new(idx, col));
        }
    }

    // Head of the starting line, strictly before the start column
    let line = buffer.line(start_line)?;
    find_from(&line, query, 0)
        .filter(|&col| col < start.col)
        .map(|col| Position::new(start_line, col))
}

/// Char column of the first match at or after byte offset `from`
fn find_from(line: &str, query: &str, from: usize) -> Option<usize> {
    if from > line.len() {
        return None;
    }
    line[from..]
        .find(query)
        .map(|idx| Buffer::byte_to_col(line, from + idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Buffer {
        Buffer::from_lines(["abc", "xdef", "ghi"])
    }

    #[test]
    fn test_find_forward_on_later_line() {
        let buffer = sample();
        assert_eq!(find(&buffer, "def", Position::zero()), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_find_wraps_once() {
        let buffer = sample();
        let hit = find(&buffer, "abc", Position::new(2, 0));
        assert_eq!(hit, Some(Position::new(0, 0)));
        // The only match is under the cursor now: no re-wrap onto itself
        assert_eq!(find(&buffer, "abc", hit.unwrap()), None);
    }

    #[test]
    fn test_match_at_start_is_skipped_for_next_occurrence() {
        let buffer = Buffer::from_lines(["foo bar foo", "foo"]);
        let first = find(&buffer, "foo", Position::zero()).unwrap();
        assert_eq!(first, Position::new(0, 8));
        let second = find(&buffer, "foo", first).unwrap();
        assert_eq!(second, Position::new(1, 0));
        let third = find(&buffer, "foo", second).unwrap();
        assert_eq!(third, Position::new(0, 0));
    }

    #[test]
    fn test_wrap_finds_earlier_match_on_start_line() {
        let buffer = Buffer::from_lines(["needle and more", "nothing"]);
        assert_eq!(
            find(&buffer, "needle", Position::new(0, 5)),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn test_overlapping_match_after_start() {
        let buffer = Buffer::from_text("aaaa");
        assert_eq!(find(&buffer, "aa", Position::zero()), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_case_sensitive_and_literal() {
        let buffer = Buffer::from_lines(["Hello", "a.c"]);
        assert_eq!(find(&buffer, "hello", Position::zero()), None);
        assert_eq!(find(&buffer, "a.c", Position::zero()), Some(Position::new(1, 0)));
        assert_eq!(find(&Buffer::from_text("abc"), "a.c", Position::zero()), None);
    }

    #[test]
    fn test_multibyte_columns() {
        let buffer = Buffer::from_lines(["ééx", "déjà vu"]);
        assert_eq!(find(&buffer, "x", Position::zero()), Some(Position::new(0, 2)));
        assert_eq!(find(&buffer, "vu", Position::new(0, 2)), Some(Position::new(1, 5)));
    }

    #[test]
    fn test_empty_query_and_empty_buffer() {
        assert_eq!(find(&sample(), "", Position::zero()), None);
        assert_eq!(find(&Buffer::new(), "x", Position::zero()), None);
    }

    #[test]
    fn test_start_past_line_end() {
        let buffer = Buffer::from_lines(["ab", "ab"]);
        assert_eq!(find(&buffer, "ab", Position::new(0, 2)), Some(Position::new(1, 0)));
    }
}

// src/buffer.rs - Line buffer backed by a rope

use crate::position::Position;
use ropey::Rope;
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("Position {line}:{col} is outside the buffer")]
    OutOfBounds { line: usize, col: usize },
    #[error("Line breaks must be inserted with split_line")]
    LineBreak,
}

/// Ordered sequence of lines without terminators.
///
/// The rope only recognizes `'\n'` as a line break, so line `i` of the buffer
/// is exactly line `i` of the rope minus its trailing `'\n'`. An empty rope
/// is one empty line, which keeps the "at least one line" invariant for free.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a buffer from text where every `'\n'` separates two lines.
    /// `"a\nb"` is two lines; `"a\n"` is `"a"` followed by an empty line.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(line.as_ref());
        }
        Self::from_text(&text)
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.rope.len_lines() {
            let line = self.rope.line(line_idx).to_string();
            if line.ends_with('\n') {
                Some(line.trim_end_matches('\n').to_string())
            } else {
                Some(line)
            }
        } else {
            None
        }
    }

    /// Length of a line in chars, excluding the line break. 0 past the end.
    pub fn line_len(&self, line_idx: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(line_idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Screen cells taken by the first `col` chars of a line
    pub fn display_col(&self, line_idx: usize, col: usize) -> usize {
        if line_idx >= self.rope.len_lines() {
            return 0;
        }
        self.rope
            .line(line_idx)
            .chars()
            .take(col.min(self.line_len(line_idx)))
            .map(char_width)
            .sum()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.line_count()).filter_map(move |idx| self.line(idx))
    }

    pub fn is_valid(&self, pos: Position) -> bool {
        pos.line < self.line_count() && pos.col <= self.line_len(pos.line)
    }

    fn char_index(&self, pos: Position) -> Result<usize, BufferError> {
        if !self.is_valid(pos) {
            return Err(BufferError::OutOfBounds {
                line: pos.line,
                col: pos.col,
            });
        }
        Ok(self.rope.line_to_char(pos.line) + pos.col)
    }

    pub fn insert_char(&mut self, line: usize, col: usize, ch: char) -> Result<(), BufferError> {
        if ch == '\n' {
            return Err(BufferError::LineBreak);
        }
        let char_idx = self.char_index(Position::new(line, col))?;
        self.rope.insert_char(char_idx, ch);
        Ok(())
    }

    /// Backspace at `(line, col)`.
    ///
    /// Returns the cursor position after the deletion, or `None` when the
    /// position is the start of the buffer (or invalid) and nothing changed.
    pub fn delete_backward(&mut self, line: usize, col: usize) -> Option<Position> {
        let char_idx = self.char_index(Position::new(line, col)).ok()?;
        if col > 0 {
            self.rope.remove(char_idx - 1..char_idx);
            Some(Position::new(line, col - 1))
        } else if line > 0 {
            // Removing the previous line's '\n' merges the two lines
            let joined_at = self.line_len(line - 1);
            self.rope.remove(char_idx - 1..char_idx);
            Some(Position::new(line - 1, joined_at))
        } else {
            None
        }
    }

    /// Split `line` at `col`; the remainder becomes a new line right after it.
    pub fn split_line(&mut self, line: usize, col: usize) -> Result<Position, BufferError> {
        let char_idx = self.char_index(Position::new(line, col))?;
        self.rope.insert_char(char_idx, '\n');
        Ok(Position::new(line + 1, 0))
    }

    /// Char column of `byte_idx` within `line`, for callers that searched the
    /// line as a `&str`.
    pub fn byte_to_col(line: &str, byte_idx: usize) -> usize {
        line[..byte_idx].chars().count()
    }

    /// Byte offset of char column `col` within `line` (clamped to its end).
    pub fn col_to_byte(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map(|(idx, _)| idx)
            .unwrap_or(line.len())
    }
}

/// Cells a char occupies on screen. Control characters, tab included, are
/// drawn as a single blank cell.
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        1
    } else {
        c.width().unwrap_or(0)
    }
}

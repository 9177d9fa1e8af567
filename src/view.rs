// src/view.rs - Read-only projection of the editor for the renderer

use crate::buffer::char_width;
use crate::position::Position;
use std::ops::Range;
use std::path::PathBuf;

/// Everything the renderer needs after a command, detached from the editor
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub target: PathBuf,
    /// Buffer row shown on the first screen row
    pub first_line: usize,
    /// Left-most visible screen cell
    pub offset_col: usize,
    /// Screen rows available for text
    pub rows: usize,
    /// Full text of the visible lines, `lines[0]` is `first_line`
    pub lines: Vec<String>,
    pub line_count: usize,
    pub cursor: Position,
    /// Cursor cell relative to the text area, `None` if off screen
    pub cursor_screen: Option<(usize, usize)>,
    pub dirty: bool,
    pub status: Option<String>,
}

impl View {
    /// Buffer rows that are on screen and exist, `[first_line, first_line + lines.len())`
    pub fn visible_range(&self) -> Range<usize> {
        self.first_line..self.first_line + self.lines.len()
    }

    /// Text of screen row `row` after horizontal scrolling by `offset_col`
    /// cells. Control characters such as tabs show as a single space, and a
    /// wide char cut by the left edge shows as blanks, so every cell lines up
    /// with the cursor.
    pub fn visible_text(&self, row: usize) -> Option<String> {
        let line = self.lines.get(row)?;
        let mut text = String::new();
        let mut cell = 0;
        for c in line.chars() {
            let start = cell;
            cell += char_width(c);
            if cell <= self.offset_col {
                continue;
            }
            if start < self.offset_col {
                text.extend(std::iter::repeat(' ').take(cell - self.offset_col));
            } else if c.is_control() {
                text.push(' ');
            } else {
                text.push(c);
            }
        }
        Some(text)
    }

    pub fn title(&self) -> String {
        let modified = if self.dirty { " [+]" } else { "" };
        format!("{}{}", self.target.display(), modified)
    }
}

use std::ops::Range;

/// Window of the buffer that is currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub offset_line: usize,
    /// Left-most visible screen cell; wide chars take two
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_line: 0,
            offset_col: 0,
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows.max(1);
        self.cols = cols.max(1);
    }

    /// Scroll just enough to bring the cursor on screen. `cursor_col` is a
    /// screen cell, not a char index.
    /// Returns true if either offset changed.
    pub fn scroll_to_cursor(&mut self, cursor_line: usize, cursor_col: usize) -> bool {
        let before = (self.offset_line, self.offset_col);

        if cursor_line < self.offset_line {
            self.offset_line = cursor_line;
        } else if cursor_line >= self.offset_line + self.rows {
            self.offset_line = cursor_line + 1 - self.rows;
        }

        if cursor_col < self.offset_col {
            self.offset_col = cursor_col;
        } else if cursor_col >= self.offset_col + self.cols {
            self.offset_col = cursor_col + 1 - self.cols;
        }

        before != (self.offset_line, self.offset_col)
    }

    /// Keep the top row inside a buffer of `line_count` lines
    pub fn clamp_to(&mut self, line_count: usize) -> bool {
        let max_line = line_count.saturating_sub(1);
        if self.offset_line > max_line {
            self.offset_line = max_line;
            true
        } else {
            false
        }
    }

    /// Buffer rows shown on screen, `[offset_line, offset_line + rows)`
    pub fn visible_lines(&self) -> Range<usize> {
        self.offset_line..self.offset_line + self.rows
    }

    /// Screen cell of a buffer position, if it is inside the window
    pub fn to_screen(&self, line: usize, col: usize) -> Option<(usize, usize)> {
        let row = line.checked_sub(self.offset_line)?;
        let column = col.checked_sub(self.offset_col)?;
        (row < self.rows && column < self.cols).then_some((row, column))
    }
}

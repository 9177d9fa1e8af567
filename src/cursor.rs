// src/cursor.rs - Cursor navigation over a line buffer

use crate::buffer::Buffer;
use crate::position::Position;

/// Navigation commands understood by [`Cursor::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self { line: 0, col: 0 }
    }

    pub fn at(pos: Position) -> Self {
        Self {
            line: pos.line,
            col: pos.col,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }

    pub fn set(&mut self, pos: Position, buffer: &Buffer) {
        self.line = pos.line;
        self.col = pos.col;
        self.clamp(buffer);
    }

    /// Pull the cursor back inside the buffer. Returns true if it moved.
    pub fn clamp(&mut self, buffer: &Buffer) -> bool {
        let before = *self;
        let last_line = buffer.line_count().saturating_sub(1);
        self.line = self.line.min(last_line);
        self.col = self.col.min(buffer.line_len(self.line));
        before != *self
    }

    /// Apply a motion. Moves that would leave the buffer are no-ops.
    /// Returns true if the cursor moved.
    pub fn apply(&mut self, motion: Motion, buffer: &Buffer) -> bool {
        let before = *self;
        match motion {
            Motion::Left => self.move_left(buffer),
            Motion::Right => self.move_right(buffer),
            Motion::Up => self.move_up(buffer),
            Motion::Down => self.move_down(buffer),
            Motion::Home => self.col = 0,
            Motion::End => self.col = buffer.line_len(self.line),
        }
        before != *self
    }

    fn move_left(&mut self, buffer: &Buffer) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.line > 0 {
            self.line -= 1;
            self.col = buffer.line_len(self.line);
        }
    }

    fn move_right(&mut self, buffer: &Buffer) {
        if self.col < buffer.line_len(self.line) {
            self.col += 1;
        } else if self.line + 1 < buffer.line_count() {
            self.line += 1;
            self.col = 0;
        }
    }

    fn move_up(&mut self, buffer: &Buffer) {
        if self.line > 0 {
            self.line -= 1;
            self.col = self.col.min(buffer.line_len(self.line));
        }
    }

    fn move_down(&mut self, buffer: &Buffer) {
        if self.line + 1 < buffer.line_count() {
            self.line += 1;
            self.col = self.col.min(buffer.line_len(self.line));
        }
    }
}

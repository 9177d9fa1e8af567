// src/position.rs - Buffer coordinates shared by the cursor, search and undo

/// A position in the buffer (line, column), both zero-based.
/// Columns count `char`s, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    pub fn zero() -> Self {
        Self { line: 0, col: 0 }
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, col): (usize, usize)) -> Self {
        Self { line, col }
    }
}

impl std::fmt::Display for Position {
    /// 1-based, the way the status bar shows it
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ln {}, Col {}", self.line + 1, self.col + 1)
    }
}

use std::path::PathBuf;

/// Logical edit commands fed to [`crate::editor::Editor::execute_command`]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveHome,
    MoveEnd,
    InsertChar(char),
    Backspace,
    Enter,
    Save,
    SaveAs(PathBuf),
    Search(String),
    SearchNext,
    Undo,
    Quit,
}

/// What a command changed, so the renderer can decide how much to repaint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Unchanged,
    /// Only the cursor (and the position shown in the status bar) moved
    CursorMoved,
    /// Only the status message changed
    StatusChanged,
    /// Visible text or scroll offsets changed
    ContentChanged,
    /// The session is over
    Quit,
}

impl Effect {
    pub fn needs_redraw(self) -> bool {
        !matches!(self, Effect::Unchanged | Effect::Quit)
    }

    /// The larger of two effects, for commands that do several things
    pub fn merge(self, other: Effect) -> Effect {
        if other.rank() > self.rank() { other } else { self }
    }

    fn rank(self) -> u8 {
        match self {
            Effect::Unchanged => 0,
            Effect::StatusChanged => 1,
            Effect::CursorMoved => 2,
            Effect::ContentChanged => 3,
            Effect::Quit => 4,
        }
    }
}

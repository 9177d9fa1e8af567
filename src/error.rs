// src/error.rs - Error taxonomy of the editing core

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditError {
    /// A cursor move or delete ran into the edge of the buffer
    #[error("At the edge of the buffer")]
    BoundaryNoOp,
    #[error("Not found: {query}")]
    NotFound { query: String },
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Nothing to undo")]
    UndoEmpty,
}

impl EditError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EditError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error should be shown to the user at all
    pub fn is_silent(&self) -> bool {
        matches!(self, EditError::BoundaryNoOp)
    }
}

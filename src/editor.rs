// src/editor.rs - Edit controller: applies one command at a time

use crate::buffer::Buffer;
use crate::command::{Command, Effect};
use crate::cursor::{Cursor, Motion};
use crate::error::EditError;
use crate::history::{DEFAULT_UNDO_CAPACITY, UndoHistory};
use crate::persistence::{self, LineEnding, LoadedFile};
use crate::position::Position;
use crate::save_log::{NullSaveLog, SaveLog, SaveRecord};
use crate::search;
use crate::view::View;
use crate::viewport::Viewport;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

pub const DEFAULT_TARGET: &str = "untitled.txt";

const QUIT_CONFIRM_MESSAGE: &str = "Unsaved changes - quit again to discard them";

/// Save state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Clean,
    Dirty,
    /// Quit was requested with unsaved changes; a second quit closes
    QuitConfirmPending,
    Closed,
}

impl SessionState {
    pub fn is_dirty(self) -> bool {
        matches!(self, SessionState::Dirty | SessionState::QuitConfirmPending)
    }
}

pub struct Editor {
    buffer: Buffer,
    cursor: Cursor,
    viewport: Viewport,
    history: UndoHistory,
    target: PathBuf,
    line_ending: LineEnding,
    state: SessionState,
    status_message: Option<String>,
    last_search: Option<String>,
    save_log: Box<dyn SaveLog>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Buffer::new(), DEFAULT_TARGET)
    }
}

impl Editor {
    pub fn new(buffer: Buffer, target: impl Into<PathBuf>) -> Self {
        Self {
            buffer,
            cursor: Cursor::new(),
            viewport: Viewport::new(20, 80),
            history: UndoHistory::with_capacity(DEFAULT_UNDO_CAPACITY),
            target: target.into(),
            line_ending: LineEnding::default(),
            state: SessionState::Clean,
            status_message: None,
            last_search: None,
            save_log: Box::new(NullSaveLog),
        }
    }

    /// Open `path`, or start an empty buffer for it if it does not exist yet
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EditError> {
        let path = path.as_ref();
        let LoadedFile {
            buffer,
            line_ending,
        } = persistence::load(path)?;
        info!("opened {} ({} lines)", path.display(), buffer.line_count());
        Ok(Self::new(buffer, path).with_line_ending(line_ending))
    }

    /// Terminator used when the buffer is written out
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn with_undo_capacity(mut self, capacity: usize) -> Self {
        self.history = UndoHistory::with_capacity(capacity);
        self
    }

    pub fn with_save_log(mut self, save_log: impl SaveLog + 'static) -> Self {
        self.save_log = Box::new(save_log);
        self
    }

    pub fn with_viewport_size(mut self, rows: usize, cols: usize) -> Self {
        self.resize(rows, cols);
        self
    }
}

impl Editor {
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Position {
        self.cursor.position()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn is_closed(&self) -> bool {
        self.state == SessionState::Closed
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Apply one command and report what changed
    pub fn execute_command(&mut self, cmd: Command) -> Effect {
        if self.state == SessionState::Closed {
            return Effect::Quit;
        }
        debug!("command {:?}", cmd);

        // Status messages last until the next command
        let mut effect = if self.status_message.take().is_some() {
            Effect::StatusChanged
        } else {
            Effect::Unchanged
        };

        if self.state == SessionState::QuitConfirmPending && cmd != Command::Quit {
            debug!("quit cancelled");
            self.state = SessionState::Dirty;
        }

        let applied = match cmd {
            Command::MoveLeft => self.move_cursor(Motion::Left),
            Command::MoveRight => self.move_cursor(Motion::Right),
            Command::MoveUp => self.move_cursor(Motion::Up),
            Command::MoveDown => self.move_cursor(Motion::Down),
            Command::MoveHome => self.move_cursor(Motion::Home),
            Command::MoveEnd => self.move_cursor(Motion::End),
            Command::InsertChar('\n') | Command::Enter => self.split_line(),
            Command::InsertChar(ch) => self.insert_char(ch),
            Command::Backspace => self.backspace(),
            Command::Save => {
                let result = self.save().map(Path::to_path_buf);
                self.report_save(result)
            }
            Command::SaveAs(path) => {
                let result = self.save_as(path).map(Path::to_path_buf);
                self.report_save(result)
            }
            Command::Search(query) => {
                let result = self.search(&query);
                self.report_search(result)
            }
            Command::SearchNext => match self.last_search.clone() {
                Some(query) => {
                    let result = self.search(&query);
                    self.report_search(result)
                }
                None => self.set_status("No previous search"),
            },
            Command::Undo => match self.undo() {
                Ok(()) => Effect::ContentChanged,
                Err(err) => self.report_error(err),
            },
            Command::Quit => self.quit(),
        };

        effect = effect.merge(applied);
        effect
    }

    pub fn resize(&mut self, rows: usize, cols: usize) -> Effect {
        self.viewport.resize(rows, cols);
        self.viewport.clamp_to(self.buffer.line_count());
        self.viewport
            .scroll_to_cursor(self.cursor.line, self.cursor_cell());
        Effect::ContentChanged
    }

    /// Write the buffer to the current target.
    ///
    /// On success the session becomes clean and the save is recorded in the
    /// save log; a failing save log is only logged. On failure nothing in
    /// the session changes.
    pub fn save(&mut self) -> Result<&Path, EditError> {
        persistence::save(&self.buffer, self.line_ending, &self.target)?;
        if self.state != SessionState::Closed {
            self.state = SessionState::Clean;
        }
        if let Err(err) = self.save_log.record(&SaveRecord::now(&self.target)) {
            warn!("could not record save of {}: {}", self.target.display(), err);
        }
        Ok(&self.target)
    }

    /// Make `path` the target, then save to it
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> Result<&Path, EditError> {
        self.target = path.into();
        self.save()
    }

    /// Restore the buffer as it was before the most recent edit
    pub fn undo(&mut self) -> Result<(), EditError> {
        let snapshot = self.history.pop().ok_or(EditError::UndoEmpty)?;
        self.buffer = snapshot.buffer;
        self.cursor.set(snapshot.cursor, &self.buffer);
        // The restored text is not known to match the file on disk
        self.mark_dirty();
        self.scroll();
        Ok(())
    }

    /// Move the cursor to the next occurrence of `query` after it
    pub fn search(&mut self, query: &str) -> Result<Position, EditError> {
        if !query.is_empty() {
            self.last_search = Some(query.to_string());
        }
        let found = search::find(&self.buffer, query, self.cursor.position()).ok_or_else(|| {
            EditError::NotFound {
                query: query.to_string(),
            }
        })?;
        self.cursor.set(found, &self.buffer);
        Ok(found)
    }

    pub fn view(&self) -> View {
        let range = self.viewport.visible_lines();
        let end = range.end.min(self.buffer.line_count());
        let lines = (range.start..end)
            .filter_map(|idx| self.buffer.line(idx))
            .collect();
        View {
            target: self.target.clone(),
            first_line: range.start,
            offset_col: self.viewport.offset_col,
            rows: self.viewport.rows,
            lines,
            line_count: self.buffer.line_count(),
            cursor: self.cursor.position(),
            cursor_screen: self.viewport.to_screen(self.cursor.line, self.cursor_cell()),
            dirty: self.is_dirty(),
            status: self.status_message.clone(),
        }
    }

    fn move_cursor(&mut self, motion: Motion) -> Effect {
        let moved = self.cursor.apply(motion, &self.buffer);
        if self.scroll() {
            Effect::ContentChanged
        } else if moved {
            Effect::CursorMoved
        } else {
            Effect::Unchanged
        }
    }

    fn insert_char(&mut self, ch: char) -> Effect {
        if ch.is_control() && ch != '\t' {
            debug!("ignoring control character {:?}", ch);
            return Effect::Unchanged;
        }
        self.edit(|buffer, at| {
            buffer
                .insert_char(at.line, at.col, ch)
                .ok()
                .map(|()| Position::new(at.line, at.col + 1))
        })
    }

    fn backspace(&mut self) -> Effect {
        self.edit(|buffer, at| buffer.delete_backward(at.line, at.col))
    }

    fn split_line(&mut self) -> Effect {
        self.edit(|buffer, at| buffer.split_line(at.line, at.col).ok())
    }

    /// Run one destructive edit. `apply` returns the new cursor position, or
    /// `None` if it left the buffer untouched; only real edits take an undo
    /// snapshot and dirty the session.
    fn edit<F>(&mut self, apply: F) -> Effect
    where
        F: FnOnce(&mut Buffer, Position) -> Option<Position>,
    {
        let at = self.cursor.position();
        let before = self.buffer.clone();
        match apply(&mut self.buffer, at) {
            Some(after) => {
                self.history.push_snapshot(&before, at);
                self.cursor.set(after, &self.buffer);
                self.mark_dirty();
                self.scroll();
                Effect::ContentChanged
            }
            None => {
                debug!("{}", EditError::BoundaryNoOp);
                Effect::Unchanged
            }
        }
    }

    fn quit(&mut self) -> Effect {
        match self.state {
            SessionState::Clean | SessionState::QuitConfirmPending | SessionState::Closed => {
                info!("closing {}", self.target.display());
                self.state = SessionState::Closed;
                Effect::Quit
            }
            SessionState::Dirty => {
                self.state = SessionState::QuitConfirmPending;
                self.set_status(QUIT_CONFIRM_MESSAGE)
            }
        }
    }

    fn mark_dirty(&mut self) {
        if self.state == SessionState::Clean {
            self.state = SessionState::Dirty;
        }
    }

    /// Keep viewport and cursor in sync with the buffer. True if it scrolled.
    fn scroll(&mut self) -> bool {
        let clamped = self.viewport.clamp_to(self.buffer.line_count());
        let scrolled = self
            .viewport
            .scroll_to_cursor(self.cursor.line, self.cursor_cell());
        clamped || scrolled
    }

    /// Screen column of the cursor within its line
    fn cursor_cell(&self) -> usize {
        self.buffer.display_col(self.cursor.line, self.cursor.col)
    }

    fn set_status(&mut self, message: impl Into<String>) -> Effect {
        self.status_message = Some(message.into());
        Effect::StatusChanged
    }

    fn report_save(&mut self, result: Result<PathBuf, EditError>) -> Effect {
        match result {
            Ok(path) => self.set_status(format!("Saved {}", path.display())),
            Err(err) => {
                warn!("save failed: {}", err);
                self.set_status(format!("Save failed: {}", err))
            }
        }
    }

    fn report_search(&mut self, result: Result<Position, EditError>) -> Effect {
        match result {
            Ok(_) => {
                if self.scroll() {
                    Effect::ContentChanged
                } else {
                    Effect::CursorMoved
                }
            }
            Err(err) => self.report_error(err),
        }
    }

    fn report_error(&mut self, err: EditError) -> Effect {
        if err.is_silent() {
            Effect::Unchanged
        } else {
            self.set_status(err.to_string())
        }
    }
}

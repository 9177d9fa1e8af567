// src/input.rs - Translates terminal key events into editor commands

use crate::command::Command;
use crate::mode::{Mode, PromptKind};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::path::PathBuf;

/// Result of feeding one key to the driver
#[derive(Debug, Clone, PartialEq)]
pub enum KeyResult {
    /// Complete command ready to execute
    Command(Command),
    /// Key consumed by the driver itself (prompt typing); redraw needed
    Pending,
    /// Key has no binding
    Ignored,
}

/// Key bindings:
///
/// | Key | Action |
/// |---|---|
/// | arrows, Home, End | move |
/// | printable chars, Tab | insert |
/// | Enter / Backspace | split line / delete backward |
/// | Ctrl-S | save |
/// | Ctrl-O | save as (prompts for a path) |
/// | Ctrl-F | search (prompts for a query) |
/// | Ctrl-N | repeat last search |
/// | Ctrl-U | undo |
/// | Ctrl-Q | quit |
#[derive(Debug, Clone, Default)]
pub struct KeyDriver {
    mode: Mode,
    input: String,
}

impl KeyDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Prompt label plus what has been typed so far, while a prompt is open
    pub fn prompt_line(&self) -> Option<String> {
        match self.mode {
            Mode::Prompt(kind) => Some(format!("{}{}", kind.label(), self.input)),
            Mode::Edit => None,
        }
    }

    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        if key.kind == KeyEventKind::Release {
            return KeyResult::Ignored;
        }
        match self.mode {
            Mode::Edit => self.edit_key(key),
            Mode::Prompt(kind) => self.prompt_key(kind, key),
        }
    }

    fn edit_key(&mut self, key: KeyEvent) -> KeyResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => KeyResult::Command(Command::Save),
                KeyCode::Char('o') => self.open_prompt(PromptKind::SaveAs),
                KeyCode::Char('f') => self.open_prompt(PromptKind::Search),
                KeyCode::Char('n') => KeyResult::Command(Command::SearchNext),
                KeyCode::Char('u') => KeyResult::Command(Command::Undo),
                KeyCode::Char('q') => KeyResult::Command(Command::Quit),
                _ => KeyResult::Ignored,
            };
        }

        let command = match key.code {
            KeyCode::Left => Command::MoveLeft,
            KeyCode::Right => Command::MoveRight,
            KeyCode::Up => Command::MoveUp,
            KeyCode::Down => Command::MoveDown,
            KeyCode::Home => Command::MoveHome,
            KeyCode::End => Command::MoveEnd,
            KeyCode::Enter => Command::Enter,
            KeyCode::Backspace => Command::Backspace,
            KeyCode::Tab => Command::InsertChar('\t'),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                Command::InsertChar(c)
            }
            _ => return KeyResult::Ignored,
        };
        KeyResult::Command(command)
    }

    fn open_prompt(&mut self, kind: PromptKind) -> KeyResult {
        self.mode = Mode::Prompt(kind);
        self.input.clear();
        KeyResult::Pending
    }

    fn close_prompt(&mut self) -> String {
        self.mode = Mode::Edit;
        std::mem::take(&mut self.input)
    }

    fn prompt_key(&mut self, kind: PromptKind, key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Esc => {
                self.close_prompt();
                KeyResult::Pending
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.close_prompt();
                KeyResult::Pending
            }
            KeyCode::Enter => {
                let text = self.close_prompt();
                if text.is_empty() {
                    return KeyResult::Pending;
                }
                let command = match kind {
                    PromptKind::SaveAs => Command::SaveAs(PathBuf::from(text)),
                    PromptKind::Search => Command::Search(text),
                };
                KeyResult::Command(command)
            }
            KeyCode::Backspace => {
                self.input.pop();
                KeyResult::Pending
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.push(c);
                KeyResult::Pending
            }
            _ => KeyResult::Ignored,
        }
    }
}

// ui/renderer.rs - Ratatui-based renderer for the editor view

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io::{self, Stdout};
use unicode_width::UnicodeWidthStr;

use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::gutter::{GUTTER_WIDTH, Gutter};
use crate::ui::widgets::status_bar::StatusBar;
use crate::view::View;

/// Ratatui-based renderer. Only reads the [`View`] it is given.
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    line_numbers: bool,
}

impl TuiRenderer {
    pub fn new(line_numbers: bool) -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            line_numbers,
        })
    }

    /// Rows and columns left for text in a terminal of the given size
    pub fn text_area_size(&self, width: u16, height: u16) -> (usize, usize) {
        text_area_size(width, height, self.line_numbers)
    }

    pub fn draw(&mut self, view: &View, prompt: Option<&str>) -> io::Result<()> {
        let line_numbers = self.line_numbers;
        self.terminal.draw(|f| {
            let size = f.size();
            let (text_area, gutter_area, status_area) = split_screen(size, line_numbers);

            if let Some(gutter_area) = gutter_area {
                f.render_widget(Gutter::new(view), gutter_area);
            }
            f.render_widget(EditorPane::new(view), text_area);
            f.render_widget(StatusBar::new(view, prompt), status_area);

            match prompt {
                Some(prompt) => {
                    let col = (prompt.width() as u16).min(status_area.width.saturating_sub(1));
                    f.set_cursor(status_area.x + col, status_area.y);
                }
                None => {
                    if let Some((row, col)) = view.cursor_screen {
                        let (row, col) = (row as u16, col as u16);
                        if row < text_area.height && col < text_area.width {
                            f.set_cursor(text_area.x + col, text_area.y + row);
                        }
                    }
                }
            }
        })?;
        Ok(())
    }
}

/// Text area, optional gutter and status line of a screen
fn split_screen(size: Rect, line_numbers: bool) -> (Rect, Option<Rect>, Rect) {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Editor area
            Constraint::Length(1), // Status bar (1 line)
        ])
        .split(size);

    if line_numbers {
        let editor_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GUTTER_WIDTH), Constraint::Min(1)])
            .split(vertical_chunks[0]);
        (editor_chunks[1], Some(editor_chunks[0]), vertical_chunks[1])
    } else {
        (vertical_chunks[0], None, vertical_chunks[1])
    }
}

pub fn text_area_size(width: u16, height: u16, line_numbers: bool) -> (usize, usize) {
    let rows = height.saturating_sub(1).max(1) as usize;
    let gutter = if line_numbers { GUTTER_WIDTH } else { 0 };
    let cols = width.saturating_sub(gutter).max(1) as usize;
    (rows, cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_area_size() {
        assert_eq!(text_area_size(80, 24, false), (23, 80));
        assert_eq!(text_area_size(80, 24, true), (23, 72));
        assert_eq!(text_area_size(4, 1, true), (1, 1));
    }

    #[test]
    fn test_split_screen_matches_text_area_size() {
        let size = Rect::new(0, 0, 80, 24);
        let (text, gutter, status) = split_screen(size, true);
        assert_eq!((text.height as usize, text.width as usize), text_area_size(80, 24, true));
        assert_eq!(gutter.unwrap().width, GUTTER_WIDTH);
        assert_eq!(status, Rect::new(0, 23, 80, 1));

        let (text, gutter, _) = split_screen(size, false);
        assert!(gutter.is_none());
        assert_eq!(text, Rect::new(0, 0, 80, 23));
    }
}

// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::Widget,
};

use crate::view::View;

/// Bottom line: file, cursor position and the latest message, or the open
/// prompt while one is active
pub struct StatusBar<'a> {
    pub view: &'a View,
    pub prompt: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(view: &'a View, prompt: Option<&'a str>) -> Self {
        Self { view, prompt }
    }

    pub fn text(&self) -> String {
        if let Some(prompt) = self.prompt {
            return prompt.to_string();
        }
        let base = format!(" {} | {}", self.view.title(), self.view.cursor);
        match &self.view.status {
            Some(msg) => format!("{} | {}", base, msg),
            None => format!("{} | ^S save  ^O save as  ^F find  ^U undo  ^Q quit", base),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.text();

        // Pad the status text to fill the entire width
        let width = area.width as usize;
        let len = status.chars().count();
        let padded_status = if len < width {
            format!("{}{}", status, " ".repeat(width - len))
        } else {
            status
        };

        let line_widget =
            Line::from(padded_status).style(Style::default().add_modifier(Modifier::REVERSED));
        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}

// ui/widgets/editor_pane.rs - Editor pane widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::view::View;

/// Text area showing the visible window of the buffer
pub struct EditorPane<'a> {
    pub view: &'a View,
}

impl<'a> EditorPane<'a> {
    pub fn new(view: &'a View) -> Self {
        Self { view }
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear first so shorter lines do not leave stale characters behind
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf.get_mut(x, y).set_char(' ').set_style(Style::default());
            }
        }

        for row in 0..area.height as usize {
            if let Some(text) = self.view.visible_text(row) {
                buf.set_stringn(
                    area.x,
                    area.y + row as u16,
                    text,
                    area.width as usize,
                    Style::default(),
                );
            }
        }
    }
}

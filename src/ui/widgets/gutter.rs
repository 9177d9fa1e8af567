// ui/widgets/gutter.rs - Line number gutter

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::view::View;

/// `{:6}` number plus two spaces of padding
pub const GUTTER_WIDTH: u16 = 8;

/// Gutter widget that shows 1-based line numbers
pub struct Gutter<'a> {
    pub view: &'a View,
}

impl<'a> Gutter<'a> {
    pub fn new(view: &'a View) -> Self {
        Self { view }
    }
}

impl Widget for Gutter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().add_modifier(Modifier::DIM);
        let visible = self.view.visible_range();
        for i in 0..area.height as usize {
            let line_idx = self.view.first_line + i;
            let text = if visible.contains(&line_idx) {
                format!("{:>6}  ", line_idx + 1)
            } else {
                " ".repeat(GUTTER_WIDTH as usize)
            };
            buf.set_stringn(area.x, area.y + i as u16, text, area.width as usize, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use std::path::PathBuf;

    #[test]
    fn test_numbers_follow_first_line() {
        let view = View {
            target: PathBuf::from("t.txt"),
            first_line: 9,
            offset_col: 0,
            rows: 3,
            lines: vec!["a".to_string(), "b".to_string()],
            line_count: 11,
            cursor: Position::new(9, 0),
            cursor_screen: Some((0, 0)),
            dirty: false,
            status: None,
        };
        let area = Rect::new(0, 0, GUTTER_WIDTH, 3);
        let mut buf = Buffer::empty(area);
        Gutter::new(&view).render(area, &mut buf);

        let row = |y: u16| -> String {
            (0..GUTTER_WIDTH)
                .map(|x| buf.get(x, y).symbol().to_string())
                .collect()
        };
        assert_eq!(row(0), "    10  ");
        assert_eq!(row(1), "    11  ");
        assert_eq!(row(2), "        ");
    }
}

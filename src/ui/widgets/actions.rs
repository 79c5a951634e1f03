//! Actions widget - displays keyboard shortcuts bar

use crate::ui::theme::{STYLE_ACTION, STYLE_DIM, STYLE_KEY};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PRIMARY: [(&str, &str); 6] = [
    ("N", "New call"),
    ("B", "Base URL"),
    ("1/2/3", "Filter"),
    ("↵", "Expand"),
    ("Tab", "UI/Raw"),
    ("Q", "Quit"),
];

const SECONDARY: [(&str, &str); 5] = [
    ("Z", "Collapse all"),
    ("C", "Copy"),
    ("D", "Delete"),
    ("⌫", "Clear view"),
    ("⇧R", "Reset"),
];

pub struct ActionsWidget;

fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (key, action) in hints {
        spans.push(Span::styled(*key, STYLE_KEY));
        spans.push(Span::styled(format!(" {}  ", action), STYLE_ACTION));
    }
    Line::from(spans)
}

impl Widget for ActionsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(STYLE_DIM);

        let paragraph =
            Paragraph::new(vec![hint_line(&PRIMARY), hint_line(&SECONDARY)]).block(block);
        paragraph.render(area, buf);
    }
}

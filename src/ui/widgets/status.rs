//! Status widget - base URL, history counters and in-flight calls

use crate::app::AppState;
use crate::ui::theme::*;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct StatusWidget<'a> {
    state: &'a AppState<'a>,
}

impl<'a> StatusWidget<'a> {
    pub fn new(state: &'a AppState<'a>) -> Self {
        Self { state }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (busy_symbol, busy_color, busy_text) = if self.state.in_flight > 0 {
            (
                SYMBOL_BUSY,
                COLOR_WARNING,
                format!("{} in flight", self.state.in_flight),
            )
        } else {
            (SYMBOL_IDLE, COLOR_MUTED, "Idle".to_string())
        };

        let history_info = format!(
            "{}/{} shown   {}/{} saved",
            self.state.counts.visible,
            self.state.counts.total,
            self.state.persisted,
            self.state.max_entries
        );

        let mut calls_line = vec![
            Span::styled("  Calls      ", STYLE_LABEL),
            Span::styled(format!("{} ", busy_symbol), Style::new().fg(busy_color)),
            Span::styled(busy_text, STYLE_VALUE),
        ];
        if let Some(message) = self.state.status_message {
            calls_line.push(Span::styled(format!("   {}", message), STYLE_BRIGHT));
        }

        let lines = vec![
            Line::from(vec![
                Span::styled("  Base URL   ", STYLE_LABEL),
                Span::styled(self.state.base_url_display().to_string(), STYLE_VALUE),
            ]),
            Line::from(vec![
                Span::styled("  History    ", STYLE_LABEL),
                Span::styled(history_info, STYLE_VALUE),
            ]),
            Line::from(calls_line),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(STYLE_BORDER)
            .title(Span::styled(" CALL INSPECTOR ", style_title()));

        let paragraph = Paragraph::new(lines).block(block);
        paragraph.render(area, buf);
    }
}

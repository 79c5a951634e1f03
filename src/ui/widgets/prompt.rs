//! Prompt popup widget
//!
//! Centered modal for the request line, the base URL, and the reset
//! confirmation.

use crate::app::{Prompt, PromptKind};
use crate::ui::theme::{style_title, COLOR_ERROR, STYLE_BORDER, STYLE_BRIGHT, STYLE_MUTED};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct PromptPopup<'a> {
    prompt: &'a Prompt,
}

impl<'a> PromptPopup<'a> {
    pub fn new(prompt: &'a Prompt) -> Self {
        Self { prompt }
    }

    /// Calculate centered popup area
    fn popup_area(area: Rect) -> Rect {
        let width = 72.min(area.width.saturating_sub(4));
        let height = 7.min(area.height.saturating_sub(2));
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for PromptPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::popup_area(area);

        // Clear background
        Clear.render(popup_area, buf);

        let mut lines = Vec::new();
        if self.prompt.kind != PromptKind::ConfirmReset {
            lines.push(Line::from(vec![
                Span::styled(" > ", STYLE_MUTED),
                Span::styled(self.prompt.input.clone(), STYLE_BRIGHT),
                Span::styled("█", STYLE_MUTED),
            ]));
        }
        lines.push(Line::from(Span::styled(
            format!(" {}", self.prompt.kind.hint()),
            STYLE_MUTED,
        )));
        if let Some(error) = &self.prompt.error {
            lines.push(Line::from(Span::styled(
                format!(" {}", error),
                Style::new().fg(COLOR_ERROR),
            )));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(STYLE_BORDER)
            .title(Span::styled(self.prompt.kind.title(), style_title()));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(popup_area, buf);
    }
}

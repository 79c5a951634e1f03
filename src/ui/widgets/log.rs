//! Entry list widget - mounted calls with responsive filter sidebar
//!
//! Wide mode (>80 cols): entries on left, filter sidebar on right
//! Narrow mode (<=80 cols): filter bar above entries

use super::fragment::{fragment_lines, raw_lines};
use crate::console::{BodyTab, ConsoleView, MountedEntry};
use crate::constants::{SIDEBAR_WIDTH, WIDE_THRESHOLD};
use crate::history::FilterMode;
use crate::ui::theme::{
    kind_color, style_bold, COLOR_BRIGHT, STYLE_BORDER, STYLE_BRIGHT, STYLE_DIM, STYLE_KEY,
    STYLE_LABEL, STYLE_MUTED, STYLE_SELECTED, STYLE_TEXT, SYMBOL_COLLAPSED, SYMBOL_EXPANDED,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget,
        Widget,
    },
};

const FILTERS: [(&str, &str, FilterMode); 3] = [
    ("1", "All", FilterMode::All),
    ("2", "Success", FilterMode::Success),
    ("3", "Error", FilterMode::Error),
];

pub struct LogWidget<'a> {
    view: &'a ConsoleView,
}

impl<'a> LogWidget<'a> {
    pub fn new(view: &'a ConsoleView) -> Self {
        Self { view }
    }

    fn is_wide(&self, width: u16) -> bool {
        width > WIDE_THRESHOLD
    }
}

impl Widget for LogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.is_wide(area.width) {
            self.render_wide(area, buf);
        } else {
            self.render_narrow(area, buf);
        }
    }
}

impl LogWidget<'_> {
    /// Render wide layout: entries on left, filter sidebar on right
    fn render_wide(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([Constraint::Min(40), Constraint::Length(SIDEBAR_WIDTH)])
            .split(area);

        self.render_entries(chunks[0], buf);
        self.render_sidebar(chunks[1], buf);
    }

    /// Render narrow layout: filter bar on top, entries below
    fn render_narrow(&self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(3)]).split(area);

        self.render_filter_bar(chunks[0], buf);
        self.render_entries(chunks[1], buf);
    }

    /// Render the filter bar (narrow mode)
    fn render_filter_bar(&self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::styled(" Filter: ", STYLE_LABEL)];
        for (key, label, mode) in FILTERS {
            spans.push(filter_button(key, label, self.view.filter() == mode));
            spans.push(Span::raw("  "));
        }
        Paragraph::new(Line::from(spans))
            .style(STYLE_DIM)
            .render(area, buf);
    }

    /// Render the filter sidebar (wide mode)
    fn render_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(STYLE_DIM)
            .title(Span::styled(" Filter ", STYLE_LABEL));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = FILTERS
            .iter()
            .map(|(key, label, mode)| sidebar_item(key, label, self.view.filter() == *mode))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    /// Render the entry list
    fn render_entries(&self, area: Rect, buf: &mut Buffer) {
        let inner_height = area.height.saturating_sub(2) as usize;
        let inner_width = area.width.saturating_sub(3) as usize; // -2 for borders, -1 for scrollbar
        let counts = self.view.counts();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(STYLE_BORDER)
            .title(Span::styled(" Calls ", STYLE_LABEL))
            .title_bottom(Line::from(Span::styled(
                format!(" {}/{} shown ", counts.visible, counts.total),
                STYLE_MUTED,
            )));

        if counts.visible == 0 {
            let message = if counts.total == 0 {
                "  No calls recorded yet. Press N to send one."
            } else {
                "  No calls match this filter."
            };
            Paragraph::new(Line::from(Span::styled(message, STYLE_DIM)))
                .block(block)
                .render(area, buf);
            return;
        }

        // Flatten visible entries, remembering where the selection starts and ends
        let selected = self.view.selected_index();
        let mut lines: Vec<Line> = Vec::new();
        let mut selection = (0, 0);
        for (index, mounted) in self.view.visible().enumerate() {
            let start = lines.len();
            let mut header = header_line(mounted, inner_width);
            if index == selected {
                header = header.style(STYLE_SELECTED);
            }
            lines.push(header);
            if mounted.expanded {
                lines.extend(body_lines(mounted));
            }
            if index == selected {
                selection = (start, lines.len());
            }
        }

        let total_lines = lines.len();
        let scroll = scroll_offset(selection, inner_height);
        let visible: Vec<Line> = lines.into_iter().skip(scroll).take(inner_height).collect();

        Paragraph::new(visible).block(block).render(area, buf);

        if total_lines > inner_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"));

            let mut scrollbar_state = ScrollbarState::new(total_lines).position(scroll);

            let scrollbar_area = Rect {
                x: area.x + area.width - 1,
                y: area.y + 1,
                width: 1,
                height: area.height.saturating_sub(2),
            };

            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}

/// First line to draw so the selected entry is in view, body included when it fits
fn scroll_offset((start, end): (usize, usize), height: usize) -> usize {
    if end <= height {
        0
    } else if end - start <= height {
        end - height
    } else {
        start
    }
}

/// Create a filter button span
fn filter_button(key: &str, label: &str, active: bool) -> Span<'static> {
    if active {
        Span::styled(format!("[{}] {}", key, label), style_bold(COLOR_BRIGHT))
    } else {
        Span::styled(format!(" {}  {}", key, label), STYLE_MUTED)
    }
}

/// Create a sidebar filter item line
fn sidebar_item(key: &str, label: &str, active: bool) -> Line<'static> {
    if active {
        Line::from(vec![
            Span::styled(format!(" [{}] ", key), STYLE_BRIGHT),
            Span::styled(label.to_string(), style_bold(COLOR_BRIGHT)),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("  {}  ", key), STYLE_KEY),
            Span::styled(label.to_string(), STYLE_MUTED),
        ])
    }
}

/// `▾ 12:00:01.123  200  GET    /boards/5            board`
fn header_line(mounted: &MountedEntry, max_width: usize) -> Line<'static> {
    let entry = &mounted.entry;
    let symbol = if mounted.expanded {
        SYMBOL_EXPANDED
    } else {
        SYMBOL_COLLAPSED
    };
    let tag = entry.data_type.to_string();
    // symbol(2) + time(13) + status(6) + method(8) + tag
    let url_width = max_width.saturating_sub(29 + tag.len() + 1);

    Line::from(vec![
        Span::styled(format!(" {} ", symbol), STYLE_MUTED),
        Span::styled(format!("{} ", entry.time), STYLE_MUTED),
        Span::styled(
            format!("{:>4}  ", entry.status_text),
            style_bold(kind_color(entry.kind)),
        ),
        Span::styled(format!("{:<7} ", entry.method), STYLE_BRIGHT),
        Span::styled(pad_or_truncate(&entry.url, url_width), STYLE_TEXT),
        Span::styled(format!(" {}", tag), Style::new().fg(kind_color(entry.kind))),
    ])
}

fn body_lines(mounted: &MountedEntry) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if mounted.body.ui.is_some() {
        let (ui, raw) = match mounted.tab {
            BodyTab::Ui => (style_bold(COLOR_BRIGHT), STYLE_MUTED),
            BodyTab::Raw => (STYLE_MUTED, style_bold(COLOR_BRIGHT)),
        };
        lines.push(Line::from(vec![
            Span::raw("      "),
            Span::styled("UI", ui),
            Span::styled(" | ", STYLE_DIM),
            Span::styled("Raw", raw),
        ]));
    }
    match (&mounted.body.ui, mounted.tab) {
        (Some(fragment), BodyTab::Ui) => lines.extend(fragment_lines(fragment)),
        _ => lines.extend(raw_lines(&mounted.body.raw)),
    }
    lines
}

/// Pad or truncate a string to exactly the given width (in chars)
fn pad_or_truncate(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len <= width {
        format!("{:<width$}", s, width = width)
    } else if width > 3 {
        let cut: String = s.chars().take(width - 3).collect();
        format!("{}...", cut)
    } else {
        s.chars().take(width).collect()
    }
}

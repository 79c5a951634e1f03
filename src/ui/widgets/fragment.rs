//! Fragment to terminal lines
//!
//! Styling for view fragments and highlighted payloads. Pure functions, so
//! the entry list can measure bodies before drawing them.

use crate::render::{Piece, RawView, ViewFragment};
use crate::ui::theme::{
    style_bold, token_style, tone_color, COLOR_ACCENT, COLOR_BRIGHT, COLOR_ERROR, STYLE_DIM,
    STYLE_LABEL, STYLE_MUTED, STYLE_TEXT,
};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

const INDENT: &str = "      ";

/// Lines for a dedicated view
pub fn fragment_lines(fragment: &ViewFragment) -> Vec<Line<'static>> {
    match fragment {
        ViewFragment::Card { lines, .. } => lines.iter().map(|l| pieces_line(INDENT, l)).collect(),
        ViewFragment::Stats(stats) => {
            let width = stats.iter().map(|s| s.label.len()).max().unwrap_or(0);
            stats
                .iter()
                .map(|s| {
                    Line::from(vec![
                        Span::raw(INDENT),
                        Span::styled(format!("{:<width$}  ", s.label, width = width), STYLE_LABEL),
                        Span::styled(s.value.clone(), style_bold(COLOR_BRIGHT)),
                    ])
                })
                .collect()
        }
        ViewFragment::List { rows, .. } => rows
            .iter()
            .flat_map(|row| {
                row.iter().enumerate().map(|(i, line)| {
                    let prefix = if i == 0 { "      • " } else { "        " };
                    pieces_line(prefix, line)
                })
            })
            .collect(),
        ViewFragment::Empty => vec![Line::from(vec![
            Span::raw(INDENT),
            Span::styled(fragment.to_text(), STYLE_DIM),
        ])],
        ViewFragment::Error { title, message } => vec![
            Line::from(vec![
                Span::raw(INDENT),
                Span::styled(title.clone(), style_bold(COLOR_ERROR)),
            ]),
            Line::from(vec![
                Span::raw(INDENT),
                Span::styled(message.clone(), STYLE_TEXT),
            ]),
        ],
    }
}

fn pieces_line(prefix: &'static str, pieces: &[Piece]) -> Line<'static> {
    let mut spans = vec![Span::styled(prefix, STYLE_MUTED)];
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(piece_span(piece));
    }
    Line::from(spans)
}

fn piece_span(piece: &Piece) -> Span<'static> {
    let text = piece.text().into_owned();
    match piece {
        Piece::Avatar(_) => Span::styled(format!("({})", text), style_bold(COLOR_ACCENT)),
        Piece::Title(_) => Span::styled(text, style_bold(COLOR_BRIGHT)),
        Piece::Text(_) => Span::styled(text, STYLE_TEXT),
        Piece::Sub(_) | Piece::Arrow => Span::styled(text, STYLE_MUTED),
        Piece::Label(_) => Span::styled(format!("{}:", text), STYLE_LABEL),
        Piece::Chip { tone, .. } => {
            Span::styled(format!("[{}]", text), Style::new().fg(tone_color(*tone)))
        }
        Piece::Missing => Span::styled(text, STYLE_DIM),
    }
}

/// Lines for the raw payload, one per line of pretty JSON
pub fn raw_lines(raw: &RawView) -> Vec<Line<'static>> {
    match raw {
        RawView::Json(tokens) => {
            let mut lines = Vec::new();
            let mut current = vec![Span::raw(INDENT)];
            for token in tokens {
                let style = token_style(token.kind);
                let mut parts = token.text.split('\n');
                if let Some(first) = parts.next() {
                    if !first.is_empty() {
                        current.push(Span::styled(first.to_string(), style));
                    }
                }
                for part in parts {
                    lines.push(Line::from(std::mem::replace(
                        &mut current,
                        vec![Span::raw(INDENT)],
                    )));
                    if !part.is_empty() {
                        current.push(Span::styled(part.to_string(), style));
                    }
                }
            }
            lines.push(Line::from(current));
            lines
        }
        RawView::Text(_) | RawView::NoResponse => raw
            .to_text()
            .lines()
            .map(|l| {
                Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(l.to_string(), STYLE_MUTED),
                ])
            })
            .collect(),
    }
}

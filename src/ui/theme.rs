//! UI theme constants - Minimalist dark theme

use crate::history::EntryKind;
use crate::render::{TokenKind, Tone};
use ratatui::style::{Color, Modifier, Style};

// Base colors - muted grays
pub const COLOR_DIM: Color = Color::Rgb(80, 80, 80); // Very dim gray for borders, secondary
pub const COLOR_MUTED: Color = Color::Rgb(120, 120, 120); // Muted gray for labels
pub const COLOR_TEXT: Color = Color::Rgb(180, 180, 180); // Normal text
pub const COLOR_BRIGHT: Color = Color::Rgb(220, 220, 220); // Bright text for emphasis

// Accent colors - used sparingly
pub const COLOR_ACCENT: Color = Color::Rgb(100, 180, 220); // Cyan-ish for keys
pub const COLOR_SUCCESS: Color = Color::Rgb(100, 180, 100);
pub const COLOR_WARNING: Color = Color::Rgb(220, 180, 90);
pub const COLOR_ERROR: Color = Color::Rgb(220, 90, 90);
pub const COLOR_PURPLE: Color = Color::Rgb(170, 130, 220);

// Semantic aliases
pub const COLOR_BORDER: Color = COLOR_DIM;
pub const COLOR_TITLE: Color = COLOR_BRIGHT;
pub const COLOR_LABEL: Color = COLOR_MUTED;
pub const COLOR_VALUE: Color = COLOR_TEXT;

// Action bar
pub const COLOR_KEY: Color = COLOR_ACCENT;
pub const COLOR_ACTION: Color = COLOR_MUTED;

// Styles
pub const STYLE_DIM: Style = Style::new().fg(COLOR_DIM);
pub const STYLE_MUTED: Style = Style::new().fg(COLOR_MUTED);
pub const STYLE_TEXT: Style = Style::new().fg(COLOR_TEXT);
pub const STYLE_BRIGHT: Style = Style::new().fg(COLOR_BRIGHT);
pub const STYLE_BORDER: Style = Style::new().fg(COLOR_BORDER);
pub const STYLE_LABEL: Style = Style::new().fg(COLOR_LABEL);
pub const STYLE_VALUE: Style = Style::new().fg(COLOR_VALUE);
pub const STYLE_KEY: Style = Style::new().fg(COLOR_KEY);
pub const STYLE_ACTION: Style = Style::new().fg(COLOR_ACTION);
pub const STYLE_SELECTED: Style = Style::new().bg(Color::Rgb(40, 44, 52));

// Status symbols
pub const SYMBOL_EXPANDED: &str = "▾";
pub const SYMBOL_COLLAPSED: &str = "▸";
pub const SYMBOL_BUSY: &str = "◐";
pub const SYMBOL_IDLE: &str = "○";

pub fn style_bold(color: Color) -> Style {
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}

pub fn style_title() -> Style {
    style_bold(COLOR_TITLE)
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Gray => COLOR_MUTED,
        Tone::Blue => COLOR_ACCENT,
        Tone::Green => COLOR_SUCCESS,
        Tone::Red => COLOR_ERROR,
        Tone::Purple => COLOR_PURPLE,
    }
}

pub fn kind_color(kind: EntryKind) -> Color {
    match kind {
        EntryKind::Success => COLOR_SUCCESS,
        EntryKind::Error => COLOR_ERROR,
    }
}

pub fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Key => Style::new().fg(COLOR_ACCENT),
        TokenKind::Str => Style::new().fg(COLOR_SUCCESS),
        TokenKind::Bool => Style::new().fg(COLOR_PURPLE),
        TokenKind::Null => STYLE_DIM,
        TokenKind::Number => Style::new().fg(COLOR_WARNING),
        TokenKind::Plain => STYLE_TEXT,
    }
}

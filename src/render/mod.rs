//! Type-aware rendering
//!
//! Turns a classified payload into an immutable [`ViewFragment`]. Fragments
//! describe *what* to show (titles, chips, placeholders); the terminal layer
//! decides how it looks. `render` returns `None` when no dedicated view
//! exists and the caller should fall back to [`raw_view`].

mod cards;
pub mod highlight;
mod rows;

pub use highlight::{highlight, Token, TokenKind};

use crate::classify::{list_items, Entity, TypeTag};
use crate::constants::{DATE_LEN, EMPTY_LIST, NO_RESPONSE, NO_VALUE};
use crate::history::CallStatus;
use serde_json::{Map, Value};
use std::borrow::Cow;

// =============================================================================
// Fragment model
// =============================================================================

/// Chip color hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Gray,
    Blue,
    Green,
    Red,
    Purple,
}

/// Smallest unit of a fragment line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Two-letter initials badge
    Avatar(String),
    Title(String),
    Text(String),
    /// Secondary, dimmed text
    Sub(String),
    Label(String),
    Chip { text: String, tone: Tone },
    /// Sender → receiver separator
    Arrow,
    /// Field absent from the payload
    Missing,
}

impl Piece {
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Piece::Avatar(s) | Piece::Title(s) | Piece::Text(s) | Piece::Sub(s) | Piece::Label(s) => {
                Cow::Borrowed(s)
            }
            Piece::Chip { text, .. } => Cow::Borrowed(text),
            Piece::Arrow => Cow::Borrowed("→"),
            Piece::Missing => Cow::Borrowed(NO_VALUE),
        }
    }
}

pub type FragmentLine = Vec<Piece>;

/// One cell of the dashboard grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

/// Immutable description of a dedicated view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewFragment {
    /// Single entity card
    Card {
        entity: Entity,
        lines: Vec<FragmentLine>,
    },
    /// Aggregate stat grid
    Stats(Vec<Stat>),
    /// One row (possibly multi-line) per list element
    List {
        entity: Entity,
        rows: Vec<Vec<FragmentLine>>,
    },
    /// Explicit empty-list placeholder
    Empty,
    /// Failed call carrying a readable message
    Error { title: String, message: String },
}

impl ViewFragment {
    /// Plain-text rendition, used by headless output and tests
    pub fn to_text(&self) -> String {
        match self {
            ViewFragment::Card { lines, .. } => lines_text(lines),
            ViewFragment::Stats(stats) => stats
                .iter()
                .map(|s| format!("{}: {}", s.label, s.value))
                .collect::<Vec<_>>()
                .join("\n"),
            ViewFragment::List { rows, .. } => rows
                .iter()
                .map(|row| lines_text(row))
                .collect::<Vec<_>>()
                .join("\n"),
            ViewFragment::Empty => EMPTY_LIST.to_string(),
            ViewFragment::Error { title, message } => format!("{}\n{}", title, message),
        }
    }
}

fn lines_text(lines: &[FragmentLine]) -> String {
    lines
        .iter()
        .map(|line| {
            line.iter()
                .map(|p| p.text().into_owned())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// =============================================================================
// Dispatch
// =============================================================================

/// Build the dedicated view for a payload, or `None` for the raw fallback
pub fn render(
    tag: TypeTag,
    payload: Option<&Value>,
    is_success: bool,
    status: &CallStatus,
) -> Option<ViewFragment> {
    if !is_success {
        return error_card(payload, status);
    }

    let object = payload.and_then(Value::as_object);
    match tag {
        TypeTag::Entity(entity) => object.map(|o| ViewFragment::Card {
            entity,
            lines: cards::card(entity, o),
        }),
        TypeTag::Dashboard => object.map(|o| ViewFragment::Stats(cards::stats(o))),
        TypeTag::List(entity) => Some(match list_items(payload) {
            Some(items) if !items.is_empty() => ViewFragment::List {
                entity,
                rows: items.iter().map(|item| rows::row(entity, item)).collect(),
            },
            _ => ViewFragment::Empty,
        }),
        TypeTag::ListEmpty => Some(ViewFragment::Empty),
        TypeTag::ListRaw | TypeTag::Raw => None,
    }
}

fn error_card(payload: Option<&Value>, status: &CallStatus) -> Option<ViewFragment> {
    let object = payload?.as_object()?;
    let message = field(object, "message").or_else(|| field(object, "error"))?;
    let title = match status {
        CallStatus::Code(0) => "Error".to_string(),
        CallStatus::Code(code) => format!("HTTP {}", code),
        CallStatus::Sentinel(s) => format!("Network failure ({})", s),
    };
    Some(ViewFragment::Error { title, message })
}

// =============================================================================
// Raw view
// =============================================================================

/// Raw payload view, always available next to (or instead of) a fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawView {
    /// Highlighted pretty-printed JSON
    Json(Vec<Token>),
    /// Literal scalar payload
    Text(String),
    NoResponse,
}

impl RawView {
    pub fn to_text(&self) -> String {
        match self {
            RawView::Json(tokens) => tokens.iter().map(|t| t.text.as_str()).collect(),
            RawView::Text(s) => s.clone(),
            RawView::NoResponse => NO_RESPONSE.to_string(),
        }
    }
}

pub fn raw_view(payload: Option<&Value>) -> RawView {
    match payload {
        None | Some(Value::Null) => RawView::NoResponse,
        Some(Value::String(s)) => RawView::Text(s.clone()),
        Some(v @ (Value::Object(_) | Value::Array(_))) => match serde_json::to_string_pretty(v) {
            Ok(text) => RawView::Json(highlight(&text)),
            Err(_) => RawView::Text(v.to_string()),
        },
        Some(v) => RawView::Text(v.to_string()),
    }
}

// =============================================================================
// Field helpers
// =============================================================================

/// Displayable field value; missing, null and empty strings count as absent
pub(crate) fn field(object: &Map<String, Value>, key: &str) -> Option<String> {
    match object.get(key)? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// First present field among `keys`
pub(crate) fn first_field(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|k| field(object, k))
}

/// Date-like field cut to `YYYY-MM-DD`
pub(crate) fn date_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    field(object, key).map(|s| s.chars().take(DATE_LEN).collect())
}

pub(crate) fn or_missing(value: Option<String>, piece: impl FnOnce(String) -> Piece) -> Piece {
    value.map(piece).unwrap_or(Piece::Missing)
}

/// `#id` chip, or a placeholder when the id is absent
pub(crate) fn id_chip(object: &Map<String, Value>, tone: Tone) -> Piece {
    or_missing(field(object, "id"), |id| Piece::Chip {
        text: format!("#{}", id),
        tone,
    })
}

pub(crate) fn initials(object: &Map<String, Value>) -> Piece {
    let source = first_field(object, &["nickname", "name", "email"]).unwrap_or_else(|| "?".into());
    Piece::Avatar(source.chars().take(2).collect())
}

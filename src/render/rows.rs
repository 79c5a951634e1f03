//! Compact list rows

use super::cards::{author, status_chip};
use super::{date_field, field, id_chip, initials, or_missing, FragmentLine, Piece, Tone};
use crate::classify::Entity;
use serde_json::{Map, Value};

/// Row for one list element; non-object elements render as all-placeholder rows
pub(super) fn row(entity: Entity, item: &Value) -> Vec<FragmentLine> {
    let empty = Map::new();
    let o = item.as_object().unwrap_or(&empty);
    match entity {
        Entity::User => user(o),
        Entity::Board => board(o),
        Entity::Post => post(o),
        Entity::Comment => comment(o),
        Entity::Message => message(o),
    }
}

fn user(o: &Map<String, Value>) -> Vec<FragmentLine> {
    vec![vec![
        initials(o),
        or_missing(field(o, "nickname"), Piece::Title),
        or_missing(field(o, "email"), Piece::Sub),
        id_chip(o, Tone::Gray),
        status_chip(o),
    ]]
}

fn board(o: &Map<String, Value>) -> Vec<FragmentLine> {
    vec![vec![
        id_chip(o, Tone::Blue),
        or_missing(field(o, "name"), Piece::Title),
        or_missing(field(o, "description"), Piece::Sub),
        or_missing(field(o, "postCount"), |n| Piece::Chip {
            text: format!("{} posts", n),
            tone: Tone::Gray,
        }),
    ]]
}

fn post(o: &Map<String, Value>) -> Vec<FragmentLine> {
    vec![
        vec![id_chip(o, Tone::Gray), or_missing(field(o, "title"), Piece::Title)],
        vec![
            or_missing(author(o), Piece::Sub),
            or_missing(date_field(o, "createdAt"), Piece::Sub),
            or_missing(field(o, "commentCount"), |n| Piece::Sub(format!("{} comments", n))),
        ],
    ]
}

fn comment(o: &Map<String, Value>) -> Vec<FragmentLine> {
    vec![
        vec![
            id_chip(o, Tone::Gray),
            or_missing(author(o), Piece::Title),
            or_missing(date_field(o, "createdAt"), Piece::Sub),
        ],
        vec![or_missing(field(o, "content"), Piece::Text)],
    ]
}

fn message(o: &Map<String, Value>) -> Vec<FragmentLine> {
    vec![
        vec![
            id_chip(o, Tone::Gray),
            or_missing(field(o, "senderNickname"), Piece::Title),
            Piece::Arrow,
            or_missing(field(o, "receiverNickname"), Piece::Title),
            or_missing(date_field(o, "createdAt"), Piece::Sub),
        ],
        vec![or_missing(field(o, "content"), Piece::Sub)],
    ]
}

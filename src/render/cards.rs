//! Single-entity cards and the dashboard grid
//!
//! Every card has a fixed layout per entity: absent fields are rendered as
//! `Piece::Missing` so the number and position of pieces never changes.

use super::{date_field, field, first_field, id_chip, initials, or_missing, FragmentLine, Piece, Stat, Tone};
use crate::classify::Entity;
use crate::constants::NO_VALUE;
use serde_json::{Map, Value};

pub(super) fn card(entity: Entity, o: &Map<String, Value>) -> Vec<FragmentLine> {
    match entity {
        Entity::User => user(o),
        Entity::Board => board(o),
        Entity::Post => post(o),
        Entity::Comment => comment(o),
        Entity::Message => message(o),
    }
}

pub(super) fn role_chip(o: &Map<String, Value>) -> Piece {
    or_missing(field(o, "role"), |role| {
        let tone = if role == "ADMIN" { Tone::Purple } else { Tone::Blue };
        Piece::Chip { text: role, tone }
    })
}

pub(super) fn status_chip(o: &Map<String, Value>) -> Piece {
    or_missing(field(o, "status"), |status| {
        let tone = if status == "BANNED" { Tone::Red } else { Tone::Green };
        Piece::Chip { text: status, tone }
    })
}

pub(super) fn author(o: &Map<String, Value>) -> Option<String> {
    first_field(o, &["authorNickname", "author"])
}

fn user(o: &Map<String, Value>) -> Vec<FragmentLine> {
    vec![
        vec![
            initials(o),
            or_missing(first_field(o, &["nickname", "name"]), Piece::Title),
            role_chip(o),
            status_chip(o),
        ],
        vec![or_missing(field(o, "email"), Piece::Sub)],
        vec![
            Piece::Label("ID".into()),
            or_missing(field(o, "id"), Piece::Text),
            Piece::Label("Name".into()),
            or_missing(field(o, "name"), Piece::Text),
            Piece::Label("Joined".into()),
            or_missing(date_field(o, "createdAt"), Piece::Text),
        ],
    ]
}

fn board(o: &Map<String, Value>) -> Vec<FragmentLine> {
    vec![
        vec![or_missing(field(o, "name"), Piece::Title), id_chip(o, Tone::Gray)],
        vec![or_missing(field(o, "description"), Piece::Text)],
        vec![
            Piece::Label("Posts".into()),
            or_missing(field(o, "postCount"), |n| Piece::Chip {
                text: n,
                tone: Tone::Blue,
            }),
            Piece::Label("Managers".into()),
            or_missing(field(o, "managerCount"), Piece::Text),
            Piece::Label("Created".into()),
            or_missing(date_field(o, "createdAt"), Piece::Sub),
        ],
    ]
}

fn post(o: &Map<String, Value>) -> Vec<FragmentLine> {
    vec![
        vec![or_missing(field(o, "title"), Piece::Title), id_chip(o, Tone::Gray)],
        vec![or_missing(field(o, "content"), Piece::Text)],
        vec![
            Piece::Label("By".into()),
            or_missing(author(o), Piece::Text),
            Piece::Label("Board".into()),
            or_missing(field(o, "boardId"), |id| Piece::Text(format!("#{}", id))),
            Piece::Label("Created".into()),
            or_missing(date_field(o, "createdAt"), Piece::Sub),
            Piece::Label("Comments".into()),
            or_missing(field(o, "commentCount"), Piece::Text),
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
            or_missing(field(o, "senderNickname"), Piece::Title),
            Piece::Arrow,
            or_missing(field(o, "receiverNickname"), Piece::Title),
            or_missing(date_field(o, "createdAt"), Piece::Sub),
        ],
        vec![or_missing(field(o, "content"), Piece::Text)],
    ]
}

/// One stat cell per key, in payload order; nested values are JSON-encoded
pub(super) fn stats(o: &Map<String, Value>) -> Vec<Stat> {
    o.iter()
        .map(|(k, v)| Stat {
            label: k.clone(),
            value: match v {
                Value::String(s) => s.clone(),
                Value::Null => NO_VALUE.to_string(),
                other => other.to_string(),
            },
        })
        .collect()
}

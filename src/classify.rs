//! Shape classifier
//!
//! Maps a parsed response body plus the call's (normalized) URL to a
//! semantic [`TypeTag`]. Rules are evaluated in a fixed order and the first
//! match wins; field shape always beats the URL, which is only consulted for
//! lists whose first element carries no identifying fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Entity kinds the console knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    User,
    Post,
    Board,
    Comment,
    Message,
}

impl Entity {
    pub fn as_str(self) -> &'static str {
        match self {
            Entity::User => "user",
            Entity::Post => "post",
            Entity::Board => "board",
            Entity::Comment => "comment",
            Entity::Message => "message",
        }
    }
}

/// Semantic classification of a response payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TypeTag {
    /// Single entity object
    Entity(Entity),
    /// Non-empty list whose elements are (or are assumed to be) this entity
    List(Entity),
    /// Aggregate counters
    Dashboard,
    /// Empty list
    ListEmpty,
    /// Non-empty list of unrecognized elements
    ListRaw,
    /// Anything else
    Raw,
}

impl TypeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Entity(e) => e.as_str(),
            TypeTag::List(Entity::User) => "list-user",
            TypeTag::List(Entity::Post) => "list-post",
            TypeTag::List(Entity::Board) => "list-board",
            TypeTag::List(Entity::Comment) => "list-comment",
            TypeTag::List(Entity::Message) => "list-message",
            TypeTag::Dashboard => "dashboard",
            TypeTag::ListEmpty => "list-empty",
            TypeTag::ListRaw => "list-raw",
            TypeTag::Raw => "raw",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = std::convert::Infallible;

    /// Unknown tags parse as `Raw` so old or foreign history still loads.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entity = |name: &str| match name {
            "user" => Some(Entity::User),
            "post" => Some(Entity::Post),
            "board" => Some(Entity::Board),
            "comment" => Some(Entity::Comment),
            "message" => Some(Entity::Message),
            _ => None,
        };
        Ok(match s {
            "dashboard" => TypeTag::Dashboard,
            "list-empty" => TypeTag::ListEmpty,
            "list-raw" => TypeTag::ListRaw,
            other => match other.strip_prefix("list-") {
                Some(rest) => entity(rest).map(TypeTag::List).unwrap_or(TypeTag::Raw),
                None => entity(other).map(TypeTag::Entity).unwrap_or(TypeTag::Raw),
            },
        })
    }
}

impl From<String> for TypeTag {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(tag) => tag,
            Err(never) => match never {},
        }
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        tag.as_str().to_string()
    }
}

// =============================================================================
// Rules
// =============================================================================

/// Fields whose presence marks an aggregate overview
const AGGREGATE_FIELDS: &[&str] = &[
    "totalUsers",
    "totalBoards",
    "totalPosts",
    "totalUserCount",
    "todaySignupCount",
    "pendingReportCount",
    "pendingSupportCount",
];

/// Conventional field carrying a page of results
const PAGE_CONTENT_FIELD: &str = "content";

type ShapeCheck = fn(&Map<String, Value>) -> bool;

/// Entity shape rules, in precedence order
const ENTITY_RULES: &[(Entity, ShapeCheck)] = &[
    (Entity::User, is_user),
    (Entity::Post, is_post),
    (Entity::Board, is_board),
    (Entity::Comment, is_comment),
    (Entity::Message, is_message),
];

fn is_user(o: &Map<String, Value>) -> bool {
    has(o, "email") && has(o, "nickname")
}

fn is_post(o: &Map<String, Value>) -> bool {
    has(o, "title") && has(o, "content") && has(o, "boardId")
}

fn is_board(o: &Map<String, Value>) -> bool {
    has(o, "name") && (has(o, "description") || has(o, "postCount"))
}

fn is_comment(o: &Map<String, Value>) -> bool {
    has(o, "content") && has(o, "postId")
}

fn is_message(o: &Map<String, Value>) -> bool {
    (has(o, "senderNickname") || has(o, "receiverNickname")) && has(o, "content")
}

/// URL fallback for lists: (required fragment, forbidden fragment, entity)
const URL_RULES: &[(&str, Option<&str>, Entity)] = &[
    ("/users", None, Entity::User),
    ("/boards", Some("posts"), Entity::Board),
    ("/posts", Some("comments"), Entity::Post),
    ("/comments", None, Entity::Comment),
    ("/message", None, Entity::Message),
];

/// A field counts as present when it exists and is not `null`
fn has(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).is_some_and(|v| !v.is_null())
}

fn match_entity(object: &Map<String, Value>) -> Option<Entity> {
    ENTITY_RULES
        .iter()
        .find(|(_, check)| check(object))
        .map(|(entity, _)| *entity)
}

// =============================================================================
// Classification
// =============================================================================

/// Classify a response payload. Never fails; unknown shapes yield `Raw`.
pub fn classify(payload: Option<&Value>, url: &str) -> TypeTag {
    match payload {
        Some(Value::Object(object)) => classify_object(object, url),
        Some(Value::Array(items)) => classify_list(items, url),
        _ => TypeTag::Raw,
    }
}

fn classify_object(object: &Map<String, Value>, url: &str) -> TypeTag {
    if AGGREGATE_FIELDS.iter().any(|f| has(object, f)) {
        return TypeTag::Dashboard;
    }
    if let Some(entity) = match_entity(object) {
        return TypeTag::Entity(entity);
    }
    match object.get(PAGE_CONTENT_FIELD) {
        Some(Value::Array(items)) => classify_list(items, url),
        _ => TypeTag::Raw,
    }
}

/// Classify a list by its first element, falling back to the URL path
pub fn classify_list(items: &[Value], url: &str) -> TypeTag {
    let Some(first) = items.first() else {
        return TypeTag::ListEmpty;
    };
    let Value::Object(object) = first else {
        return TypeTag::ListRaw;
    };
    if let Some(entity) = match_entity(object) {
        return TypeTag::List(entity);
    }
    URL_RULES
        .iter()
        .find(|(needle, forbidden, _)| {
            url.contains(needle) && forbidden.map_or(true, |f| !url.contains(f))
        })
        .map(|(_, _, entity)| TypeTag::List(*entity))
        .unwrap_or(TypeTag::ListRaw)
}

/// Items a list-shaped payload carries: the array itself or its page content
pub fn list_items(payload: Option<&Value>) -> Option<&[Value]> {
    match payload? {
        Value::Array(items) => Some(items),
        Value::Object(object) => match object.get(PAGE_CONTENT_FIELD) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

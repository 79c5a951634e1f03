//! Log entry types
//!
//! One `LogEntry` records one settled API call. Entries are built once and
//! never mutated; the serialized form is what the durable store keeps.

use crate::classify::{classify, TypeTag};
use crate::constants::NETWORK_STATUS;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use tracing::debug;

/// Outcome class of a call (HTTP-level, not the payload shape)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Success,
    Error,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Success => "success",
            EntryKind::Error => "error",
        }
    }
}

/// HTTP status code, or a sentinel for calls that never got a response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallStatus {
    Code(u16),
    Sentinel(String),
}

impl CallStatus {
    /// Status recorded for transport failures
    pub fn network() -> Self {
        CallStatus::Sentinel(NETWORK_STATUS.to_string())
    }

    pub fn is_network(&self) -> bool {
        matches!(self, CallStatus::Sentinel(_))
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallStatus::Code(code) => write!(f, "{}", code),
            CallStatus::Sentinel(s) => f.write_str(s),
        }
    }
}

/// A completed call as reported by the interceptor
#[derive(Debug, Clone, PartialEq)]
pub struct SettledCall {
    /// Uppercase HTTP verb
    pub method: String,
    /// URL relative to the base URL
    pub url: String,
    pub status: CallStatus,
    pub is_success: bool,
    /// Parsed body; `None` when absent or not JSON
    pub data: Option<Value>,
}

/// Log entry for one observed call (serialized into the durable store)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub status_text: String,
    pub method: String,
    pub url: String,
    pub status: CallStatus,
    pub is_success: bool,
    pub data: Option<Value>,
    /// Frozen at creation so restored entries render exactly as they did live
    pub data_type: TypeTag,
    pub time: String, // HH:MM:SS.mmm
}

impl LogEntry {
    /// Current timestamp as HH:MM:SS.mmm
    #[inline]
    fn now() -> String {
        chrono::Local::now().format("%H:%M:%S%.3f").to_string()
    }

    /// Build the entry for a settled call, classifying its payload once
    pub fn from_settled(id: impl Into<String>, call: SettledCall) -> Self {
        let SettledCall {
            method,
            url,
            status,
            is_success,
            data,
        } = call;
        let data = data.filter(|v| !v.is_null());
        let data_type = classify(data.as_ref(), &url);
        debug!("Classified {} {} as {}", method, url, data_type);

        Self {
            id: id.into(),
            kind: if is_success {
                EntryKind::Success
            } else {
                EntryKind::Error
            },
            status_text: status_text(&status, is_success),
            method: method.to_uppercase(),
            url,
            status,
            is_success,
            data,
            data_type,
            time: Self::now(),
        }
    }

    /// One-line summary used by headless listings
    pub fn summary(&self) -> String {
        format!(
            "{} {:>4} {:<6} {} [{}] {}",
            self.time, self.status_text, self.method, self.url, self.data_type, self.id
        )
    }
}

/// Status code, sentinel, or OK/ERR when no meaningful status exists
fn status_text(status: &CallStatus, is_success: bool) -> String {
    let fallback = if is_success { "OK" } else { "ERR" };
    match status {
        CallStatus::Code(0) => fallback.to_string(),
        CallStatus::Code(code) => code.to_string(),
        CallStatus::Sentinel(s) if s.is_empty() => fallback.to_string(),
        CallStatus::Sentinel(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Entity;
    use serde_json::json;

    fn call(status: CallStatus, is_success: bool, data: Option<Value>) -> SettledCall {
        SettledCall {
            method: "get".into(),
            url: "/boards/5".into(),
            status,
            is_success,
            data,
        }
    }

    #[test]
    fn test_from_settled_fields() {
        let data = json!({"id": 5, "name": "General", "description": "desc", "postCount": 3});
        let entry = LogEntry::from_settled("e1", call(CallStatus::Code(200), true, Some(data)));
        assert_eq!(entry.kind, EntryKind::Success);
        assert_eq!(entry.status_text, "200");
        assert_eq!(entry.method, "GET");
        assert_eq!(entry.data_type, TypeTag::Entity(Entity::Board));
        assert_eq!(entry.time.len(), "12:34:56.789".len());
    }

    #[test]
    fn test_status_text_fallbacks() {
        let e = LogEntry::from_settled("a", call(CallStatus::Code(0), true, None));
        assert_eq!(e.status_text, "OK");
        let e = LogEntry::from_settled("b", call(CallStatus::Code(0), false, None));
        assert_eq!(e.status_text, "ERR");
        let e = LogEntry::from_settled("c", call(CallStatus::network(), false, None));
        assert_eq!(e.status_text, "NET");
        assert_eq!(e.kind, EntryKind::Error);
    }

    #[test]
    fn test_null_body_normalized() {
        let e = LogEntry::from_settled("n", call(CallStatus::Code(204), true, Some(Value::Null)));
        assert_eq!(e.data, None);
        assert_eq!(e.data_type, TypeTag::Raw);
    }

    #[test]
    fn test_serialized_field_names() {
        let e = LogEntry::from_settled("x", call(CallStatus::network(), false, None));
        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["type"], "error");
        assert_eq!(v["status"], "NET");
        assert_eq!(v["statusText"], "NET");
        assert_eq!(v["isSuccess"], false);
        assert_eq!(v["dataType"], "raw");
        assert!(v["data"].is_null());
    }

    #[test]
    fn test_json_roundtrip_preserves_entry() {
        let data = json!({"content": [{"email": "a", "nickname": "b"}]});
        let e = LogEntry::from_settled("r", call(CallStatus::Code(201), true, Some(data)));
        let text = serde_json::to_string(&e).unwrap();
        let back: LogEntry = serde_json::from_str(&text).unwrap();
        assert_eq!(back, e);
        assert_eq!(back.status, CallStatus::Code(201));
    }
}

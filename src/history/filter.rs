//! Entry filtering
//!
//! The console filters on outcome (`success` / `error`), never on the finer
//! payload tag.

use super::{EntryKind, LogEntry};
use std::fmt;
use std::str::FromStr;

/// Active filter mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Show every entry
    #[default]
    All,
    /// Show only successful calls
    Success,
    /// Show only failed calls
    Error,
}

impl FilterMode {
    /// Check if a log entry passes the filter
    pub fn matches(self, entry: &LogEntry) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Success => entry.kind == EntryKind::Success,
            FilterMode::Error => entry.kind == EntryKind::Error,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Success => "success",
            FilterMode::Error => "error",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "success" => Ok(FilterMode::Success),
            "error" => Ok(FilterMode::Error),
            other => Err(format!(
                "unknown filter '{}' (expected all, success or error)",
                other
            )),
        }
    }
}

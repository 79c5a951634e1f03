//! Bounded persistent call history
//!
//! Keeps a newest-first mirror of the durable entry list. Every mutation
//! rewrites the whole list (truncated to `max_entries`) into storage.
//! Storage failures are logged and swallowed: the in-memory mirror stays
//! authoritative for the session.

use super::{LogEntry, Storage};
use crate::constants::{BASE_URL_KEY, LOGS_KEY};
use crate::error::Result;
use tracing::{debug, warn};

/// Durable log of observed calls, newest first
pub struct LogStore {
    storage: Box<dyn Storage>,
    entries: Vec<LogEntry>,
    max_entries: usize,
}

impl LogStore {
    /// Create a store over `storage`; call [`LogStore::load`] to read back history
    pub fn new(storage: Box<dyn Storage>, max_entries: usize) -> Self {
        Self {
            storage,
            entries: Vec::new(),
            max_entries,
        }
    }

    // === Entry list ===

    /// Read the persisted list (newest first). Missing or corrupt data yields an empty list.
    pub fn load(&mut self) -> &[LogEntry] {
        self.entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Discarding unreadable history: {}", e);
                Vec::new()
            }
        };
        &self.entries
    }

    fn read_entries(&self) -> Result<Vec<LogEntry>> {
        match self.storage.get(LOGS_KEY)? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(Vec::new()),
        }
    }

    /// Record a new entry at the front; the oldest fall off past capacity
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.insert(0, entry);
        self.save();
    }

    /// Delete the entry with `id`; returns whether it existed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return false;
        }
        self.save();
        true
    }

    /// Erase the persisted list
    pub fn wipe(&mut self) {
        self.entries.clear();
        if let Err(e) = self.storage.remove(LOGS_KEY) {
            warn!("Failed to wipe history: {}", e);
        }
    }

    fn save(&mut self) {
        self.entries.truncate(self.max_entries);
        let result = serde_json::to_string(&self.entries)
            .map_err(Into::into)
            .and_then(|text| self.storage.set(LOGS_KEY, &text));
        match result {
            Ok(()) => debug!("Persisted {} entries", self.entries.len()),
            Err(e) => warn!("Failed to persist history: {}", e),
        }
    }

    /// Persisted entries, newest first
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&LogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    // === Base URL ===

    /// Persisted base URL (empty when never set)
    pub fn load_base_url(&self) -> String {
        match self.storage.get(BASE_URL_KEY) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!("Failed to read base URL: {}", e);
                String::new()
            }
        }
    }

    /// Persist `url` without its trailing slash; returns the stored form
    pub fn save_base_url(&mut self, url: &str) -> String {
        let url = normalize_base_url(url);
        if let Err(e) = self.storage.set(BASE_URL_KEY, &url) {
            warn!("Failed to persist base URL: {}", e);
        }
        url
    }
}

/// Trim whitespace and a single trailing slash
pub fn normalize_base_url(url: &str) -> String {
    let url = url.trim();
    url.strip_suffix('/').unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_LOGS;
    use crate::history::{CallStatus, MemoryStorage, SettledCall};

    fn make(id: &str) -> LogEntry {
        LogEntry::from_settled(
            id,
            SettledCall {
                method: "GET".into(),
                url: "/x".into(),
                status: CallStatus::Code(200),
                is_success: true,
                data: None,
            },
        )
    }

    fn persisted(storage: &MemoryStorage) -> Vec<LogEntry> {
        let text = storage.get(LOGS_KEY).unwrap().unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn test_append_newest_first() {
        let storage = MemoryStorage::new();
        let mut store = LogStore::new(Box::new(storage.clone()), MAX_LOGS);
        store.append(make("a"));
        store.append(make("b"));

        let ids: Vec<_> = persisted(&storage).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn test_append_truncates_to_capacity() {
        let storage = MemoryStorage::new();
        let mut store = LogStore::new(Box::new(storage.clone()), 3);
        for i in 0..5 {
            store.append(make(&format!("e{}", i)));
        }

        let ids: Vec<_> = persisted(&storage).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["e4", "e3", "e2"]);
        assert_eq!(store.entries().len(), 3);
    }

    #[test]
    fn test_load_roundtrip() {
        let storage = MemoryStorage::new();
        let mut store = LogStore::new(Box::new(storage.clone()), MAX_LOGS);
        store.append(make("a"));
        store.append(make("b"));

        let mut reopened = LogStore::new(Box::new(storage), MAX_LOGS);
        let entries = reopened.load();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].id, "b");
    }

    #[test]
    fn test_load_missing_and_corrupt() {
        let mut storage = MemoryStorage::new();
        let mut store = LogStore::new(Box::new(storage.clone()), MAX_LOGS);
        assert!(store.load().is_empty());

        storage.set(LOGS_KEY, "{not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_remove() {
        let storage = MemoryStorage::new();
        let mut store = LogStore::new(Box::new(storage.clone()), MAX_LOGS);
        store.append(make("a"));
        store.append(make("b"));

        assert!(store.remove("a"));
        assert!(!store.remove("missing"));
        let ids: Vec<_> = persisted(&storage).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["b"]);
    }

    #[test]
    fn test_wipe() {
        let storage = MemoryStorage::new();
        let mut store = LogStore::new(Box::new(storage.clone()), MAX_LOGS);
        store.append(make("a"));
        store.wipe();
        assert_eq!(storage.get(LOGS_KEY).unwrap(), None);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_quota_failure_keeps_mirror() {
        let storage = MemoryStorage::with_quota(16);
        let mut store = LogStore::new(Box::new(storage.clone()), MAX_LOGS);
        store.append(make("a"));
        assert_eq!(store.entries().len(), 1);
        assert_eq!(storage.get(LOGS_KEY).unwrap(), None);
    }

    #[test]
    fn test_base_url_slot() {
        let storage = MemoryStorage::new();
        let mut store = LogStore::new(Box::new(storage.clone()), MAX_LOGS);
        assert_eq!(store.load_base_url(), "");

        assert_eq!(store.save_base_url(" http://api.test/ "), "http://api.test");
        let reopened = LogStore::new(Box::new(storage), MAX_LOGS);
        assert_eq!(reopened.load_base_url(), "http://api.test");
    }
}

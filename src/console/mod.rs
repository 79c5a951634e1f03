//! Console state
//!
//! `ConsoleState` is the one owner of everything the inspector mutates: the
//! durable history, the mounted view, and the shared base URL. Both the TUI
//! and the headless commands drive it through the same operations.

pub mod view;

pub use view::{BodyTab, ConsoleView, Counts, EntryBody, MountedEntry};

use crate::error::{InspectorError, Result};
use crate::history::{FilterMode, LogEntry, LogStore};
use crate::intercept::BaseUrl;
use tracing::info;

pub struct ConsoleState {
    store: LogStore,
    view: ConsoleView,
    base_url: BaseUrl,
}

impl ConsoleState {
    pub fn new(store: LogStore, base_url: BaseUrl, filter: FilterMode) -> Self {
        Self {
            store,
            view: ConsoleView::new(filter),
            base_url,
        }
    }

    /// Load persisted history and base URL; mounts oldest first so the newest ends on top.
    /// Returns the number of restored entries.
    pub fn restore(&mut self) -> usize {
        let saved_url = self.store.load_base_url();
        if !saved_url.is_empty() {
            self.base_url.set(saved_url);
        }

        let entries = self.store.load().to_vec();
        let count = entries.len();
        for entry in entries.into_iter().rev() {
            self.view.mount(entry, true);
        }
        info!("Restored {} entries", count);
        count
    }

    /// Record a freshly settled call and show it on top
    pub fn ingest(&mut self, entry: LogEntry) {
        self.store.append(entry.clone());
        self.view.mount(entry, true);
    }

    // === Deletion tiers ===

    /// Delete one entry from both history and view
    pub fn delete(&mut self, id: &str) -> bool {
        let stored = self.store.remove(id);
        let mounted = self.view.unmount(id);
        stored || mounted
    }

    /// Unmount everything; history is untouched and comes back on next restore
    pub fn clear_view(&mut self) {
        self.view.clear();
    }

    /// Wipe history and view. Callers confirm before invoking.
    pub fn reset(&mut self) {
        self.store.wipe();
        self.view.clear();
        info!("History reset");
    }

    // === Settings ===

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.view.set_filter(mode);
    }

    /// Persist and apply a new base URL; returns the normalized form
    pub fn set_base_url(&mut self, url: &str) -> String {
        let url = self.store.save_base_url(url);
        self.base_url.set(url.clone());
        url
    }

    pub fn base_url(&self) -> String {
        self.base_url.get()
    }

    // === Access ===

    pub fn view(&self) -> &ConsoleView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ConsoleView {
        &mut self.view
    }

    pub fn store(&self) -> &LogStore {
        &self.store
    }

    /// Pretty-printed entry record (mounted or persisted)
    pub fn entry_json(&self, id: &str) -> Result<String> {
        let entry = self.find(id)?;
        Ok(serde_json::to_string_pretty(entry)?)
    }

    /// Mounted entry, else the persisted one
    fn find(&self, id: &str) -> Result<&LogEntry> {
        self.view
            .get(id)
            .map(|m| &m.entry)
            .or_else(|| self.store.get(id))
            .ok_or_else(|| InspectorError::EntryNotFound { id: id.to_string() })
    }

    /// Pretty-printed response payload of an entry, `null` when there was none
    pub fn entry_payload_json(&self, id: &str) -> Result<String> {
        let entry = self.find(id)?;
        Ok(serde_json::to_string_pretty(&entry.data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_LOGS;
    use crate::history::{CallStatus, MemoryStorage, SettledCall};

    fn make(id: &str, is_success: bool) -> LogEntry {
        LogEntry::from_settled(
            id,
            SettledCall {
                method: "GET".into(),
                url: "/x".into(),
                status: CallStatus::Code(if is_success { 200 } else { 400 }),
                is_success,
                data: None,
            },
        )
    }

    fn state(storage: &MemoryStorage) -> ConsoleState {
        let store = LogStore::new(Box::new(storage.clone()), MAX_LOGS);
        ConsoleState::new(store, BaseUrl::default(), FilterMode::All)
    }

    fn visible_ids(state: &ConsoleState) -> Vec<String> {
        state.view().visible().map(|m| m.entry.id.clone()).collect()
    }

    #[test]
    fn test_restore_matches_persisted_order() {
        let storage = MemoryStorage::new();
        let mut first = state(&storage);
        first.ingest(make("a", true));
        first.ingest(make("b", true));
        first.ingest(make("c", false));

        let mut second = state(&storage);
        assert_eq!(second.restore(), 3);
        assert_eq!(visible_ids(&second), ["c", "b", "a"]);
    }

    #[test]
    fn test_clear_view_keeps_history() {
        let storage = MemoryStorage::new();
        let mut s = state(&storage);
        s.ingest(make("a", true));
        s.clear_view();
        assert_eq!(s.view().counts().total, 0);

        let mut reloaded = state(&storage);
        assert_eq!(reloaded.restore(), 1);
    }

    #[test]
    fn test_reset_wipes_history() {
        let storage = MemoryStorage::new();
        let mut s = state(&storage);
        s.ingest(make("a", true));
        s.reset();
        assert_eq!(s.view().counts().total, 0);

        let mut reloaded = state(&storage);
        assert_eq!(reloaded.restore(), 0);
    }

    #[test]
    fn test_delete_one() {
        let storage = MemoryStorage::new();
        let mut s = state(&storage);
        s.ingest(make("a", true));
        s.ingest(make("b", true));
        assert!(s.delete("a"));
        assert!(!s.delete("nope"));
        assert_eq!(visible_ids(&s), ["b"]);

        let mut reloaded = state(&storage);
        reloaded.restore();
        assert_eq!(visible_ids(&reloaded), ["b"]);
    }

    #[test]
    fn test_base_url_restored() {
        let storage = MemoryStorage::new();
        let mut s = state(&storage);
        assert_eq!(s.set_base_url("http://api.test/"), "http://api.test");
        assert_eq!(s.base_url(), "http://api.test");

        let mut reloaded = state(&storage);
        reloaded.restore();
        assert_eq!(reloaded.base_url(), "http://api.test");
    }

    #[test]
    fn test_entry_json() {
        let storage = MemoryStorage::new();
        let mut s = state(&storage);
        s.ingest(make("a", true));
        assert!(s.entry_json("a").unwrap().contains("\"id\": \"a\""));
        assert!(matches!(
            s.entry_json("zz"),
            Err(InspectorError::EntryNotFound { .. })
        ));
    }

    #[test]
    fn test_entry_payload_json() {
        let storage = MemoryStorage::new();
        let mut s = state(&storage);
        let data = serde_json::json!({"id": 5, "name": "General"});
        s.ingest(LogEntry::from_settled(
            "a",
            SettledCall {
                method: "GET".into(),
                url: "/boards/5".into(),
                status: CallStatus::Code(200),
                is_success: true,
                data: Some(data.clone()),
            },
        ));
        s.ingest(make("b", true));

        assert_eq!(
            s.entry_payload_json("a").unwrap(),
            serde_json::to_string_pretty(&data).unwrap()
        );
        assert_eq!(s.entry_payload_json("b").unwrap(), "null");
        assert!(s.entry_payload_json("zz").is_err());
    }
}

//! Application state snapshot used for rendering

use crate::console::Counts;
use crate::history::FilterMode;

/// Application state snapshot for rendering
///
/// Borrowed view of the application state, so widgets never clone entries.
#[derive(Debug, Clone)]
pub struct AppState<'a> {
    pub base_url: String,
    pub counts: Counts,
    /// Entries currently in the durable store
    pub persisted: usize,
    pub max_entries: usize,
    pub filter: FilterMode,
    /// Calls sent but not yet settled
    pub in_flight: usize,
    pub status_message: Option<&'a str>,
}

impl AppState<'_> {
    /// Base URL for display
    pub fn base_url_display(&self) -> &str {
        if self.base_url.is_empty() {
            "(not set)"
        } else {
            &self.base_url
        }
    }
}

//! Mounted entry list
//!
//! Display-side state only: which entries are mounted, in what order, which
//! are expanded, and which tab each shows. Nothing here touches storage.

use crate::history::{FilterMode, LogEntry};
use crate::render::{raw_view, render, RawView, ViewFragment};

/// Body tab of an expanded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyTab {
    /// Dedicated view
    Ui,
    /// Highlighted payload
    Raw,
}

/// Rendered body of an entry, built once at mount time
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBody {
    pub ui: Option<ViewFragment>,
    pub raw: RawView,
}

impl EntryBody {
    /// Render from the frozen tag, never reclassifying
    pub fn build(entry: &LogEntry) -> Self {
        Self {
            ui: render(
                entry.data_type,
                entry.data.as_ref(),
                entry.is_success,
                &entry.status,
            ),
            raw: raw_view(entry.data.as_ref()),
        }
    }
}

/// One entry as shown on screen
#[derive(Debug, Clone)]
pub struct MountedEntry {
    pub entry: LogEntry,
    pub body: EntryBody,
    pub expanded: bool,
    pub tab: BodyTab,
}

impl MountedEntry {
    fn new(entry: LogEntry) -> Self {
        let body = EntryBody::build(&entry);
        let tab = if body.ui.is_some() {
            BodyTab::Ui
        } else {
            BodyTab::Raw
        };
        Self {
            entry,
            body,
            expanded: true,
            tab,
        }
    }

    pub fn id(&self) -> &str {
        &self.entry.id
    }
}

/// Visible / total counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub visible: usize,
    pub total: usize,
}

/// Ordered list of mounted entries (top first) with filter and selection
#[derive(Debug, Default)]
pub struct ConsoleView {
    entries: Vec<MountedEntry>,
    filter: FilterMode,
    /// Cached count of entries passing the filter
    visible_cache: usize,
    /// Index into the visible entries
    selected: usize,
}

impl ConsoleView {
    pub fn new(filter: FilterMode) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    // === Mounting ===

    /// Mount `entry` at the top (`prepend`) or at the bottom
    pub fn mount(&mut self, entry: LogEntry, prepend: bool) {
        let mounted = MountedEntry::new(entry);
        let visible = self.filter.matches(&mounted.entry);
        if prepend {
            self.entries.insert(0, mounted);
            // Keep the selection on the same entry unless it follows the top
            if visible && self.selected > 0 {
                self.selected += 1;
            }
        } else {
            self.entries.push(mounted);
        }
        if visible {
            self.visible_cache += 1;
        }
    }

    /// Remove the entry with `id`; returns whether it was mounted
    pub fn unmount(&mut self, id: &str) -> bool {
        let Some(index) = self.entries.iter().position(|m| m.id() == id) else {
            return false;
        };
        let removed = self.entries.remove(index);
        if self.filter.matches(&removed.entry) {
            self.visible_cache = self.visible_cache.saturating_sub(1);
        }
        self.clamp_selection();
        true
    }

    /// Unmount everything
    pub fn clear(&mut self) {
        self.entries.clear();
        self.visible_cache = 0;
        self.selected = 0;
    }

    // === Filtering ===

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
        self.recalculate_visible_cache();
        self.clamp_selection();
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    fn recalculate_visible_cache(&mut self) {
        self.visible_cache = self
            .entries
            .iter()
            .filter(|m| self.filter.matches(&m.entry))
            .count();
    }

    /// Visible / total counts (O(1))
    pub fn counts(&self) -> Counts {
        Counts {
            visible: self.visible_cache,
            total: self.entries.len(),
        }
    }

    // === Expand / collapse ===

    /// Returns false when `id` is not mounted
    pub fn set_collapsed(&mut self, id: &str, collapsed: bool) -> bool {
        match self.find_mut(id) {
            Some(m) => {
                m.expanded = !collapsed;
                true
            }
            None => false,
        }
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if let Some(m) = self.find_mut(id) {
            m.expanded = !m.expanded;
        }
    }

    /// Collapse every entry, hidden ones included
    pub fn collapse_all(&mut self) {
        for m in &mut self.entries {
            m.expanded = false;
        }
    }

    /// Switch between dedicated and raw view; entries without a dedicated view stay raw
    pub fn toggle_tab(&mut self, id: &str) {
        if let Some(m) = self.find_mut(id) {
            if m.body.ui.is_some() {
                m.tab = match m.tab {
                    BodyTab::Ui => BodyTab::Raw,
                    BodyTab::Raw => BodyTab::Ui,
                };
            }
        }
    }

    // === Access ===

    /// Entries passing the filter, top first
    pub fn visible(&self) -> impl Iterator<Item = &MountedEntry> {
        self.entries.iter().filter(|m| self.filter.matches(&m.entry))
    }

    /// All mounted entries, top first
    pub fn mounted(&self) -> &[MountedEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&MountedEntry> {
        self.entries.iter().find(|m| m.id() == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut MountedEntry> {
        self.entries.iter_mut().find(|m| m.id() == id)
    }

    // === Selection ===

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&MountedEntry> {
        self.visible().nth(self.selected)
    }

    pub fn selected_id(&self) -> Option<String> {
        self.selected().map(|m| m.entry.id.clone())
    }

    pub fn select_prev(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
    }

    pub fn select_next(&mut self, n: usize) {
        self.selected = self.selected.saturating_add(n);
        self.clamp_selection();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_cache.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible_cache.saturating_sub(1));
    }
}

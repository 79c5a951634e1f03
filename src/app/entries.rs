//! Entry operations
//!
//! Expand, copy, delete, clear, reset and prompt submission on the console.

use super::operations::{self, ClipboardResult};
use super::{App, PromptKind};
use crate::intercept::CallRequest;

impl App {
    /// Toggle expand/collapse of the selected entry
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.console.view().selected_id() {
            self.console.view_mut().toggle_expanded(&id);
        }
    }

    /// Switch the selected entry between its dedicated and raw view
    pub fn toggle_selected_tab(&mut self) {
        if let Some(id) = self.console.view().selected_id() {
            self.console.view_mut().toggle_tab(&id);
        }
    }

    /// Copy the selected entry's payload as pretty JSON
    pub fn copy_selected(&mut self) {
        let Some(id) = self.console.view().selected_id() else {
            self.set_status("Nothing selected");
            return;
        };
        match self.console.entry_payload_json(&id) {
            Ok(json) => match operations::copy_text(&json) {
                ClipboardResult::Success(n) => self.set_status(format!("Copied {} bytes", n)),
                ClipboardResult::Error(e) => self.set_status(e),
            },
            Err(e) => self.set_status(e.to_string()),
        }
    }

    /// Delete the selected entry from view and history
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.console.view().selected_id() {
            self.console.delete(&id);
            self.set_status("Entry deleted");
        }
    }

    /// Unmount all entries; history stays on disk
    pub fn clear_view(&mut self) {
        self.console.clear_view();
        self.set_status("View cleared");
    }

    /// Wipe history and view (after confirmation)
    pub fn reset_history(&mut self) {
        self.console.reset();
        self.set_status("History reset");
    }

    /// Apply a submitted prompt; invalid input keeps the prompt open
    pub(super) fn submit_prompt(&mut self, kind: PromptKind, text: &str) {
        match kind {
            PromptKind::Request => match CallRequest::parse(text) {
                Ok(request) => {
                    self.prompt = None;
                    self.dispatch(request);
                }
                Err(e) => {
                    if let Some(prompt) = self.prompt.as_mut() {
                        prompt.set_error(e.to_string());
                    }
                }
            },
            PromptKind::BaseUrl => {
                self.prompt = None;
                let url = self.console.set_base_url(text);
                self.set_status(format!("Base URL: {}", url));
            }
            PromptKind::ConfirmReset => {
                self.prompt = None;
            }
        }
    }
}

//! Application state and orchestration
//!
//! Single owner of the console state. Calls run as tokio tasks through the
//! interceptor; their entries come back over a channel and are ingested on
//! the UI loop, so entries appear in settlement order.

mod commands;
mod entries;
mod operations;
mod prompt;
pub mod state;

pub use prompt::{Prompt, PromptAction, PromptKind};
pub use state::AppState;

use crate::console::{ConsoleState, ConsoleView};
use crate::constants::STATUS_MESSAGE_TIMEOUT_SECS;
use crate::history::LogEntry;
use crate::input;
use crate::intercept::{CallRequest, CallTransport};
use crossterm::event::KeyEvent;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::debug;

/// Main application
pub struct App {
    pub(super) console: ConsoleState,

    // Calls
    caller: Arc<dyn CallTransport>,
    entries: mpsc::UnboundedReceiver<LogEntry>,
    in_flight: Arc<AtomicUsize>,

    // UI state
    status_message: Option<(String, Instant)>,
    should_quit: bool,
    pub(super) prompt: Option<Prompt>,
}

impl App {
    /// `caller` is the intercepting transport whose entries arrive on `entries`
    pub fn new(
        console: ConsoleState,
        caller: Arc<dyn CallTransport>,
        entries: mpsc::UnboundedReceiver<LogEntry>,
    ) -> Self {
        Self {
            console,
            caller,
            entries,
            in_flight: Arc::new(AtomicUsize::new(0)),
            status_message: None,
            should_quit: false,
            prompt: None,
        }
    }

    // =========================================================================
    // State access
    // =========================================================================

    pub fn state(&self) -> AppState<'_> {
        AppState {
            base_url: self.console.base_url(),
            counts: self.console.view().counts(),
            persisted: self.console.store().entries().len(),
            max_entries: self.console.store().max_entries(),
            filter: self.console.view().filter(),
            in_flight: self.in_flight.load(Ordering::Relaxed),
            status_message: self.status_text(),
        }
    }

    pub fn view(&self) -> &ConsoleView {
        self.console.view()
    }

    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Ingest every entry settled since the last frame
    pub fn poll(&mut self) {
        while let Ok(entry) = self.entries.try_recv() {
            self.console.ingest(entry);
        }
    }

    // =========================================================================
    // Status message
    // =========================================================================

    pub(super) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    fn status_text(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, t)| t.elapsed().as_secs() < STATUS_MESSAGE_TIMEOUT_SECS)
            .map(|(s, _)| s.as_str())
    }

    // =========================================================================
    // Calls
    // =========================================================================

    /// Send `request` in the background; its entry arrives through `poll`
    pub fn dispatch(&mut self, request: CallRequest) {
        let caller = Arc::clone(&self.caller);
        let in_flight = Arc::clone(&self.in_flight);
        in_flight.fetch_add(1, Ordering::Relaxed);
        self.set_status(format!("{} {}", request.method, request.url));

        tokio::spawn(async move {
            if let Err(e) = caller.send(&request).await {
                debug!("{} {} failed: {}", request.method, request.url, e);
            }
            in_flight.fetch_sub(1, Ordering::Relaxed);
        });
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    // =========================================================================
    // Input handling
    // =========================================================================

    /// Handle keyboard input. Returns true if app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Route to popup if open
        if let Some(ref mut prompt) = self.prompt {
            let kind = prompt.kind;
            match prompt.handle_key(key.code) {
                PromptAction::Close => self.prompt = None,
                PromptAction::Submit(text) => self.submit_prompt(kind, &text),
                PromptAction::Confirm => {
                    self.prompt = None;
                    self.reset_history();
                }
                PromptAction::None => {}
            }
            return false;
        }

        let cmd = input::translate_key(key);
        self.execute_command(cmd)
    }

    /// Handle mouse scroll
    pub fn handle_scroll(&mut self, up: bool) {
        let view = self.console.view_mut();
        if up {
            view.select_prev(1);
        } else {
            view.select_next(1);
        }
    }
}

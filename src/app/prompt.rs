//! Prompt popup state and logic
//!
//! One popup at a time: a text prompt (new request, base URL) or the reset
//! confirmation.

use crossterm::event::KeyCode;

/// Maximum characters accepted in a text prompt
const MAX_INPUT_LEN: usize = 2048;

/// What the popup is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// `METHOD PATH [JSON]`
    Request,
    BaseUrl,
    ConfirmReset,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Request => " New request ",
            PromptKind::BaseUrl => " Base URL ",
            PromptKind::ConfirmReset => " Reset history ",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            PromptKind::Request => "METHOD PATH [JSON]   Enter send   Esc cancel",
            PromptKind::BaseUrl => "Enter save   Esc cancel",
            PromptKind::ConfirmReset => "Erase all saved entries? y confirm   any key cancel",
        }
    }
}

/// Action returned by handle_key for App to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// No action needed
    None,
    /// Close the popup, discarding input
    Close,
    /// Submit the text input
    Submit(String),
    /// Confirmation accepted
    Confirm,
}

/// State for the prompt popup
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
    /// Validation message from the last submit
    pub error: Option<String>,
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self::with_input(kind, String::new())
    }

    pub fn with_input(kind: PromptKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            error: None,
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Handle keyboard input, returns action for App to execute
    pub fn handle_key(&mut self, key: KeyCode) -> PromptAction {
        if self.kind == PromptKind::ConfirmReset {
            return match key {
                KeyCode::Char('y') | KeyCode::Char('Y') => PromptAction::Confirm,
                _ => PromptAction::Close,
            };
        }

        match key {
            KeyCode::Char(c) => {
                if self.input.len() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
                self.error = None;
                PromptAction::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.error = None;
                PromptAction::None
            }
            KeyCode::Enter => PromptAction::Submit(self.input.clone()),
            KeyCode::Esc => PromptAction::Close,
            _ => PromptAction::None,
        }
    }
}

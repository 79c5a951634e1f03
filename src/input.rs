//! Input event handling
//!
//! Translates keyboard events into app commands.

use crate::history::FilterMode;
use crossterm::event::{KeyCode, KeyEvent};

/// Command to execute on the App
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Quit,

    // Selection
    SelectPrev,
    SelectNext,
    SelectPageUp,
    SelectPageDown,
    SelectFirst,
    SelectLast,

    // Filtering
    Filter(FilterMode),

    // Entry actions
    ToggleExpanded,
    ToggleTab,
    CollapseAll,
    CopyEntry,
    DeleteEntry,

    // Bulk actions
    ClearView,
    ResetHistory,

    // Prompts
    NewRequest,
    EditBaseUrl,

    None,
}

/// Translate a key press into an AppCommand
pub fn translate_key(key: KeyEvent) -> AppCommand {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => AppCommand::Quit,

        // Selection
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => AppCommand::SelectPrev,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => AppCommand::SelectNext,
        KeyCode::PageUp => AppCommand::SelectPageUp,
        KeyCode::PageDown => AppCommand::SelectPageDown,
        KeyCode::Home => AppCommand::SelectFirst,
        KeyCode::End => AppCommand::SelectLast,

        // Filter shortcuts
        KeyCode::Char('1') => AppCommand::Filter(FilterMode::All),
        KeyCode::Char('2') => AppCommand::Filter(FilterMode::Success),
        KeyCode::Char('3') => AppCommand::Filter(FilterMode::Error),

        // Entry
        KeyCode::Enter | KeyCode::Char(' ') => AppCommand::ToggleExpanded,
        KeyCode::Tab => AppCommand::ToggleTab,
        KeyCode::Char('z') | KeyCode::Char('Z') => AppCommand::CollapseAll,
        KeyCode::Char('c') | KeyCode::Char('C') => AppCommand::CopyEntry,
        KeyCode::Char('d') | KeyCode::Delete => AppCommand::DeleteEntry,

        // Bulk (reset is uppercase only)
        KeyCode::Backspace => AppCommand::ClearView,
        KeyCode::Char('R') => AppCommand::ResetHistory,

        // Prompts
        KeyCode::Char('n') | KeyCode::Char('N') => AppCommand::NewRequest,
        KeyCode::Char('b') | KeyCode::Char('B') => AppCommand::EditBaseUrl,

        _ => AppCommand::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(translate_key(key(KeyCode::Char('q'))), AppCommand::Quit);
        assert_eq!(translate_key(key(KeyCode::Esc)), AppCommand::Quit);
    }

    #[test]
    fn test_selection_keys() {
        assert_eq!(translate_key(key(KeyCode::Up)), AppCommand::SelectPrev);
        assert_eq!(translate_key(key(KeyCode::Char('j'))), AppCommand::SelectNext);
    }

    #[test]
    fn test_filter_keys() {
        assert_eq!(
            translate_key(key(KeyCode::Char('3'))),
            AppCommand::Filter(FilterMode::Error)
        );
    }

    #[test]
    fn test_reset_requires_uppercase() {
        assert_eq!(translate_key(key(KeyCode::Char('R'))), AppCommand::ResetHistory);
        assert_eq!(translate_key(key(KeyCode::Char('r'))), AppCommand::None);
    }
}

//! Command execution
//!
//! Translates AppCommand into method calls on App.

use super::{App, Prompt, PromptKind};
use crate::constants::PAGE_SCROLL_LINES;
use crate::input::AppCommand;

impl App {
    /// Execute an application command. Returns true if app should quit.
    pub fn execute_command(&mut self, cmd: AppCommand) -> bool {
        match cmd {
            AppCommand::Quit => {
                self.quit();
                return true;
            }
            AppCommand::SelectPrev => self.console.view_mut().select_prev(1),
            AppCommand::SelectNext => self.console.view_mut().select_next(1),
            AppCommand::SelectPageUp => self.console.view_mut().select_prev(PAGE_SCROLL_LINES),
            AppCommand::SelectPageDown => self.console.view_mut().select_next(PAGE_SCROLL_LINES),
            AppCommand::SelectFirst => self.console.view_mut().select_first(),
            AppCommand::SelectLast => self.console.view_mut().select_last(),
            AppCommand::Filter(mode) => {
                self.console.set_filter(mode);
                self.set_status(format!("Filter: {}", mode));
            }
            AppCommand::ToggleExpanded => self.toggle_selected(),
            AppCommand::ToggleTab => self.toggle_selected_tab(),
            AppCommand::CollapseAll => {
                self.console.view_mut().collapse_all();
                self.set_status("Collapsed all");
            }
            AppCommand::CopyEntry => self.copy_selected(),
            AppCommand::DeleteEntry => self.delete_selected(),
            AppCommand::ClearView => self.clear_view(),
            AppCommand::ResetHistory => {
                self.prompt = Some(Prompt::new(PromptKind::ConfirmReset));
            }
            AppCommand::NewRequest => {
                self.prompt = Some(Prompt::new(PromptKind::Request));
            }
            AppCommand::EditBaseUrl => {
                self.prompt = Some(Prompt::with_input(
                    PromptKind::BaseUrl,
                    self.console.base_url(),
                ));
            }
            AppCommand::None => {}
        }
        false
    }
}

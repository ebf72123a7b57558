//! UI Model
//!
//! State of the shell itself: active tab, search, dialogs, toast.

use std::time::Instant;

use super::types::{InputPromptState, InputPurpose, PlannedRename, Tab};
use crate::logic::errors::ErrorKind;

#[derive(Debug, Clone)]
pub struct UiModel {
    pub active_tab: Tab,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether the search box is receiving keystrokes
    pub search_mode: bool,
    pub search_query: String,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Shared text input prompt (add files, add folder, template name, ...)
    pub input_prompt: Option<InputPromptState>,

    /// Pending batch awaiting y/n confirmation
    pub confirm_apply: Option<Vec<PlannedRename>>,

    /// Toast message (text, shown-at)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // STATUS
    // ============================================
    /// Kind of the last classified error, for the status bar
    pub last_error_kind: Option<ErrorKind>,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::Files,
            search_mode: false,
            search_query: String::new(),
            input_prompt: None,
            confirm_apply: None,
            toast_message: None,
            last_error_kind: None,
            should_quit: false,
        }
    }

    /// Check if any modal input is currently capturing keys.
    pub fn has_modal(&self) -> bool {
        self.input_prompt.is_some() || self.confirm_apply.is_some() || self.search_mode
    }

    pub fn open_prompt(&mut self, purpose: InputPurpose) {
        self.input_prompt = Some(InputPromptState {
            purpose,
            buffer: String::new(),
        });
    }

    pub fn open_prompt_with(&mut self, purpose: InputPurpose, initial: String) {
        self.input_prompt = Some(InputPromptState {
            purpose,
            buffer: initial,
        });
    }

    pub fn close_all_modals(&mut self) {
        self.input_prompt = None;
        self.confirm_apply = None;
        self.search_mode = false;
        self.search_query.clear();
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast_message {
            Some((_, shown_at)) => {
                crate::logic::ui::should_dismiss_toast(shown_at.elapsed().as_millis())
            }
            None => false,
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

impl Default for UiModel {
    fn default() -> Self {
        Self::new()
    }
}

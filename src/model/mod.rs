//! Pure Application Model
//!
//! This module defines the pure, cloneable state for the application,
//! organized into focused sub-models:
//!
//! - **FilesModel**: the rename list (entries, filter, selection)
//! - **TemplatesModel**: rename templates and the active selection
//! - **HistoryModel**: undo/redo stacks of executed batches
//! - **UiModel**: tabs, search, dialogs, toast
//!
//! All I/O lives in the services and app layers; helper methods here are
//! side-effect free.

pub mod files;
pub mod history;
pub mod templates;
pub mod types;
pub mod ui;

pub use files::FilesModel;
pub use history::HistoryModel;
pub use templates::TemplatesModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Debug, Clone)]
pub struct Model {
    pub files: FilesModel,
    pub templates: TemplatesModel,
    pub history: HistoryModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new(templates: TemplatesModel) -> Self {
        Self {
            files: FilesModel::new(),
            templates,
            history: HistoryModel::new(),
            ui: UiModel::new(),
        }
    }

    /// Currently selected file entry (after filtering), if any.
    pub fn selected_entry(&self) -> Option<&types::FileEntry> {
        self.files.selected_entry()
    }

    /// Template currently driving previews.
    pub fn active_template(&self) -> &types::RenameTemplate {
        self.templates.active_template()
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    pub fn show_toast(&mut self, message: String) {
        self.ui.show_toast(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(TemplatesModel::with_defaults());
        assert!(model.files.entries.is_empty());
        assert!(model.selected_entry().is_none());
        assert_eq!(model.ui.active_tab, types::Tab::Files);
        assert!(!model.has_modal());
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(TemplatesModel::with_defaults());
        let _cloned = model.clone();
    }

    #[test]
    fn test_active_template_follows_selection() {
        let mut model = Model::new(TemplatesModel::with_defaults());
        model.templates.select_next();
        assert_eq!(model.active_template().name, model.templates.templates[1].name);
    }

    #[test]
    fn test_toast_via_root() {
        let mut model = Model::new(TemplatesModel::with_defaults());
        model.show_toast("hi".to_string());
        assert!(model.ui.toast_message.is_some());
    }
}

//! Template operations
//!
//! Editing happens through the shared input prompt; every edit marks the
//! list dirty and recomputes previews. Ctrl+S persists the whole list
//! through the template store.

use crate::model::types::InputPurpose;
use crate::App;

impl App {
    /// Ctrl+S: persist all templates. Prompts for a name first when the
    /// active template still carries the placeholder name.
    pub(crate) fn save_template_quick(&mut self) {
        if self.model.templates.active_template().name.is_empty() {
            self.model.ui.open_prompt(InputPurpose::TemplateName);
            return;
        }
        self.persist_templates();
    }

    pub(crate) fn persist_templates(&mut self) {
        match self.store.save(&self.model.templates.templates) {
            Ok(()) => {
                self.model.templates.dirty = false;
                let path = self.store.path().display().to_string();
                self.model.show_toast(format!("Templates saved to {}", path));
            }
            Err(err) => {
                let classified = self.hub.report(err, None, Default::default());
                self.model.ui.last_error_kind = Some(classified.kind);
            }
        }
    }

    pub(crate) fn rename_active_template(&mut self, name: String) {
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }
        self.model.templates.active_template_mut().name = name;
        self.persist_templates();
    }

    pub(crate) fn new_template(&mut self, name: String) {
        let name = name.trim().to_string();
        if name.is_empty() {
            return;
        }
        self.model.templates.add_new(name);
        self.refresh_previews();
    }

    pub(crate) fn delete_active_template(&mut self) {
        let name = self.model.templates.active_template().name.clone();
        if self.model.templates.remove_active() {
            self.refresh_previews();
            self.model.show_toast(format!("Deleted template '{}'", name));
        } else {
            self.model
                .show_toast("The last template cannot be deleted".to_string());
        }
    }

    pub(crate) fn set_active_prefix(&mut self, prefix: String) {
        self.model.templates.active_template_mut().prefix = prefix;
        self.refresh_previews();
    }

    pub(crate) fn set_active_suffix(&mut self, suffix: String) {
        self.model.templates.active_template_mut().suffix = suffix;
        self.refresh_previews();
    }

    pub(crate) fn set_active_body(&mut self, body: String) {
        let body = body.trim().to_string();
        self.model.templates.active_template_mut().body =
            (!body.is_empty()).then_some(body);
        self.refresh_previews();
    }

    pub(crate) fn select_next_template(&mut self) {
        self.model.templates.select_next();
        self.refresh_previews();
    }

    pub(crate) fn select_previous_template(&mut self) {
        self.model.templates.select_previous();
        self.refresh_previews();
    }
}

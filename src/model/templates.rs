//! Templates Model
//!
//! The template list and the active selection. The active template
//! drives preview computation; edits happen through the Templates tab.

use super::types::RenameTemplate;

#[derive(Debug, Clone)]
pub struct TemplatesModel {
    pub templates: Vec<RenameTemplate>,

    /// Index of the active template within `templates`
    pub active: usize,

    /// Set when templates changed since the last save
    pub dirty: bool,
}

impl TemplatesModel {
    /// Built-in templates used when the store has none.
    pub fn with_defaults() -> Self {
        Self {
            templates: vec![
                RenameTemplate::keep_name("keep-name"),
                RenameTemplate {
                    name: "dated".to_string(),
                    prefix: String::new(),
                    suffix: String::new(),
                    body: Some("{date}_{name}".to_string()),
                    counter_start: 1,
                    counter_pad: 3,
                },
                RenameTemplate {
                    name: "numbered".to_string(),
                    prefix: String::new(),
                    suffix: String::new(),
                    body: Some("{name}_{counter}".to_string()),
                    counter_start: 1,
                    counter_pad: 3,
                },
            ],
            active: 0,
            dirty: false,
        }
    }

    pub fn from_loaded(templates: Vec<RenameTemplate>) -> Self {
        if templates.is_empty() {
            return Self::with_defaults();
        }
        Self {
            templates,
            active: 0,
            dirty: false,
        }
    }

    pub fn active_template(&self) -> &RenameTemplate {
        &self.templates[self.active]
    }

    pub fn active_template_mut(&mut self) -> &mut RenameTemplate {
        self.dirty = true;
        &mut self.templates[self.active]
    }

    pub fn select_next(&mut self) {
        if self.active + 1 < self.templates.len() {
            self.active += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// Select by name, used for the config `default_template` key.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        match self.templates.iter().position(|t| t.name == name) {
            Some(idx) => {
                self.active = idx;
                true
            }
            None => false,
        }
    }

    /// Append a fresh identity template and make it active.
    pub fn add_new(&mut self, name: String) {
        self.templates.push(RenameTemplate::keep_name(&name));
        self.active = self.templates.len() - 1;
        self.dirty = true;
    }

    /// Remove the active template. The last remaining template cannot be
    /// removed; the list is never empty.
    pub fn remove_active(&mut self) -> bool {
        if self.templates.len() <= 1 {
            return false;
        }
        self.templates.remove(self.active);
        if self.active >= self.templates.len() {
            self.active = self.templates.len() - 1;
        }
        self.dirty = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_not_empty() {
        let m = TemplatesModel::with_defaults();
        assert!(!m.templates.is_empty());
        assert_eq!(m.active, 0);
        assert!(!m.dirty);
    }

    #[test]
    fn test_from_loaded_empty_falls_back_to_defaults() {
        let m = TemplatesModel::from_loaded(vec![]);
        assert!(!m.templates.is_empty());
    }

    #[test]
    fn test_select_by_name() {
        let mut m = TemplatesModel::with_defaults();
        assert!(m.select_by_name("numbered"));
        assert_eq!(m.active_template().name, "numbered");
        assert!(!m.select_by_name("does-not-exist"));
    }

    #[test]
    fn test_selection_bounds() {
        let mut m = TemplatesModel::with_defaults();
        m.select_previous();
        assert_eq!(m.active, 0);
        for _ in 0..10 {
            m.select_next();
        }
        assert_eq!(m.active, m.templates.len() - 1);
    }

    #[test]
    fn test_add_new_becomes_active_and_dirty() {
        let mut m = TemplatesModel::with_defaults();
        m.add_new("mine".to_string());
        assert_eq!(m.active_template().name, "mine");
        assert!(m.dirty);
    }

    #[test]
    fn test_remove_active_keeps_one() {
        let mut m = TemplatesModel::from_loaded(vec![RenameTemplate::keep_name("only")]);
        assert!(!m.remove_active());
        assert_eq!(m.templates.len(), 1);
    }

    #[test]
    fn test_remove_last_clamps_active() {
        let mut m = TemplatesModel::with_defaults();
        let last = m.templates.len() - 1;
        m.active = last;
        assert!(m.remove_active());
        assert_eq!(m.active, m.templates.len() - 1);
    }

    #[test]
    fn test_mutation_marks_dirty() {
        let mut m = TemplatesModel::with_defaults();
        m.active_template_mut().prefix = "x-".to_string();
        assert!(m.dirty);
    }
}

//! Files Model
//!
//! State of the rename list: entries, visible subset under the search
//! filter, and the current selection. The selection indexes into
//! `visible`, not into `entries`, so filtered views navigate naturally.

use super::types::FileEntry;

#[derive(Debug, Clone, Default)]
pub struct FilesModel {
    /// Every file added to the session, in add order
    pub entries: Vec<FileEntry>,

    /// Indices into `entries` that pass the current search filter
    pub visible: Vec<usize>,

    /// Selected position within `visible`
    pub selected: Option<usize>,
}

impl FilesModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry index behind the current selection, if any.
    pub fn selected_entry_index(&self) -> Option<usize> {
        self.selected.and_then(|pos| self.visible.get(pos)).copied()
    }

    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.selected_entry_index()
            .and_then(|idx| self.entries.get(idx))
    }

    /// Clamp the selection after entries or the filter changed.
    pub fn clamp_selection(&mut self) {
        self.selected = match (self.selected, self.visible.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(pos), len) if pos >= len => Some(len - 1),
            (some, _) => some,
        };
    }

    pub fn select_next(&mut self) {
        if let Some(pos) = self.selected {
            if pos + 1 < self.visible.len() {
                self.selected = Some(pos + 1);
            }
        } else if !self.visible.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(pos) = self.selected {
            self.selected = Some(pos.saturating_sub(1));
        } else if !self.visible.is_empty() {
            self.selected = Some(0);
        }
    }

    pub fn select_first(&mut self) {
        self.selected = (!self.visible.is_empty()).then_some(0);
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible.len().checked_sub(1);
    }

    pub fn page_down(&mut self, page: usize) {
        if let Some(pos) = self.selected {
            let last = self.visible.len().saturating_sub(1);
            self.selected = Some((pos + page).min(last));
        } else {
            self.select_first();
        }
    }

    pub fn page_up(&mut self, page: usize) {
        if let Some(pos) = self.selected {
            self.selected = Some(pos.saturating_sub(page));
        } else {
            self.select_first();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::EntryStatus;
    use std::path::PathBuf;

    fn model_with(n: usize) -> FilesModel {
        let mut m = FilesModel::new();
        for i in 0..n {
            m.entries.push(FileEntry {
                source: PathBuf::from(format!("/in/f{}.txt", i)),
                file_name: format!("f{}.txt", i),
                size: 0,
                modified: None,
                preview: None,
                status: EntryStatus::Pending,
                has_pdf_sibling: false,
            });
            m.visible.push(i);
        }
        m
    }

    #[test]
    fn test_empty_model_has_no_selection() {
        let mut m = FilesModel::new();
        m.clamp_selection();
        assert!(m.selected.is_none());
        assert!(m.selected_entry().is_none());
    }

    #[test]
    fn test_clamp_picks_first_when_entries_appear() {
        let mut m = model_with(3);
        m.selected = None;
        m.clamp_selection();
        assert_eq!(m.selected, Some(0));
    }

    #[test]
    fn test_clamp_pulls_selection_back_in_range() {
        let mut m = model_with(3);
        m.selected = Some(5);
        m.clamp_selection();
        assert_eq!(m.selected, Some(2));
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut m = model_with(2);
        m.selected = Some(0);
        m.select_previous();
        assert_eq!(m.selected, Some(0));
        m.select_next();
        assert_eq!(m.selected, Some(1));
        m.select_next();
        assert_eq!(m.selected, Some(1));
    }

    #[test]
    fn test_paging() {
        let mut m = model_with(50);
        m.selected = Some(0);
        m.page_down(20);
        assert_eq!(m.selected, Some(20));
        m.page_down(40);
        assert_eq!(m.selected, Some(49));
        m.page_up(20);
        assert_eq!(m.selected, Some(29));
    }

    #[test]
    fn test_selected_entry_follows_filter() {
        let mut m = model_with(3);
        // Filter down to the last entry only
        m.visible = vec![2];
        m.selected = Some(0);
        assert_eq!(m.selected_entry_index(), Some(2));
        assert_eq!(m.selected_entry().unwrap().file_name, "f2.txt");
    }
}

//! File list operations
//!
//! User actions that populate and maintain the rename list:
//! - Add files by path or glob pattern
//! - Add every file in a folder (non-recursive)
//! - Remove the selected entry from the list
//! - Refresh: re-stat entries, drop vanished files, recompute previews

use std::path::Path;

use anyhow::anyhow;

use crate::logic::errors::ErrorKind;
use crate::model::types::{EntryStatus, FileEntry};
use crate::services::pdf::{find_sibling_pdf, PdfSupport};
use crate::App;

/// A sibling counts only when it exists and passes the capability's
/// strongest probe; with sibling detection off the answer is always no.
fn sibling_verified(pdf: &PdfSupport, detect: bool, path: &Path) -> bool {
    if !detect {
        return false;
    }
    match find_sibling_pdf(path) {
        Some(sibling) => pdf.verify(&sibling),
        None => false,
    }
}

impl App {
    /// Add files from a literal path or a glob pattern.
    pub(crate) fn add_files(&mut self, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }

        // Literal file path first; globs only when it isn't one
        if Path::new(input).is_file() {
            let added = self.add_path(Path::new(input));
            self.finish_adding(if added { 1 } else { 0 });
            return;
        }

        let paths = match glob::glob(input) {
            Ok(paths) => paths,
            Err(err) => {
                let classified = self.hub.report(
                    anyhow!(err).context(format!("invalid pattern '{}'", input)),
                    Some(ErrorKind::InvalidPath),
                    Default::default(),
                );
                self.model.ui.last_error_kind = Some(classified.kind);
                return;
            }
        };

        let mut added = 0;
        for entry in paths {
            match entry {
                Ok(path) => {
                    if self.add_path(&path) {
                        added += 1;
                    }
                }
                Err(err) => {
                    // One unreadable match should not stop the rest
                    let classified =
                        self.hub
                            .report(anyhow!(err), None, Default::default());
                    self.model.ui.last_error_kind = Some(classified.kind);
                }
            }
        }

        self.finish_adding(added);
    }

    /// Add every regular file directly inside `dir`.
    pub(crate) fn add_folder(&mut self, dir: &str) {
        let dir = dir.trim();
        if dir.is_empty() {
            return;
        }

        let read = match std::fs::read_dir(dir) {
            Ok(read) => read,
            Err(err) => {
                let classified = self.hub.report_with_path(
                    anyhow::Error::from(err).context(format!("opening folder '{}'", dir)),
                    None,
                    Path::new(dir),
                );
                self.model.ui.last_error_kind = Some(classified.kind);
                return;
            }
        };

        let mut added = 0;
        for entry in read.flatten() {
            let path = entry.path();
            if path.is_file() && self.add_path(&path) {
                added += 1;
            }
        }

        self.finish_adding(added);
    }

    /// Add one file. Returns false for duplicates and non-files.
    fn add_path(&mut self, path: &Path) -> bool {
        if !path.is_file() {
            return false;
        }
        if self
            .model
            .files
            .entries
            .iter()
            .any(|entry| entry.source == path)
        {
            return false;
        }

        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => return false,
        };

        let (size, modified) = match std::fs::metadata(path) {
            Ok(meta) => (meta.len(), meta.modified().ok()),
            Err(err) => {
                let classified = self.hub.report_with_path(
                    anyhow::Error::from(err).context(format!("reading '{}'", path.display())),
                    None,
                    path,
                );
                self.model.ui.last_error_kind = Some(classified.kind);
                return false;
            }
        };

        let has_pdf_sibling = sibling_verified(&self.pdf, self.detect_pdf_siblings, path);

        self.model.files.entries.push(FileEntry {
            source: path.to_path_buf(),
            file_name,
            size,
            modified,
            preview: None,
            status: EntryStatus::Pending,
            has_pdf_sibling,
        });
        true
    }

    fn finish_adding(&mut self, added: usize) {
        self.refresh_previews();
        self.apply_search_filter();
        if added > 0 {
            self.model.show_toast(format!("Added {} file(s)", added));
        } else {
            self.model.show_toast("No new files matched".to_string());
        }
    }

    /// Remove the selected entry from the list. Never touches the disk.
    pub(crate) fn delete_selected(&mut self) {
        let Some(index) = self.model.files.selected_entry_index() else {
            return;
        };

        let removed = self.model.files.entries.remove(index);
        self.refresh_previews();
        self.apply_search_filter();
        self.model
            .show_toast(format!("Removed {} from the list", removed.file_name));
    }

    /// Re-stat every entry, drop the ones whose source vanished, and
    /// recompute previews.
    pub(crate) fn refresh_entries(&mut self) {
        let before = self.model.files.entries.len();
        let detect_siblings = self.detect_pdf_siblings;
        let pdf = *self.pdf;

        self.model.files.entries.retain_mut(|entry| {
            match std::fs::metadata(&entry.source) {
                Ok(meta) => {
                    entry.size = meta.len();
                    entry.modified = meta.modified().ok();
                    entry.has_pdf_sibling =
                        sibling_verified(&pdf, detect_siblings, &entry.source);
                    true
                }
                Err(err) => {
                    tracing::debug!(path = %entry.source.display(), %err, "dropping vanished entry");
                    false
                }
            }
        });

        let dropped = before - self.model.files.entries.len();
        self.refresh_previews();
        self.apply_search_filter();

        if dropped > 0 {
            self.model
                .show_toast(format!("Refreshed; dropped {} missing file(s)", dropped));
        } else {
            self.model.show_toast("Refreshed".to_string());
        }
    }
}

//! Undo/redo of executed batches
//!
//! The stacks hold what actually happened on disk; undo replays a batch
//! backwards, redo forwards. Ops whose file moved underneath us are
//! reported as races and skipped; the rest of the batch still reverts.

use std::path::Path;

use anyhow::anyhow;

use crate::logic::errors::ErrorKind;
use crate::model::types::{RenameBatch, RenameOp};
use crate::App;

impl App {
    pub(crate) fn undo_rename(&mut self) {
        let Some(batch) = self.model.history.pop_undo() else {
            self.model.show_toast("Nothing to undo".to_string());
            return;
        };

        let mut reverted: Vec<RenameOp> = Vec::new();
        for op in batch.ops.iter().rev() {
            if self.revert_op(op) {
                reverted.push(op.clone());
            }
        }
        // Collected newest-first; redo wants execution order
        reverted.reverse();

        let count = reverted.len();
        if !reverted.is_empty() {
            self.model.history.push_redo(RenameBatch {
                ops: reverted,
                template: batch.template,
            });
        }

        self.refresh_previews();
        self.apply_search_filter();
        self.model.show_toast(format!("Undid {} rename(s)", count));
    }

    pub(crate) fn redo_rename(&mut self) {
        let Some(batch) = self.model.history.pop_redo() else {
            self.model.show_toast("Nothing to redo".to_string());
            return;
        };

        let mut applied: Vec<RenameOp> = Vec::new();
        for op in &batch.ops {
            if self.apply_op(op) {
                applied.push(op.clone());
            }
        }

        let count = applied.len();
        if !applied.is_empty() {
            self.model.history.push_undo_preserving_redo(RenameBatch {
                ops: applied,
                template: batch.template,
            });
        }

        self.refresh_previews();
        self.apply_search_filter();
        self.model.show_toast(format!("Redid {} rename(s)", count));
    }

    /// Rename `op.to` back to `op.from`. Returns whether it happened.
    fn revert_op(&mut self, op: &RenameOp) -> bool {
        if !op.to.exists() {
            let classified = self.hub.report_with_path(
                anyhow!("'{}' moved since it was renamed", op.to.display()),
                Some(ErrorKind::RaceCondition),
                &op.to,
            );
            self.model.ui.last_error_kind = Some(classified.kind);
            return false;
        }

        match std::fs::rename(&op.to, &op.from) {
            Ok(()) => {
                self.update_entry_path(&op.to, &op.from);
                true
            }
            Err(err) => {
                let classified = self.hub.report_with_path(
                    anyhow::Error::from(err).context(format!("undoing '{}'", op.to.display())),
                    None,
                    &op.to,
                );
                self.model.ui.last_error_kind = Some(classified.kind);
                false
            }
        }
    }

    /// Re-apply `op.from` -> `op.to`. Returns whether it happened.
    fn apply_op(&mut self, op: &RenameOp) -> bool {
        if !op.from.exists() {
            let classified = self.hub.report_with_path(
                anyhow!("'{}' moved since it was undone", op.from.display()),
                Some(ErrorKind::RaceCondition),
                &op.from,
            );
            self.model.ui.last_error_kind = Some(classified.kind);
            return false;
        }

        match std::fs::rename(&op.from, &op.to) {
            Ok(()) => {
                self.update_entry_path(&op.from, &op.to);
                true
            }
            Err(err) => {
                let classified = self.hub.report_with_path(
                    anyhow::Error::from(err).context(format!("redoing '{}'", op.from.display())),
                    None,
                    &op.from,
                );
                self.model.ui.last_error_kind = Some(classified.kind);
                false
            }
        }
    }

    /// Point the matching entry at its new path after an undo/redo move.
    fn update_entry_path(&mut self, old: &Path, new: &Path) {
        if let Some(entry) = self
            .model
            .files
            .entries
            .iter_mut()
            .find(|entry| entry.source == old)
        {
            entry.source = new.to_path_buf();
            entry.file_name = new
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
    }
}

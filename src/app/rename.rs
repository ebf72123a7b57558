//! Preview and batch execution
//!
//! Previews are recomputed from the active template whenever the list or
//! the template changes. Execution walks the plan sequentially; each
//! failure is classified and reported, and the batch keeps going.

use anyhow::anyhow;
use chrono::Local;

use crate::logic::errors::ErrorKind;
use crate::logic::rename::plan_renames;
use crate::model::types::{EntryStatus, PlannedRename, RenameBatch, RenameOp};
use crate::App;

impl App {
    /// Recompute the preview column under the active template.
    pub(crate) fn refresh_previews(&mut self) {
        let today = Local::now().date_naive();
        let outcome = plan_renames(
            &self.model.files.entries,
            self.model.templates.active_template(),
            today,
        );

        // Planned entries show their target; everything else clears the
        // preview and keeps whatever terminal status it already had
        for entry in &mut self.model.files.entries {
            entry.preview = None;
            if matches!(entry.status, EntryStatus::Failed(_)) {
                entry.status = EntryStatus::Pending;
            }
        }
        for planned in &outcome.planned {
            if let Some(entry) = self.model.files.entries.get_mut(planned.index) {
                entry.preview = Some(planned.target_name.clone());
                entry.status = EntryStatus::Pending;
            }
        }
        for rejected in &outcome.rejected {
            if let Some(entry) = self.model.files.entries.get_mut(rejected.index) {
                entry.status = EntryStatus::Failed(rejected.kind);
            }
        }
    }

    /// Ctrl+R: plan the batch and either ask for confirmation or run it.
    pub(crate) fn request_apply(&mut self) {
        let today = Local::now().date_naive();
        let outcome = plan_renames(
            &self.model.files.entries,
            self.model.templates.active_template(),
            today,
        );

        for rejected in &outcome.rejected {
            let path = self
                .model
                .files
                .entries
                .get(rejected.index)
                .map(|entry| entry.source.clone())
                .unwrap_or_default();
            let classified = self.hub.report_with_path(
                anyhow!("{}", rejected.reason),
                Some(rejected.kind),
                &path,
            );
            self.model.ui.last_error_kind = Some(classified.kind);
        }

        if outcome.planned.is_empty() {
            self.model.show_toast("Nothing to rename".to_string());
            return;
        }

        if self.confirm_apply {
            self.model.ui.confirm_apply = Some(outcome.planned);
        } else {
            self.execute_renames(outcome.planned);
        }
    }

    /// Execute a planned batch. The disk is re-checked per entry; a
    /// target that appeared or a source that vanished since planning is
    /// reported and skipped, not fatal.
    pub(crate) fn execute_renames(&mut self, planned: Vec<PlannedRename>) {
        let mut ops: Vec<RenameOp> = Vec::new();
        let mut skipped = 0usize;

        for plan in planned {
            if plan.to.exists() {
                let classified = self.hub.report_with_path(
                    anyhow!("target '{}' already exists", plan.target_name),
                    Some(ErrorKind::AlreadyExists),
                    &plan.to,
                );
                self.mark_entry(plan.index, EntryStatus::Skipped, classified.kind);
                skipped += 1;
                continue;
            }

            if !plan.from.exists() {
                let classified = self.hub.report_with_path(
                    anyhow!("source '{}' vanished before renaming", plan.from.display()),
                    Some(ErrorKind::RaceCondition),
                    &plan.from,
                );
                self.mark_entry(plan.index, EntryStatus::Skipped, classified.kind);
                skipped += 1;
                continue;
            }

            match std::fs::rename(&plan.from, &plan.to) {
                Ok(()) => {
                    if let Some(entry) = self.model.files.entries.get_mut(plan.index) {
                        entry.source = plan.to.clone();
                        entry.file_name = plan.target_name.clone();
                        entry.status = EntryStatus::Renamed;
                    }
                    ops.push(RenameOp {
                        from: plan.from,
                        to: plan.to,
                    });
                }
                Err(err) => {
                    let classified = self.hub.report_with_path(
                        anyhow::Error::from(err)
                            .context(format!("renaming '{}'", plan.from.display())),
                        None,
                        &plan.from,
                    );
                    if let Some(entry) = self.model.files.entries.get_mut(plan.index) {
                        entry.status = EntryStatus::Failed(classified.kind);
                    }
                    self.model.ui.last_error_kind = Some(classified.kind);
                    skipped += 1;
                }
            }
        }

        let renamed = ops.len();
        if !ops.is_empty() {
            self.model.history.push_batch(RenameBatch {
                ops,
                template: self.model.templates.active_template().name.clone(),
            });
        }

        self.refresh_previews();
        self.apply_search_filter();

        if skipped > 0 {
            self.model
                .show_toast(format!("Renamed {} file(s), {} skipped", renamed, skipped));
        } else {
            self.model.show_toast(format!("Renamed {} file(s)", renamed));
        }
    }

    fn mark_entry(&mut self, index: usize, status: EntryStatus, kind: ErrorKind) {
        if let Some(entry) = self.model.files.entries.get_mut(index) {
            entry.status = status;
        }
        self.model.ui.last_error_kind = Some(kind);
    }
}

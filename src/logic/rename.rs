//! Rename planning
//!
//! Pure computation of a batch rename from the file list and the active
//! template. Planning never touches the filesystem; execution (in the
//! app layer) re-checks the disk right before each rename.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;

use super::errors::ErrorKind;
use super::filename::validate_file_name;
use super::template::{render_target_name, TokenContext};
use crate::model::types::{FileEntry, PlannedRename, RenameTemplate};

/// Outcome of planning one batch: the renames worth executing plus the
/// entries rejected with a reason. Entries whose rendered name equals the
/// current name are dropped silently; they are not errors.
#[derive(Debug, Default)]
pub struct PlanOutcome {
    pub planned: Vec<PlannedRename>,
    pub rejected: Vec<RejectedRename>,
}

#[derive(Debug)]
pub struct RejectedRename {
    /// Index into the entry list the plan was built from
    pub index: usize,
    pub kind: ErrorKind,
    pub reason: String,
}

/// Build the rename plan for `entries` under `template`.
///
/// The counter advances once per entry in list order, including entries
/// later rejected, so the numbering a user sees in the preview matches
/// what gets executed.
pub fn plan_renames(
    entries: &[FileEntry],
    template: &RenameTemplate,
    today: NaiveDate,
) -> PlanOutcome {
    let mut outcome = PlanOutcome::default();
    let mut claimed_targets: HashSet<String> = HashSet::new();
    let mut counter = template.counter_start;

    for (index, entry) in entries.iter().enumerate() {
        let target = render_for_entry(entry, template, today, counter);
        counter += 1;

        if target == entry.file_name {
            continue;
        }

        if let Some(problem) = validate_file_name(&target) {
            outcome.rejected.push(RejectedRename {
                index,
                kind: ErrorKind::InvalidFilename,
                reason: problem,
            });
            continue;
        }

        // Two entries mapping onto one target would make the second
        // rename clobber the first; reject the later entry. This is a
        // listing-level sanity check, not conflict resolution.
        if !claimed_targets.insert(target.clone()) {
            outcome.rejected.push(RejectedRename {
                index,
                kind: ErrorKind::Validation,
                reason: format!("duplicate target name '{}' in this batch", target),
            });
            continue;
        }

        let to = entry
            .source
            .parent()
            .map(|dir| dir.join(&target))
            .unwrap_or_else(|| Path::new(&target).to_path_buf());

        outcome.planned.push(PlannedRename {
            index,
            from: entry.source.clone(),
            to,
            target_name: target,
        });
    }

    outcome
}

/// Render the preview name for a single entry.
pub fn render_for_entry(
    entry: &FileEntry,
    template: &RenameTemplate,
    today: NaiveDate,
    counter: u64,
) -> String {
    let (stem, ext) = split_name(&entry.file_name);

    let parent = entry
        .source
        .parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let ctx = TokenContext {
        stem: stem.to_string(),
        ext: ext.to_string(),
        size: entry.size,
        mtime: entry.modified_date(),
        parent,
        today,
    };

    render_target_name(template, &ctx, counter)
}

/// Split a file name into stem and extension (without the dot).
/// Dotfiles like ".bashrc" count as all-stem, matching `Path::extension`.
pub fn split_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(0) | None => (file_name, ""),
        Some(idx) => (&file_name[..idx], &file_name[idx + 1..]),
    }
}

//! Shared model types
//!
//! Plain data types used across sub-models, handlers and rendering.

use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::logic::errors::ErrorKind;

/// One file in the rename list.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Absolute path of the file on disk
    pub source: PathBuf,
    /// Current file name (kept in sync with `source`)
    pub file_name: String,
    /// Size in bytes at the last stat
    pub size: u64,
    /// Modified time at the last stat
    pub modified: Option<SystemTime>,
    /// Rendered target name under the active template
    pub preview: Option<String>,
    pub status: EntryStatus,
    /// Whether a `<stem>.pdf` sibling exists next to the source
    pub has_pdf_sibling: bool,
}

impl FileEntry {
    /// Modified time as a local calendar date, for template tokens.
    pub fn modified_date(&self) -> Option<NaiveDate> {
        self.modified
            .map(|t| DateTime::<Local>::from(t).date_naive())
    }
}

/// Lifecycle of an entry within the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// Not touched by a batch yet
    Pending,
    /// Renamed by the most recent batch
    Renamed,
    /// Skipped during execution (target existed, source vanished, ...)
    Skipped,
    /// Rejected or failed, with the classified kind
    Failed(ErrorKind),
}

/// A rename template: prefix/suffix wrapping plus an optional body
/// pattern with metadata tokens. Serialized to the template store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameTemplate {
    pub name: String,
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
    /// Body pattern; `None` keeps the original stem
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default = "default_counter_start")]
    pub counter_start: u64,
    #[serde(default = "default_counter_pad")]
    pub counter_pad: u32,
}

fn default_counter_start() -> u64 {
    1
}

fn default_counter_pad() -> u32 {
    3
}

impl RenameTemplate {
    /// Identity template used when nothing is configured.
    pub fn keep_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            prefix: String::new(),
            suffix: String::new(),
            body: None,
            counter_start: default_counter_start(),
            counter_pad: default_counter_pad(),
        }
    }
}

/// One rename scheduled for execution.
#[derive(Debug, Clone)]
pub struct PlannedRename {
    /// Index into the entry list the plan was built from
    pub index: usize,
    pub from: PathBuf,
    pub to: PathBuf,
    pub target_name: String,
}

/// One executed rename, as recorded for undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOp {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// An executed batch: the ops that actually happened, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameBatch {
    pub ops: Vec<RenameOp>,
    /// Name of the template that produced the batch (display only)
    pub template: String,
}

/// Top-level tabs of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Files,
    Templates,
    Help,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Files, Tab::Templates, Tab::Help];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Files => "Files",
            Tab::Templates => "Templates",
            Tab::Help => "Help",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Files => 0,
            Tab::Templates => 1,
            Tab::Help => 2,
        }
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What an open input prompt is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// Path or glob pattern of files to add
    AddFiles,
    /// Directory whose files get added
    AddFolder,
    /// Name under which to save the active template
    TemplateName,
    /// New template name
    NewTemplate,
    EditPrefix,
    EditSuffix,
    EditBody,
}

impl InputPurpose {
    pub fn title(&self) -> &'static str {
        match self {
            InputPurpose::AddFiles => "Add files (path or glob)",
            InputPurpose::AddFolder => "Add folder",
            InputPurpose::TemplateName => "Save template as",
            InputPurpose::NewTemplate => "New template name",
            InputPurpose::EditPrefix => "Template prefix",
            InputPurpose::EditSuffix => "Template suffix",
            InputPurpose::EditBody => "Template body pattern",
        }
    }
}

/// State of the shared input prompt dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPromptState {
    pub purpose: InputPurpose,
    pub buffer: String,
}

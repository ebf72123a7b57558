//! Template store
//!
//! Loads and saves rename templates as YAML beside the config file.
//! A missing store file is not an error; the model falls back to its
//! built-in templates.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::types::RenameTemplate;

#[derive(Debug, Serialize, Deserialize, Default)]
struct StoreFile {
    #[serde(default)]
    templates: Vec<RenameTemplate>,
}

#[derive(Debug)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load stored templates. Missing file yields an empty list; a file
    /// that exists but fails to parse is a real error worth surfacing.
    pub fn load(&self) -> Result<Vec<RenameTemplate>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                return Err(err).context(format!("reading {}", self.path.display()));
            }
        };

        let file: StoreFile = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(file.templates)
    }

    /// Persist the full template list, creating parent directories as
    /// needed.
    pub fn save(&self, templates: &[RenameTemplate]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let file = StoreFile {
            templates: templates.to_vec(),
        };
        let raw = serde_yaml::to_string(&file).context("serializing templates")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("writing {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), count = templates.len(), "templates saved");
        Ok(())
    }
}

//! Configuration
//!
//! YAML config with every key optional, so an empty (or absent) file
//! works. Resolution order for the file itself lives in `main.rs`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the template selected at startup
    pub default_template: Option<String>,

    /// Ask before executing a batch rename
    pub confirm_apply: bool,

    /// Probe for `<stem>.pdf` siblings when adding files
    pub detect_pdf_siblings: bool,

    /// tracing filter directive, e.g. "refile=debug"
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_template: None,
            confirm_apply: true,
            detect_pdf_siblings: true,
            log_filter: None,
        }
    }
}

impl Config {
    /// Load from a YAML file. An unreadable or unparsable file is an
    /// error; a caller that found no file at all should use `default()`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_yaml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.confirm_apply);
        assert!(config.detect_pdf_siblings);
        assert!(config.default_template.is_none());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.confirm_apply);
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let config: Config =
            serde_yaml::from_str("confirm_apply: false\ndefault_template: dated\n").unwrap();
        assert!(!config.confirm_apply);
        assert_eq!(config.default_template.as_deref(), Some("dated"));
        assert!(config.detect_pdf_siblings);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        assert!(Config::load(Path::new("/refile-no-such-config.yaml")).is_err());
    }
}

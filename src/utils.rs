/// Utility functions used throughout the application

use std::path::PathBuf;

/// Log file path; the TUI owns stdout, so tracing writes here.
pub fn get_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("refile.log");
    path
}

/// Directory where config and the template store live.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("refile"))
}

//! Formatting and display logic
//!
//! Pure functions for formatting data for human-readable display.

use chrono::{DateTime, Local};
use std::time::SystemTime;

/// Format bytes into human-readable string (e.g., "1.2 KB", "5.3 MB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Format a modification time for the file table ("2025-06-01 14:32").
pub fn format_mtime(time: Option<SystemTime>) -> String {
    match time {
        Some(t) => DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Truncate a name to `max` display columns, appending "…" when cut.
pub fn truncate_name(name: &str, max: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if max == 0 {
        return String::new();
    }

    let mut width = 0;
    let mut out = String::new();
    for c in name.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max.saturating_sub(1) {
            // Leave room for the ellipsis unless the whole name fits
            if name.chars().map(|c| c.width().unwrap_or(0)).sum::<usize>() <= max {
                break;
            }
            out.push('…');
            return out;
        }
        width += w;
        out.push(c);
    }
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_small() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
    }

    #[test]
    fn test_format_bytes_kb() {
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
    }

    #[test]
    fn test_format_bytes_mb_gb() {
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024), "2.00 GB");
    }

    #[test]
    fn test_format_mtime_none() {
        assert_eq!(format_mtime(None), "-");
    }

    #[test]
    fn test_truncate_short_name_untouched() {
        assert_eq!(truncate_name("a.txt", 20), "a.txt");
    }

    #[test]
    fn test_truncate_long_name() {
        let out = truncate_name("a-very-long-file-name.txt", 10);
        assert!(out.ends_with('…'));
        assert!(out.chars().count() <= 10);
    }
}

//! Search logic
//!
//! Pure functions for filtering the file list by a search query.
//! Supports wildcard patterns using the glob crate, with a plain
//! substring fallback when the pattern does not parse.

use crate::model::types::FileEntry;

/// Queries shorter than this match everything; a one-character filter
/// flickers more than it helps.
pub const MIN_QUERY_LEN: usize = 2;

/// Match a search query against a file path using wildcard patterns.
///
/// - `*` matches any sequence of characters within a component
/// - matching is case-insensitive
/// - the query is tried against the full path and each path component
pub fn search_matches(query: &str, file_path: &str) -> bool {
    if query.len() < MIN_QUERY_LEN {
        return true;
    }

    let query_lower = query.to_lowercase();
    let path_lower = file_path.to_lowercase();

    if let Ok(pattern) = glob::Pattern::new(&query_lower) {
        if pattern.matches(&path_lower) {
            return true;
        }
        for component in path_lower.split('/') {
            if pattern.matches(component) {
                return true;
            }
        }
    }

    // Invalid glob pattern: fall back to substring matching
    path_lower.contains(&query_lower)
}

/// Indices of entries visible under `query`, in list order.
pub fn visible_indices(entries: &[FileEntry], query: &str) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| search_matches(query, &entry.source.to_string_lossy()))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::EntryStatus;
    use std::path::PathBuf;

    fn entry(path: &str) -> FileEntry {
        let source = PathBuf::from(path);
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        FileEntry {
            source,
            file_name,
            size: 0,
            modified: None,
            preview: None,
            status: EntryStatus::Pending,
            has_pdf_sibling: false,
        }
    }

    #[test]
    fn test_short_query_matches_all() {
        assert!(search_matches("", "any-file.txt"));
        assert!(search_matches("a", "other.txt"));
    }

    #[test]
    fn test_exact_match() {
        assert!(search_matches("invoice", "invoice-1.txt"));
        assert!(!search_matches("invoice", "receipt.txt"));
    }

    #[test]
    fn test_wildcard_prefix_and_suffix() {
        assert!(search_matches("inv*", "invoice.txt"));
        assert!(!search_matches("inv*", "my-invoice.txt"));
        assert!(search_matches("*.txt", "file.txt"));
        assert!(search_matches("*invoice*", "my-invoice-2024.txt"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(search_matches("INVOICE", "invoice-1.txt"));
        assert!(search_matches("invoice", "INVOICE-1.TXT"));
    }

    #[test]
    fn test_path_component_matching() {
        assert!(search_matches("photos", "/home/u/Photos/img-1.jpg"));
        assert!(search_matches("*photos*", "/home/u/Photos/img-1.jpg"));
    }

    #[test]
    fn test_substring_fallback_on_invalid_glob() {
        // "[" alone is an invalid glob pattern
        assert!(search_matches("[x", "weird-[x-name.txt"));
        assert!(!search_matches("[x", "plain.txt"));
    }

    #[test]
    fn test_visible_indices_filters() {
        let entries = vec![
            entry("/in/invoice-1.txt"),
            entry("/in/receipt.txt"),
            entry("/in/invoice-2.txt"),
        ];
        assert_eq!(visible_indices(&entries, "invoice"), vec![0, 2]);
    }

    #[test]
    fn test_visible_indices_short_query_keeps_all() {
        let entries = vec![entry("/in/a.txt"), entry("/in/b.txt")];
        assert_eq!(visible_indices(&entries, ""), vec![0, 1]);
        assert_eq!(visible_indices(&entries, "x"), vec![0, 1]);
    }

    #[test]
    fn test_visible_indices_matches_directory_part() {
        let entries = vec![entry("/scans/a.pdf"), entry("/other/b.pdf")];
        assert_eq!(visible_indices(&entries, "scans"), vec![0]);
    }
}

//! Error classification
//!
//! Pure mapping from failure values to a closed set of error kinds.
//! Fallible operations return ordinary `Result`s; callers classify the
//! error here and hand the classified value to the reporting hub
//! (`services::error_hub`) for logging and observer dispatch.

use std::collections::BTreeMap;

use anyhow::Error;

/// Closed set of failure categories used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    InvalidPath,
    InvalidFilename,
    AlreadyExists,
    RaceCondition,
    Validation,
    Conversion,
    Network,
    Unknown,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "file-not-found",
            ErrorKind::PermissionDenied => "permission-denied",
            ErrorKind::InvalidPath => "invalid-path",
            ErrorKind::InvalidFilename => "invalid-filename",
            ErrorKind::AlreadyExists => "file-exists",
            ErrorKind::RaceCondition => "race-condition",
            ErrorKind::Validation => "validation-error",
            ErrorKind::Conversion => "conversion-error",
            ErrorKind::Network => "network-error",
            ErrorKind::Unknown => "unknown",
        }
    }
}

/// A classified failure. Constructed by [`classify`] (or the reporting
/// hub wrapping it) and not mutated afterwards.
#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: BTreeMap<String, String>,
    pub source: Option<Error>,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)
    }
}

/// Classify an error into a fixed kind.
///
/// Walks the error chain for an `std::io::Error` first (the most precise
/// signal we get from filesystem operations), then falls back to keyword
/// matching on the lowercased message. Keyword rules run in fixed
/// priority order; the first match wins, so an ambiguous message like
/// "invalid permission data" resolves to the earlier permission rule.
pub fn classify_error(error: &Error) -> ErrorKind {
    if let Some(kind) = classify_io_chain(error) {
        return kind;
    }
    classify_message(&error.to_string())
}

/// Keyword matching over a free-text message, in priority order:
/// not-found, permission, already-exists, race/concurrent, invalid.
/// Substring matching on messages is a heuristic; the rules and their
/// order are stable on purpose and should not be "improved" piecemeal.
pub fn classify_message(message: &str) -> ErrorKind {
    let msg = message.to_lowercase();

    if msg.contains("not found") || msg.contains("no such file") {
        return ErrorKind::NotFound;
    }
    if msg.contains("permission") || msg.contains("access denied") {
        return ErrorKind::PermissionDenied;
    }
    if msg.contains("already exists") || msg.contains("file exists") {
        return ErrorKind::AlreadyExists;
    }
    if msg.contains("race") || msg.contains("concurrent") {
        return ErrorKind::RaceCondition;
    }
    if msg.contains("invalid") {
        return ErrorKind::Validation;
    }

    ErrorKind::Unknown
}

/// Map an `io::Error` found anywhere in the chain to a kind, if its
/// `io::ErrorKind` is specific enough to trust.
fn classify_io_chain(error: &Error) -> Option<ErrorKind> {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
            use std::io::ErrorKind as Io;
            return match io_err.kind() {
                Io::NotFound => Some(ErrorKind::NotFound),
                Io::PermissionDenied => Some(ErrorKind::PermissionDenied),
                Io::AlreadyExists => Some(ErrorKind::AlreadyExists),
                // Other io kinds carry too little signal; fall through to keywords
                _ => None,
            };
        }
        current = err.source();
    }

    None
}

/// Build the classified value. `explicit_kind` overrides classification
/// when the call site already knows what went wrong (e.g. a rename source
/// that vanished between planning and execution is a race, whatever the
/// OS message says). Classification always succeeds; unrecognized errors
/// land on [`ErrorKind::Unknown`].
pub fn classify(
    error: Error,
    explicit_kind: Option<ErrorKind>,
    context: BTreeMap<String, String>,
) -> AppError {
    let kind = explicit_kind.unwrap_or_else(|| classify_error(&error));
    AppError {
        kind,
        message: error.to_string(),
        context,
        source: Some(error),
    }
}

const FALLBACK_SUGGESTIONS: &[&str] = &["Check the log file for details and retry the operation"];

/// Advisory remediation text per kind. Never acted on programmatically.
pub fn suggestions_for(kind: ErrorKind) -> &'static [&'static str] {
    match kind {
        ErrorKind::NotFound => &[
            "Verify the file still exists at the listed path",
            "Press F5 to refresh the file list",
        ],
        ErrorKind::PermissionDenied => &[
            "Check that you have write access to the directory",
            "Close other programs that may hold the file open",
        ],
        ErrorKind::AlreadyExists => &[
            "A file with the target name already exists; adjust the template",
            "Add a {counter} token to make names unique",
        ],
        ErrorKind::InvalidFilename => &[
            "Remove path separators and control characters from the template",
        ],
        ErrorKind::RaceCondition => &[
            "The file changed on disk while renaming; refresh and retry",
        ],
        _ => FALLBACK_SUGGESTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        let err = anyhow::anyhow!("file not found: a.txt");
        assert_eq!(classify_error(&err), ErrorKind::NotFound);
    }

    #[test]
    fn test_classify_no_such_file() {
        let err = anyhow::anyhow!("No such file or directory (os error 2)");
        assert_eq!(classify_error(&err), ErrorKind::NotFound);
    }

    #[test]
    fn test_classify_permission() {
        let err = anyhow::anyhow!("Permission denied (os error 13)");
        assert_eq!(classify_error(&err), ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_any_permission_message_classifies_as_permission_denied() {
        let err = anyhow::anyhow!("cannot write: permission problem on volume");
        assert_eq!(classify_error(&err), ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_classify_already_exists() {
        let err = anyhow::anyhow!("target already exists");
        assert_eq!(classify_error(&err), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_classify_race() {
        let err = anyhow::anyhow!("concurrent modification detected");
        assert_eq!(classify_error(&err), ErrorKind::RaceCondition);
    }

    #[test]
    fn test_classify_invalid() {
        let err = anyhow::anyhow!("invalid value for counter");
        assert_eq!(classify_error(&err), ErrorKind::Validation);
    }

    #[test]
    fn test_classify_unknown() {
        let err = anyhow::anyhow!("something odd happened");
        assert_eq!(classify_error(&err), ErrorKind::Unknown);
    }

    #[test]
    fn test_priority_not_found_beats_permission() {
        // Both keywords present; the earlier rule wins
        let err = anyhow::anyhow!("not found while checking permission");
        assert_eq!(classify_error(&err), ErrorKind::NotFound);
    }

    #[test]
    fn test_priority_permission_beats_invalid() {
        let err = anyhow::anyhow!("invalid permission bits");
        assert_eq!(classify_error(&err), ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_io_error_kind_wins_over_message() {
        let io = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "weird wording");
        let err = Error::from(io);
        assert_eq!(classify_error(&err), ErrorKind::AlreadyExists);
    }

    #[test]
    fn test_io_error_in_chain_is_found() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from(io).context("renaming a.txt");
        assert_eq!(classify_error(&err), ErrorKind::PermissionDenied);
    }

    #[test]
    fn test_explicit_kind_overrides() {
        let err = anyhow::anyhow!("file not found");
        let classified = classify(err, Some(ErrorKind::RaceCondition), BTreeMap::new());
        assert_eq!(classified.kind, ErrorKind::RaceCondition);
    }

    #[test]
    fn test_classify_keeps_message_and_context() {
        let mut ctx = BTreeMap::new();
        ctx.insert("path".to_string(), "/tmp/a.txt".to_string());
        let classified = classify(anyhow::anyhow!("boom"), None, ctx);
        assert_eq!(classified.message, "boom");
        assert_eq!(classified.context.get("path").unwrap(), "/tmp/a.txt");
        assert!(classified.source.is_some());
    }

    #[test]
    fn test_suggestions_known_kind() {
        let s = suggestions_for(ErrorKind::AlreadyExists);
        assert!(s.len() > 1);
    }

    #[test]
    fn test_suggestions_unmapped_kind_falls_back() {
        // Kinds without a table entry get the generic one-item fallback
        assert_eq!(suggestions_for(ErrorKind::Conversion), FALLBACK_SUGGESTIONS);
        assert_eq!(suggestions_for(ErrorKind::Network).len(), 1);
        assert_eq!(suggestions_for(ErrorKind::Unknown).len(), 1);
    }
}

//! Filename validation
//!
//! Checks a rendered target name before it reaches the filesystem.
//! Rules follow the strictest common denominator (Windows conventions)
//! so templates behave the same on every platform.

/// Reserved characters that are rejected on at least one supported
/// platform. Forward/back slashes are rejected separately because they
/// would silently change the target directory.
const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '|', '?', '*'];

/// Validate a target file name. Returns the first problem found, or
/// `None` when the name is acceptable.
pub fn validate_file_name(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("target name is empty".to_string());
    }
    if name == "." || name == ".." {
        return Some(format!("'{}' is not a valid file name", name));
    }
    if name.contains('/') || name.contains('\\') {
        return Some("target name contains a path separator".to_string());
    }
    if name.chars().any(|c| c == '\0' || c.is_control()) {
        return Some("target name contains a control character".to_string());
    }
    if let Some(c) = name.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Some(format!("target name contains reserved character '{}'", c));
    }
    if name.ends_with(' ') || name.ends_with('.') {
        return Some("target name ends with a space or dot".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ordinary_names() {
        assert!(validate_file_name("report.txt").is_none());
        assert!(validate_file_name("IMG_0012.jpeg").is_none());
        assert!(validate_file_name("no extension").is_none());
        assert!(validate_file_name(".hidden").is_none());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(validate_file_name("").is_some());
    }

    #[test]
    fn test_rejects_dot_names() {
        assert!(validate_file_name(".").is_some());
        assert!(validate_file_name("..").is_some());
    }

    #[test]
    fn test_rejects_path_separators() {
        assert!(validate_file_name("a/b.txt").is_some());
        assert!(validate_file_name("a\\b.txt").is_some());
    }

    #[test]
    fn test_rejects_control_chars() {
        assert!(validate_file_name("a\0b").is_some());
        assert!(validate_file_name("a\tb").is_some());
    }

    #[test]
    fn test_rejects_reserved_chars() {
        for c in ['<', '>', ':', '"', '|', '?', '*'] {
            let name = format!("file{}name", c);
            assert!(validate_file_name(&name).is_some(), "expected reject: {}", name);
        }
    }

    #[test]
    fn test_rejects_trailing_space_or_dot() {
        assert!(validate_file_name("name ").is_some());
        assert!(validate_file_name("name.").is_some());
    }
}

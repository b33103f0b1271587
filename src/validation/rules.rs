//! Validation Rules
//!
//! Per-tag value checks and the title rule for untyped lines. Each check
//! returns the diagnostic message, or `None` when the value is fine.

use super::fs::GlobResolver;
use crate::parser::has_type_marker;

/// Accepted values of an `S:` line
pub const VALID_STATUSES: [&str; 6] = [
    "Supported",
    "Maintained",
    "Odd Fixes",
    "Orphan",
    "Obsolete",
    "Buried alive in reporters",
];

pub const INVALID_STATUS: &str = "Invalid S: value";
pub const UNMATCHED_GLOB: &str = "Glob pattern doesn't match any files";
pub const INCORRECT_INDENTATION: &str = "Incorrect indentation";

/// State carried from one line to the next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    /// Most recently accepted title, empty before the first one
    pub last_title: String,
}

pub fn validate_status(value: &str) -> Option<String> {
    if VALID_STATUSES.contains(&value) {
        None
    } else {
        Some(INVALID_STATUS.to_string())
    }
}

/// Check an `F:`/`X:` glob against the tree
pub fn validate_file_glob(pattern: &str, resolver: &impl GlobResolver) -> Option<String> {
    if resolver.has_match(pattern) {
        None
    } else {
        Some(UNMATCHED_GLOB.to_string())
    }
}

/// Check an untyped line: a blank, a title, or a malformed field.
///
/// Returns the message (if any) and the title to carry forward. Only an
/// accepted title replaces `last_title`.
///
/// Titles are not checked for alphabetical order.
pub fn validate_title(value: &str, last_title: &str) -> (Option<String>, String) {
    if value.is_empty() {
        return (None, last_title.to_string());
    }
    if has_type_marker(value) {
        return (Some(INCORRECT_INDENTATION.to_string()), last_title.to_string());
    }
    // Reports the character at index 1, which is always the colon itself
    if let Some(second @ ':') = value.chars().nth(1) {
        return (Some(format!("Invalid type '{second}'")), last_title.to_string());
    }
    (None, value.to_string())
}

impl ParseContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run [`validate_title`] and keep the resulting title
    pub fn check_title(&mut self, value: &str) -> Option<String> {
        let (message, title) = validate_title(value, &self.last_title);
        self.last_title = title;
        message
    }
}

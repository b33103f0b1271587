//! MAINTAINERS Line Parser
//!
//! Classifies a single raw line into a tagged field or the untyped fallback.
//! Focused solely on the line grammar; validation lives elsewhere.

pub mod line;

pub use line::{ParsedLine, TAG_ALPHABET, Tag};

use regex::Regex;
use std::sync::LazyLock;

/// `<tag>:<TAB><content>`, content starting with non-whitespace
static TAGGED_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tag>[PMRLWBCQTSFNXK]):\t(?P<content>\S.*)")
        .expect("tagged line pattern is valid")
});

/// A tag letter and colon at the start of a line, whatever follows
static TYPE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[PMRLWBCQTSFNXK]:").expect("type marker pattern is valid"));

/// Classify a single line (terminator already stripped).
///
/// This is the main entry point for parsing. Never fails: anything that is
/// not a well-formed tagged field comes back as [`ParsedLine::Untyped`]
/// holding the unchanged line.
pub fn split_line(line: &str) -> ParsedLine<'_> {
    let Some(caps) = TAGGED_LINE.captures(line) else {
        return ParsedLine::Untyped(line);
    };

    let tag = caps
        .name("tag")
        .and_then(|m| m.as_str().chars().next())
        .and_then(Tag::from_letter);
    let content = caps.name("content").map(|m| m.as_str());

    match (tag, content) {
        (Some(tag), Some(content)) => ParsedLine::Tagged { tag, content },
        _ => ParsedLine::Untyped(line),
    }
}

/// Whether the line starts with a valid tag letter and colon
pub fn has_type_marker(line: &str) -> bool {
    TYPE_MARKER.is_match(line)
}

//! Line Types
//!
//! Minimal types for a classified MAINTAINERS line.
//! No validation logic - pure data representation.

use std::fmt;

/// The fixed alphabet of field tags, in the order the grammar lists them.
pub const TAG_ALPHABET: &str = "PMRLWBCQTSFNXK";

/// Field tag of a record line (the letter before `:`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `P:` subsystem profile / person
    Profile,
    /// `M:` maintainer mail address
    Maintainer,
    /// `R:` designated reviewer
    Reviewer,
    /// `L:` mailing list
    MailingList,
    /// `W:` web page
    Web,
    /// `B:` bug tracker
    Bugs,
    /// `C:` chat
    Chat,
    /// `Q:` patchwork queue
    Patchwork,
    /// `T:` SCM tree
    Tree,
    /// `S:` status
    Status,
    /// `F:` file glob
    Files,
    /// `N:` file name regex
    FileRegex,
    /// `X:` excluded file glob
    Excluded,
    /// `K:` content keyword
    Keyword,
}

impl Tag {
    /// Look up a tag by its letter. Only uppercase alphabet letters match.
    pub fn from_letter(letter: char) -> Option<Self> {
        let tag = match letter {
            'P' => Tag::Profile,
            'M' => Tag::Maintainer,
            'R' => Tag::Reviewer,
            'L' => Tag::MailingList,
            'W' => Tag::Web,
            'B' => Tag::Bugs,
            'C' => Tag::Chat,
            'Q' => Tag::Patchwork,
            'T' => Tag::Tree,
            'S' => Tag::Status,
            'F' => Tag::Files,
            'N' => Tag::FileRegex,
            'X' => Tag::Excluded,
            'K' => Tag::Keyword,
            _ => return None,
        };
        Some(tag)
    }

    pub fn letter(self) -> char {
        match self {
            Tag::Profile => 'P',
            Tag::Maintainer => 'M',
            Tag::Reviewer => 'R',
            Tag::MailingList => 'L',
            Tag::Web => 'W',
            Tag::Bugs => 'B',
            Tag::Chat => 'C',
            Tag::Patchwork => 'Q',
            Tag::Tree => 'T',
            Tag::Status => 'S',
            Tag::Files => 'F',
            Tag::FileRegex => 'N',
            Tag::Excluded => 'X',
            Tag::Keyword => 'K',
        }
    }

    /// Tags whose content is a file glob checked against the tree
    pub fn is_file_glob(self) -> bool {
        matches!(self, Tag::Files | Tag::Excluded)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A classified line, borrowing from the raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// `<tag>:<TAB><content>` with non-whitespace leading content
    Tagged { tag: Tag, content: &'a str },
    /// Anything else: blank lines, titles, malformed fields.
    /// Holds the whole original line.
    Untyped(&'a str),
}

impl<'a> ParsedLine<'a> {
    /// The tag, or `None` for the untyped fallback
    pub fn tag(&self) -> Option<Tag> {
        match self {
            ParsedLine::Tagged { tag, .. } => Some(*tag),
            ParsedLine::Untyped(_) => None,
        }
    }

    pub fn content(&self) -> &'a str {
        match self {
            ParsedLine::Tagged { content, .. } => content,
            ParsedLine::Untyped(line) => line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_round_trips_through_alphabet() {
        for letter in TAG_ALPHABET.chars() {
            let tag = Tag::from_letter(letter).unwrap();
            assert_eq!(tag.letter(), letter);
        }
    }

    #[test]
    fn test_unknown_letters() {
        assert_eq!(Tag::from_letter('Z'), None);
        assert_eq!(Tag::from_letter('m'), None);
        assert_eq!(Tag::from_letter(':'), None);
    }

    #[test]
    fn test_file_glob_tags() {
        assert!(Tag::Files.is_file_glob());
        assert!(Tag::Excluded.is_file_glob());
        assert!(!Tag::FileRegex.is_file_glob());
        assert!(!Tag::Status.is_file_glob());
    }

    #[test]
    fn test_untyped_has_no_tag() {
        let line = ParsedLine::Untyped("3C59X NETWORK DRIVER");
        assert_eq!(line.tag(), None);
        assert_eq!(line.content(), "3C59X NETWORK DRIVER");
    }
}

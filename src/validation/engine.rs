//! Validation Engine
//!
//! The single-pass loop: classify each body line, dispatch it to the check
//! for its tag, hand any finding to a reporter. Never stops on a finding.

use std::io::{self, BufRead};

use super::fs::GlobResolver;
use super::rules::{ParseContext, validate_file_glob, validate_status};
use crate::core::{Diagnostic, MaintainersDocument, Reporter};
use crate::error::Result;
use crate::parser::{ParsedLine, Tag, split_line};

/// Diagnostics collected from a whole document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl Reporter for ValidationResult {
    fn report(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        self.diagnostics.push(diagnostic.clone());
        Ok(())
    }
}

/// Line-by-line checker owning the cross-line state
#[derive(Debug)]
pub struct Validator<G> {
    resolver: G,
    context: ParseContext,
}

impl<G: GlobResolver> Validator<G> {
    pub fn new(resolver: G) -> Self {
        Self {
            resolver,
            context: ParseContext::new(),
        }
    }

    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    /// Check one body line, `raw` without its terminator
    pub fn check_line(&mut self, line_no: usize, raw: &str) -> Option<Diagnostic> {
        let parsed = split_line(raw);
        let message = match parsed {
            ParsedLine::Untyped(value) => self.context.check_title(value),
            ParsedLine::Tagged {
                tag: Tag::Status,
                content,
            } => validate_status(content),
            ParsedLine::Tagged { tag, content } if tag.is_file_glob() => {
                validate_file_glob(content, &self.resolver)
            }
            ParsedLine::Tagged { .. } => None,
        };

        message.map(|message| Diagnostic::new(line_no, message, raw))
    }
}

/// Validate a MAINTAINERS stream, sending every finding to `reporter`.
///
/// Returns how many diagnostics were reported. Fails only on I/O errors or
/// when the preamble separator is missing, in which case nothing has been
/// reported.
pub fn validate_reader<R, G>(reader: R, resolver: G, reporter: &mut dyn Reporter) -> Result<usize>
where
    R: BufRead,
    G: GlobResolver,
{
    let document = MaintainersDocument::open(reader)?;
    let mut validator = Validator::new(resolver);
    let mut count = 0;
    let mut lines_checked = 0;

    for line in document.lines() {
        let line = line?;
        lines_checked += 1;
        if let Some(diagnostic) = validator.check_line(line.number, &line.text) {
            reporter.report(&diagnostic)?;
            count += 1;
        }
    }

    log::info!("Checked {} lines, {} diagnostics", lines_checked, count);
    Ok(count)
}

/// Validate an in-memory document
pub fn validate_document<G: GlobResolver>(content: &str, resolver: G) -> Result<ValidationResult> {
    let mut result = ValidationResult::new();
    validate_reader(content.as_bytes(), resolver, &mut result)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SEPARATOR_LINE;
    use crate::error::CheckError;
    use crate::validation::fs::InMemoryTree;

    fn tree() -> InMemoryTree {
        InMemoryTree::new(["drivers/net/3c59x.c", "include/linux/acpi.h"])
    }

    #[test]
    fn test_validation_result() {
        let mut result = ValidationResult::new();
        assert!(result.is_valid());

        result
            .report(&Diagnostic::new(3, "Invalid S: value", "S:\tBroken"))
            .unwrap();
        assert!(!result.is_valid());
    }

    #[test]
    fn test_check_line_dispatch() {
        let mut validator = Validator::new(tree());

        assert_eq!(validator.check_line(1, "3C59X NETWORK DRIVER"), None);
        assert_eq!(validator.check_line(2, "M:\tJane Doe <jane@example.org>"), None);
        assert_eq!(validator.check_line(3, "S:\tMaintained"), None);
        assert_eq!(validator.check_line(4, "F:\tdrivers/net/3c59x.c"), None);
        assert_eq!(validator.check_line(5, "X:\tinclude/linux/*.h"), None);
        assert_eq!(validator.check_line(6, "N:\tno-such-regex"), None);
        assert_eq!(validator.check_line(7, ""), None);
        assert_eq!(validator.context().last_title, "3C59X NETWORK DRIVER");
    }

    #[test]
    fn test_check_line_findings() {
        let mut validator = Validator::new(tree());

        let diagnostic = validator.check_line(10, "S:\tActive").unwrap();
        assert_eq!(diagnostic, Diagnostic::new(10, "Invalid S: value", "S:\tActive"));

        let diagnostic = validator.check_line(11, "F:\tdrivers/scsi/*").unwrap();
        assert_eq!(diagnostic.message, "Glob pattern doesn't match any files");
        assert_eq!(diagnostic.text, "F:\tdrivers/scsi/*");

        let diagnostic = validator.check_line(12, "X:\tnothing/here").unwrap();
        assert_eq!(diagnostic.line, 12);

        let diagnostic = validator.check_line(13, "L:  netdev@vger.kernel.org").unwrap();
        assert_eq!(diagnostic.message, "Incorrect indentation");

        let diagnostic = validator.check_line(14, "Z:\tzzz").unwrap();
        assert_eq!(diagnostic.message, "Invalid type ':'");
    }

    #[test]
    fn test_tagged_lines_never_set_title() {
        let mut validator = Validator::new(tree());
        validator.check_line(1, "FIRST");
        validator.check_line(2, "T:\tgit git://example.org/tree.git");
        validator.check_line(3, "S:\tBroken");
        assert_eq!(validator.context().last_title, "FIRST");
    }

    #[test]
    fn test_validate_document_line_numbers() {
        let content = format!(
            "preamble\n{SEPARATOR_LINE}\nDRIVER\nS:\tBroken\nF:\tmissing.c\n\n"
        );
        let result = validate_document(&content, tree()).unwrap();

        let lines: Vec<_> = result.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![4, 5]);
    }

    #[test]
    fn test_validate_document_missing_separator() {
        let result = validate_document("DRIVER\nS:\tBroken\n", tree());
        assert!(matches!(result, Err(CheckError::MissingSeparator { .. })));
    }

    #[test]
    fn test_validate_reader_counts() {
        let content = format!("{SEPARATOR_LINE}\nA\nS:\tx\nS:\ty\n");
        let mut result = ValidationResult::new();
        let count = validate_reader(content.as_bytes(), tree(), &mut result).unwrap();
        assert_eq!(count, 2);
        assert_eq!(result.diagnostics.len(), 2);
    }
}

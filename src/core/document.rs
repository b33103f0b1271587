//! MAINTAINERS Document Reading
//!
//! Streams a MAINTAINERS file line by line: the free-text preamble is skipped
//! up to the separator line, then body lines are handed out with their
//! absolute line numbers.

use std::io::BufRead;

use crate::error::{CheckError, Result};

/// Line that ends the preamble (terminator not included)
pub const SEPARATOR_LINE: &str = "\t\t-----------------------------------";

/// Default input file name, relative to the working directory
pub const DEFAULT_FILE_NAME: &str = "MAINTAINERS";

/// A body line with its 1-based line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub number: usize,
    pub text: String,
}

/// Skip everything up to and including the separator line.
///
/// Returns the base line number: the counter starts at 1 and grows once per
/// preamble line that is not the separator, so it ends up as the line number
/// of the separator itself.
pub fn skip_preamble<R: BufRead>(reader: &mut R) -> Result<usize> {
    let mut base_line = 1;
    let mut buf = String::new();

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Err(CheckError::MissingSeparator {
                lines: base_line - 1,
            });
        }
        if is_separator(&buf) {
            log::debug!("Separator found on line {}", base_line);
            return Ok(base_line);
        }
        base_line += 1;
    }
}

/// The separator must be a complete line, terminator included
fn is_separator(raw: &str) -> bool {
    raw.strip_suffix('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .is_some_and(|line| line == SEPARATOR_LINE)
}

fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
    }
    if line.ends_with('\r') {
        line.pop();
    }
}

/// A MAINTAINERS file positioned just past its preamble
#[derive(Debug)]
pub struct MaintainersDocument<R> {
    reader: R,
    base_line: usize,
}

impl<R: BufRead> MaintainersDocument<R> {
    /// Consume the preamble. Fails if the separator never shows up.
    pub fn open(mut reader: R) -> Result<Self> {
        let base_line = skip_preamble(&mut reader)?;
        Ok(Self { reader, base_line })
    }

    /// Line number of the separator
    pub fn base_line(&self) -> usize {
        self.base_line
    }

    pub fn lines(self) -> BodyLines<R> {
        BodyLines {
            reader: self.reader,
            next_number: self.base_line + 1,
        }
    }
}

/// Iterator over the body lines following the separator
#[derive(Debug)]
pub struct BodyLines<R> {
    reader: R,
    next_number: usize,
}

impl<R: BufRead> Iterator for BodyLines<R> {
    type Item = Result<RawLine>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut text = String::new();
        match self.reader.read_line(&mut text) {
            Ok(0) => None,
            Ok(_) => {
                strip_terminator(&mut text);
                let number = self.next_number;
                self.next_number += 1;
                Some(Ok(RawLine { number, text }))
            }
            Err(e) => Some(Err(CheckError::from(e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn doc(text: &str) -> Cursor<&[u8]> {
        Cursor::new(text.as_bytes())
    }

    #[test]
    fn test_base_line_is_separator_line() {
        let text = format!("List of maintainers\n\nDescriptions\n{SEPARATOR_LINE}\nFIRST\n");
        let mut reader = doc(&text);
        assert_eq!(skip_preamble(&mut reader).unwrap(), 4);
    }

    #[test]
    fn test_separator_on_first_line() {
        let text = format!("{SEPARATOR_LINE}\n");
        let mut reader = doc(&text);
        assert_eq!(skip_preamble(&mut reader).unwrap(), 1);
    }

    #[test]
    fn test_missing_separator() {
        let mut reader = doc("preamble\nmore preamble\n");
        let err = skip_preamble(&mut reader).unwrap_err();
        assert!(matches!(err, CheckError::MissingSeparator { lines: 2 }));
    }

    #[test]
    fn test_empty_input() {
        let mut reader = doc("");
        let err = skip_preamble(&mut reader).unwrap_err();
        assert!(matches!(err, CheckError::MissingSeparator { lines: 0 }));
    }

    #[test]
    fn test_separator_without_terminator_does_not_count() {
        let text = format!("preamble\n{SEPARATOR_LINE}");
        let mut reader = doc(&text);
        assert!(skip_preamble(&mut reader).is_err());
    }

    #[test]
    fn test_near_separators_do_not_count() {
        let text = format!("\t{SEPARATOR_LINE}\n{SEPARATOR_LINE}-\n {SEPARATOR_LINE}\n");
        let mut reader = doc(&text);
        assert!(skip_preamble(&mut reader).is_err());
    }

    #[test]
    fn test_separator_is_thirty_five_dashes() {
        assert_eq!(SEPARATOR_LINE, format!("\t\t{}", "-".repeat(35)));

        let text = format!("preamble\n\t\t{}\n", "-".repeat(37));
        let mut reader = doc(&text);
        assert!(matches!(
            skip_preamble(&mut reader),
            Err(CheckError::MissingSeparator { lines: 2 })
        ));
    }

    #[test]
    fn test_crlf_separator() {
        let text = format!("preamble\r\n{SEPARATOR_LINE}\r\n");
        let mut reader = doc(&text);
        assert_eq!(skip_preamble(&mut reader).unwrap(), 2);
    }

    #[test]
    fn test_body_line_numbers() {
        let text = format!("a\nb\n{SEPARATOR_LINE}\nTITLE\r\nS:\tMaintained\n\nlast");
        let document = MaintainersDocument::open(doc(&text)).unwrap();
        assert_eq!(document.base_line(), 3);

        let lines: Vec<_> = document.lines().map(|l| l.unwrap()).collect();
        let expected = [
            (4, "TITLE"),
            (5, "S:\tMaintained"),
            (6, ""),
            (7, "last"),
        ];
        assert_eq!(lines.len(), expected.len());
        for (line, (number, text)) in lines.iter().zip(expected) {
            assert_eq!(line.number, number);
            assert_eq!(line.text, text);
        }
    }
}

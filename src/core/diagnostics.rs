//! Diagnostics and Reporters
//!
//! A [`Diagnostic`] is one problem found on one line. Reporters decide how
//! it reaches the user.

use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// A problem found on a single line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number in the file
    pub line: usize,
    pub message: String,
    /// The offending line, terminator stripped
    pub text: String,
}

impl Diagnostic {
    pub fn new(line: usize, message: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    /// Two-line report entry: location and message, then the tab-indented line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}\n\t{}", self.line, self.message, self.text)
    }
}

/// Sink for diagnostics produced by the validation loop
pub trait Reporter {
    fn report(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;
}

/// Human-readable output, the default format
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        writeln!(self.out, "{diagnostic}")
    }
}

/// One JSON object per line
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn report(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, diagnostic)?;
        writeln!(self.out)
    }
}

//! Core I/O
//!
//! Reading the MAINTAINERS document and reporting diagnostics.

pub mod diagnostics;
pub mod document;

pub use diagnostics::{Diagnostic, JsonReporter, Reporter, TextReporter};
pub use document::{BodyLines, DEFAULT_FILE_NAME, MaintainersDocument, RawLine, SEPARATOR_LINE};

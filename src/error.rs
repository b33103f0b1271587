//! Error types for checking a MAINTAINERS file
//!
//! Validation findings are not errors; they are reported as diagnostics.
//! These are the conditions that abort a run.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// Input ended before the preamble separator line
    #[error("unexpected end of input: separator line not found in {lines} lines")]
    MissingSeparator { lines: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, CheckError>;

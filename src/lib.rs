//! MAINTAINERS format checker
//!
//! Enforces the structural format of a MAINTAINERS file: record blocks of
//! tagged lines after a fixed separator, separated by blank lines.
//!
//! This library provides:
//! - Line classification of tagged fields
//! - Per-tag validation, including file globs checked against the tree
//! - Text and JSON reporting
//! - Configuration for the `checkmaintainers` binary

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod validation;

pub use config::Config;
pub use crate::core::Diagnostic;
pub use error::CheckError;
pub use parser::{ParsedLine, Tag, split_line};
pub use validation::{FsGlobResolver, GlobResolver, InMemoryTree, validate_document};

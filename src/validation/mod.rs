//! Validation Engine
//!
//! Per-tag rules, glob resolution, and the loop tying them together.

pub mod engine;
pub mod fs;
pub mod rules;

pub use engine::{ValidationResult, Validator, validate_document, validate_reader};
pub use fs::{FsGlobResolver, GlobResolver, InMemoryTree};
pub use rules::{ParseContext, validate_file_glob, validate_status, validate_title};

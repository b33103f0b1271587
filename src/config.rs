//! Configuration for the MAINTAINERS checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Input file and glob root selection
//! - Output format and exit policy

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::core::DEFAULT_FILE_NAME;

/// How diagnostics are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `Line <n>: <message>` followed by the tab-indented line
    #[default]
    Text,
    /// One JSON object per diagnostic
    Json,
}

/// Command-line arguments for the MAINTAINERS checker
#[derive(Debug, Parser)]
#[command(name = "checkmaintainers")]
#[command(about = "Enforce the format of the MAINTAINERS file")]
#[command(version)]
pub struct Args {
    /// File to check
    #[arg(default_value = DEFAULT_FILE_NAME)]
    pub file: PathBuf,

    /// Directory F: and X: globs are resolved against
    #[arg(long, help = "Directory F:/X: globs are resolved against (default: current directory)")]
    pub root: Option<PathBuf>,

    /// Output format for diagnostics
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with status 1 when any diagnostic is printed
    #[arg(long)]
    pub deny: bool,

    /// Log level for messages on stderr
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// MAINTAINERS file to read
    pub file: PathBuf,
    /// Glob root; empty means the working directory
    pub glob_root: PathBuf,
    pub format: OutputFormat,
    /// Fail the run when diagnostics were found
    pub deny: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_FILE_NAME),
            glob_root: PathBuf::new(),
            format: OutputFormat::Text,
            deny: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        if let Some(root) = &args.root {
            if !root.is_dir() {
                anyhow::bail!("glob root {} is not a directory", root.display());
            }
        }

        Ok(Config {
            file: args.file,
            glob_root: args.root.unwrap_or_default(),
            format: args.format,
            deny: args.deny,
            log_level: args.log_level,
        })
    }
}

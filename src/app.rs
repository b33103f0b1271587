//! Running a check from a [`Config`]
//!
//! Opens the MAINTAINERS file, wires the reporter for the chosen output
//! format and the filesystem glob resolver, then runs the validation loop.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::config::{Config, OutputFormat};
use crate::core::{JsonReporter, Reporter, TextReporter};
use crate::validation::{FsGlobResolver, validate_reader};

/// Check the configured file, printing diagnostics to stdout.
///
/// Returns the number of diagnostics printed.
pub fn run(config: &Config) -> Result<usize> {
    let stdout = io::stdout();
    check_file(config, stdout.lock())
}

/// Check the configured file, writing diagnostics to `out`
pub fn check_file<W: Write>(config: &Config, out: W) -> Result<usize> {
    let file = File::open(&config.file)
        .with_context(|| format!("failed to open {}", config.file.display()))?;
    log::debug!("Checking {}", config.file.display());

    let resolver = FsGlobResolver::new(config.glob_root.clone());
    let reader = BufReader::new(file);
    let out = BufWriter::new(out);

    let found = match config.format {
        OutputFormat::Text => {
            let mut reporter = TextReporter::new(out);
            let found = check_with(reader, &resolver, &mut reporter, &config.file)?;
            reporter.into_inner().flush()?;
            found
        }
        OutputFormat::Json => {
            let mut reporter = JsonReporter::new(out);
            let found = check_with(reader, &resolver, &mut reporter, &config.file)?;
            reporter.into_inner().flush()?;
            found
        }
    };

    Ok(found)
}

fn check_with<R: BufRead>(
    reader: R,
    resolver: &FsGlobResolver,
    reporter: &mut dyn Reporter,
    path: &Path,
) -> Result<usize> {
    validate_reader(reader, resolver, reporter)
        .with_context(|| format!("failed to check {}", path.display()))
}

//! Glob Resolution
//!
//! `F:` and `X:` values are file globs that must match something in the
//! source tree. Lookup goes through [`GlobResolver`] so the validation loop
//! never touches the filesystem directly.

use glob::{MatchOptions, Pattern};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// `*` and `?` stop at `/` and skip dot files, like shell globbing
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Answers whether a glob pattern matches anything
pub trait GlobResolver {
    /// An invalid pattern matches nothing.
    fn has_match(&self, pattern: &str) -> bool;
}

impl<T: GlobResolver + ?Sized> GlobResolver for &T {
    fn has_match(&self, pattern: &str) -> bool {
        (**self).has_match(pattern)
    }
}

/// A trailing `/` means "directories only"
fn split_dir_suffix(pattern: &str) -> (&str, bool) {
    let trimmed = pattern.trim_end_matches('/');
    if trimmed.is_empty() || trimmed.len() == pattern.len() {
        (pattern, false)
    } else {
        (trimmed, true)
    }
}

/// Rewrite shell-glob spellings the `glob` crate rejects.
///
/// A `**` that is not a whole path component is a plain `*`, and a `[`
/// with no closing `]` is a literal bracket.
fn normalize_pattern(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                let start = i;
                while i < chars.len() && chars[i] == '*' {
                    i += 1;
                }
                let starts_component = start == 0 || chars[start - 1] == '/';
                let ends_component = i == chars.len() || chars[i] == '/';
                if i - start == 2 && starts_component && ends_component {
                    out.push_str("**");
                } else {
                    out.push('*');
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end + 1;
                }
                None => {
                    out.push_str("[[]");
                    i += 1;
                }
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Index of the `]` closing the class opened at `open`. A `]` right after
/// `[` or `[!` is a member, not the end.
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut j = open + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j.min(chars.len())..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

/// Resolves globs against a directory on disk
#[derive(Debug, Clone, Default)]
pub struct FsGlobResolver {
    root: PathBuf,
}

impl FsGlobResolver {
    /// Resolve relative to `root`. An empty path means the working directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_pattern(&self, pattern: &str) -> String {
        if self.root.as_os_str().is_empty() || Path::new(pattern).is_absolute() {
            return pattern.to_string();
        }
        let root = Pattern::escape(&self.root.to_string_lossy());
        format!("{}/{}", root.trim_end_matches('/'), pattern)
    }
}

impl GlobResolver for FsGlobResolver {
    fn has_match(&self, pattern: &str) -> bool {
        let (pattern, dirs_only) = split_dir_suffix(pattern);
        let full = self.full_pattern(&normalize_pattern(pattern));

        let paths = match glob::glob_with(&full, MATCH_OPTIONS) {
            Ok(paths) => paths,
            Err(e) => {
                log::debug!("Invalid glob pattern '{}': {}", full, e);
                return false;
            }
        };

        let found = paths
            .filter_map(|entry| entry.ok())
            .any(|path| !dirs_only || path.is_dir());
        log::debug!("Glob '{}' matched: {}", full, found);
        found
    }
}

/// A fixed list of file paths, for tests and callers that already hold a
/// file listing. Parent directories of every file exist implicitly.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTree {
    files: BTreeSet<String>,
    dirs: BTreeSet<String>,
}

impl InMemoryTree {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = Self::default();
        for file in files {
            tree.add_file(file);
        }
        tree
    }

    pub fn add_file(&mut self, path: impl Into<String>) {
        let path = path.into();
        let mut dir = Path::new(&path).parent();
        while let Some(parent) = dir {
            if parent.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(parent.to_string_lossy().into_owned());
            dir = parent.parent();
        }
        self.files.insert(path);
    }
}

impl GlobResolver for InMemoryTree {
    fn has_match(&self, pattern: &str) -> bool {
        let (pattern, dirs_only) = split_dir_suffix(pattern);
        let Ok(compiled) = Pattern::new(&normalize_pattern(pattern)) else {
            return false;
        };

        let matches = |path: &String| compiled.matches_with(path, MATCH_OPTIONS);
        if dirs_only {
            self.dirs.iter().any(matches)
        } else {
            self.files.iter().chain(self.dirs.iter()).any(matches)
        }
    }
}

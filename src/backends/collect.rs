//! File collection
//!
//! Expands an extraction rule's glob patterns against the root directory.
//! A pattern that matches nothing yields an empty list, not an error.

use globset::{Glob, GlobSetBuilder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::SnipError;

/// Resolve relative glob `patterns` under `root` to existing files.
///
/// Each file appears once even when several patterns match it. Results are
/// sorted for stable processing order; callers must not rely on anything
/// beyond that stability.
pub fn collect_files(root: &Path, patterns: &[&str]) -> Result<Vec<PathBuf>, SnipError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    let set = builder.build()?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = match entry.path().strip_prefix(root) {
            Ok(r) => r,
            Err(_) => continue,
        };
        if set.is_match(relative) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

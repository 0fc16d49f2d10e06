//! Shortcode data model
//!
//! A run folds everything it extracts into one `ShortcodeMap` keyed by
//! `<highlight>_<id>` (or `tree_<id>` for directory snapshots), then writes
//! one file per entry. The map is the only intermediate state and is
//! dropped once the write phase finishes.

use serde::Serialize;
use std::collections::BTreeMap;

/// A named region extracted from a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Identifier captured after the start marker (`[0-9a-zA-Z_]*`).
    pub id: String,

    /// Indent-normalized text between the markers.
    pub body: String,
}

/// A shortcode body plus the language tag for its code fence.
#[derive(Debug, Clone, Serialize)]
pub struct Shortcode {
    pub body: String,
    pub highlight: String,
}

/// Keyed accumulator for one run. Inserting under an existing key replaces
/// the earlier entry (last write wins, no collision error).
pub type ShortcodeMap = BTreeMap<String, Shortcode>;

/// Mapping key for an extracted block or full-file listing.
pub fn shortcode_key(highlight: &str, id: &str) -> String {
    format!("{}_{}", highlight, id)
}

/// Mapping key for a directory tree snapshot.
pub fn tree_key(id: &str) -> String {
    format!("tree_{}", id)
}

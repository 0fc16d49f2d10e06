//! List flow
//!
//! Builds the shortcode map without writing any files and emits a JSONL
//! inventory, one record per key.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::backends::tree::TreeCommand;
use crate::config::SiteConfig;
use crate::flows::generate::build_map;

#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    key: &'a str,
    highlight: &'a str,
    lines: usize,
    bytes: usize,
}

/// Run the list command.
pub fn run_list(root: &Path, config: &SiteConfig, tree: &dyn TreeCommand) -> Result<()> {
    let map = build_map(root, config, tree)?;

    for (key, shortcode) in &map {
        let entry = ListEntry {
            key,
            highlight: &shortcode.highlight,
            lines: shortcode.body.lines().count(),
            bytes: shortcode.body.len(),
        };
        println!("{}", serde_json::to_string(&entry)?);
    }

    Ok(())
}

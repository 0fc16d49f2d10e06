//! Generate flow
//!
//! The end-to-end pipeline: resolve each rule's globs, validate and extract
//! every matched file, fold full-file and tree entries into the same map,
//! then write one fenced shortcode file per key.
//!
//! Rules run strictly in configuration order and files sequentially within
//! a rule, so a later file's block replaces an earlier one under the same
//! key. Any failure aborts the run; files already written stay on disk.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::backends::collect::collect_files;
use crate::backends::tree::TreeCommand;
use crate::config::{SiteConfig, OUTPUT_EXT, OUTPUT_PREFIX, TREE_HIGHLIGHT};
use crate::core::model::{shortcode_key, tree_key, Shortcode, ShortcodeMap};
use crate::snippets::balance::check_balance;
use crate::snippets::extract::extract_blocks;

/// Trailing newlines are dropped from a body before it is fenced.
static TRAILING_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n+\z").expect("valid trailing-newline regex"));

/// Build the shortcode map for `config` under `root`.
pub fn build_map(
    root: &Path,
    config: &SiteConfig,
    tree: &dyn TreeCommand,
) -> Result<ShortcodeMap> {
    let mut map = ShortcodeMap::new();

    for rule in config.extract {
        let files = collect_files(root, rule.patterns)?;
        log::debug!("{} file(s) matched for '{}' rule", files.len(), rule.highlight);

        for path in files {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;

            check_balance(&content, rule.start, rule.end)
                .with_context(|| format!("unbalanced snippet markers in {}", path.display()))?;

            let blocks = extract_blocks(&content, rule.start, rule.end)?;
            log::debug!("{} block(s) in {}", blocks.len(), path.display());

            for block in blocks {
                map.insert(
                    shortcode_key(rule.highlight, &block.id),
                    Shortcode {
                        body: block.body,
                        highlight: rule.highlight.to_string(),
                    },
                );
            }
        }
    }

    for rule in config.full_files {
        let path = root.join(rule.path);
        log::debug!("full file '{}' from {}", rule.id, path.display());

        let body = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;

        map.insert(
            shortcode_key(rule.highlight, rule.id),
            Shortcode {
                body,
                highlight: rule.highlight.to_string(),
            },
        );
    }

    for rule in config.trees {
        log::debug!("tree '{}'", rule.id);

        let body = tree.render(&root.join(rule.path))?;
        map.insert(
            tree_key(rule.id),
            Shortcode {
                body,
                highlight: TREE_HIGHLIGHT.to_string(),
            },
        );
    }

    Ok(map)
}

/// Write one `gen_<key>.html` per map entry into `out_dir`, creating the
/// directory (and missing parents) first. Existing files are overwritten.
pub fn write_shortcodes(map: &ShortcodeMap, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    for (key, shortcode) in map {
        let file = out_dir.join(format!("{}{}.{}", OUTPUT_PREFIX, key, OUTPUT_EXT));
        log::debug!("writing {}", file.display());

        let body = TRAILING_NEWLINES.replace(&shortcode.body, "");
        let content = format!("```{}\n{}\n```", shortcode.highlight, body);
        fs::write(&file, content).with_context(|| format!("writing {}", file.display()))?;
    }

    Ok(())
}

/// Run the generate command.
pub fn run_generate(
    root: &Path,
    out_dir: &Path,
    config: &SiteConfig,
    tree: &dyn TreeCommand,
) -> Result<()> {
    let map = build_map(root, config, tree)?;
    write_shortcodes(&map, out_dir)?;
    log::info!("{} shortcode(s) written to {}", map.len(), out_dir.display());
    Ok(())
}

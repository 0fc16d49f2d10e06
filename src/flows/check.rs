//! Check flow
//!
//! Balance-checks every file matched by every extraction rule and prints
//! one JSONL issue record per unbalanced file. Unlike generate, the scan
//! does not stop at the first mismatch; the command exits non-zero when
//! any file fails.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::backends::collect::collect_files;
use crate::config::SiteConfig;
use crate::core::error::SnipError;
use crate::snippets::balance::check_balance;

/// One unbalanced file.
#[derive(Debug, Serialize)]
pub struct BalanceIssue {
    /// Path relative to root, '/'-separated.
    pub path: String,
    pub starts: usize,
    pub ends: usize,
}

/// Collect balance issues across all extraction rules.
pub fn find_issues(root: &Path, config: &SiteConfig) -> Result<Vec<BalanceIssue>> {
    let mut issues = Vec::new();

    for rule in config.extract {
        for path in collect_files(root, rule.patterns)? {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;

            match check_balance(&content, rule.start, rule.end) {
                Ok(()) => {}
                Err(SnipError::BalanceMismatch { starts, ends }) => {
                    let relative = path.strip_prefix(root).unwrap_or(&path);
                    issues.push(BalanceIssue {
                        path: relative.to_string_lossy().replace('\\', "/"),
                        starts,
                        ends,
                    });
                }
                Err(other) => return Err(other.into()),
            }
        }
    }

    Ok(issues)
}

/// Run the check command.
pub fn run_check(root: &Path, config: &SiteConfig) -> Result<()> {
    let issues = find_issues(root, config)?;

    for issue in &issues {
        println!("{}", serde_json::to_string(issue)?);
    }

    if !issues.is_empty() {
        bail!("{} file(s) with unbalanced snippet markers", issues.len());
    }

    log::info!("all snippet markers balanced");
    Ok(())
}

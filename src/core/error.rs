//! Error kinds for the extraction pipeline
//!
//! Every failure is fatal: it bubbles unrecovered to main() and the process
//! exits non-zero. Output files written before the failure stay on disk.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnipError {
    /// A file opens more snippet regions than it closes, or vice versa.
    #[error("marker count mismatch: {starts} start marker(s), {ends} end marker(s)")]
    BalanceMismatch { starts: usize, ends: usize },

    /// The external tree command wrote to its error stream.
    #[error("tree command failed: {0}")]
    TreeCommand(String),

    /// A marker in the static configuration does not compile as a regex.
    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A glob in the static configuration does not compile.
    #[error("invalid glob pattern: {0}")]
    Glob(#[from] globset::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

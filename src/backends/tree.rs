//! Directory tree rendering
//!
//! Shells out to the external `tree` utility with fixed flags and captures
//! its output. The command sits behind a trait so the flows stay testable
//! without the binary installed.

use std::path::Path;
use std::process::Command;

use crate::core::error::SnipError;

/// External directory-listing collaborator.
pub trait TreeCommand {
    /// Render the directory at `path` as UTF-8 box-drawing text, without
    /// the root line or the trailing summary line.
    fn render(&self, path: &Path) -> Result<String, SnipError>;
}

/// The real `tree` invocation: respect ignore files, UTF-8 charset, prune
/// empty directories.
pub struct SystemTree;

impl TreeCommand for SystemTree {
    fn render(&self, path: &Path) -> Result<String, SnipError> {
        log::debug!("running tree for {}", path.display());

        let output = Command::new("tree")
            .args(["--gitignore", "--charset", "utf-8", "--prune"])
            .arg(path)
            .output()?;

        // Anything on stderr fails the run, propagated verbatim.
        if !output.stderr.is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(SnipError::TreeCommand(stderr));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(trim_listing(&stdout))
    }
}

/// Drop the first line (the root path echo) and the last line (the
/// "N directories, M files" summary) from raw tree output.
pub fn trim_listing(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    if lines.len() <= 2 {
        return String::new();
    }
    lines[1..lines.len() - 1].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_listing_drops_first_and_last_lines() {
        let raw = "java-jakarta-mail\n├── pom.xml\n└── src\n\n2 directories, 1 file\n";
        assert_eq!(trim_listing(raw), "├── pom.xml\n└── src\n");
    }

    #[test]
    fn test_trim_listing_short_output_is_empty() {
        assert_eq!(trim_listing(""), "");
        assert_eq!(trim_listing("root\n"), "");
        assert_eq!(trim_listing("root\n0 directories\n"), "");
    }
}

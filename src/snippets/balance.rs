//! Marker balance validation
//!
//! A file must open exactly as many snippet regions as it closes. This gate
//! runs before extraction; a mismatch aborts the whole run.

use regex::Regex;

use crate::core::error::SnipError;

/// Non-overlapping occurrences of `pattern` in `text`. The marker text is
/// compiled as a regex verbatim, the same way the extraction scan reads it.
fn count_matches(text: &str, pattern: &str) -> Result<usize, SnipError> {
    Ok(Regex::new(pattern)?.find_iter(text).count())
}

/// Validate that start and end markers pair up, reporting both counts when
/// they do not. Success carries no data.
pub fn check_balance(text: &str, start: &str, end: &str) -> Result<(), SnipError> {
    let starts = count_matches(text, start)?;
    let ends = count_matches(text, end)?;

    if starts != ends {
        return Err(SnipError::BalanceMismatch { starts, ends });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_file_passes() {
        let content = "//<gen>a\nx\n//</gen>\n//<gen>b\ny\n//</gen>\n";
        assert!(check_balance(content, "//<gen>", "//</gen>").is_ok());
    }

    #[test]
    fn test_empty_file_passes() {
        assert!(check_balance("", "//<gen>", "//</gen>").is_ok());
    }

    #[test]
    fn test_mismatch_reports_both_counts() {
        let content = "//<gen>a\nx\n//</gen>\n//<gen>b\ny\n";
        let err = check_balance(content, "//<gen>", "//</gen>").unwrap_err();
        match err {
            SnipError::BalanceMismatch { starts, ends } => {
                assert_eq!(starts, 2);
                assert_eq!(ends, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_end_marker_does_not_count_as_start() {
        // `<gen>` must not match inside `</gen>`.
        let content = "<gen>a\nx\n</gen>\n";
        assert!(check_balance(content, "<gen>", "</gen>").is_ok());
    }

    #[test]
    fn test_stray_end_marker_fails() {
        let content = "x\n#</gen>\n";
        let err = check_balance(content, "#<gen>", "#</gen>").unwrap_err();
        match err {
            SnipError::BalanceMismatch { starts, ends } => {
                assert_eq!(starts, 0);
                assert_eq!(ends, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

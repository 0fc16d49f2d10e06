//! Indent normalization
//!
//! Snippets are usually taken from nested code; removing the common leading
//! whitespace makes them render flush-left in the docs.

use regex::Regex;

/// Length of the shortest leading space/tab run across all lines that carry
/// at least one non-whitespace character. 0 when no line does.
pub fn min_indent(text: &str) -> usize {
    text.lines()
        .filter_map(|line| {
            let rest = line.trim_start_matches([' ', '\t']);
            if rest.is_empty() {
                None
            } else {
                Some(line.len() - rest.len())
            }
        })
        .min()
        .unwrap_or(0)
}

/// Strip the common indent from every line.
///
/// Lines with fewer leading whitespace characters than the common indent
/// (blank lines, typically) are left untouched: the stripping regex only
/// matches lines that carry the full run.
pub fn strip_indent(text: &str) -> String {
    let indent = min_indent(text);
    if indent == 0 {
        return text.to_string();
    }

    let re = Regex::new(&format!(r"(?m)^[ \t]{{{}}}", indent)).expect("valid indent regex");
    re.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_indent_ignores_blank_lines() {
        assert_eq!(min_indent("    a\n\n      b\n"), 4);
        assert_eq!(min_indent("\t\tx\n\ty\n"), 1);
    }

    #[test]
    fn test_min_indent_no_content() {
        assert_eq!(min_indent(""), 0);
        assert_eq!(min_indent("   \n\t\n"), 0);
    }

    #[test]
    fn test_strip_uniform_prefix() {
        assert_eq!(strip_indent("    a\n    b\n"), "a\nb\n");
    }

    #[test]
    fn test_strip_keeps_relative_indent() {
        assert_eq!(strip_indent("  outer\n    inner\n"), "outer\n  inner\n");
    }

    #[test]
    fn test_strip_zero_indent_unchanged() {
        let text = "a\n  b\n";
        assert_eq!(strip_indent(text), text);
    }

    #[test]
    fn test_strip_leaves_short_blank_lines() {
        // The blank line has no 4-space run to strip.
        assert_eq!(strip_indent("    a\n\n    b\n"), "a\n\nb\n");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let text = "      const x = 1;\n        const y = 2;\n";
        let once = strip_indent(text);
        assert_eq!(strip_indent(&once), once);
    }
}

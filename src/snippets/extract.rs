//! Snippet extraction
//!
//! Finds every `<start><id> ... <end>` region in a file's text. The scan is
//! per-identifier and always restarts from the top of the file; it never
//! carries a parse position from one identifier to the next. A file that
//! opens the same id twice therefore yields one block per delimited region,
//! and the orchestrator's last-write-wins merge keeps the final one.

use regex::Regex;
use std::collections::HashSet;

use crate::core::error::SnipError;
use crate::core::model::Block;
use crate::snippets::indent::strip_indent;

/// Identifier charset accepted directly after a start marker.
const ID_PATTERN: &str = "[0-9a-zA-Z_]*";

/// Extract all delimited blocks from `content`, in region order per
/// identifier. Bodies are indent-normalized; markers are not included.
pub fn extract_blocks(content: &str, start: &str, end: &str) -> Result<Vec<Block>, SnipError> {
    let key_re = Regex::new(&format!("{}({})", start, ID_PATTERN))?;

    let mut blocks = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for caps in key_re.captures_iter(content) {
        let id = caps[1].to_string();

        // The whole-file scan below already collects every region of this
        // id, so a repeated opening needs no second scan.
        if !seen.insert(id.clone()) {
            continue;
        }

        let block_re = Regex::new(&format!(r"{}{}[\r\n]*([\s\S]+?){}", start, id, end))?;
        log::debug!("scanning for snippet id '{}'", id);

        for m in block_re.captures_iter(content) {
            let raw = &m[1];
            // Defensive truncation at the first end marker in case the
            // capture over-matched.
            let body = raw.split(end).next().unwrap_or(raw);
            blocks.push(Block {
                id: id.clone(),
                body: strip_indent(body),
            });
        }
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_c_style_block() {
        let content = "//<gen>foo\nhello\n//</gen>\n";
        let blocks = extract_blocks(content, "//<gen>", "//</gen>").unwrap();

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, "foo");
        assert_eq!(blocks[0].body, "hello\n");
    }

    #[test]
    fn test_duplicate_id_yields_one_block_per_region() {
        let content = "//<gen>a\nX\n//</gen>\n//<gen>a\nY\n//</gen>\n";
        let blocks = extract_blocks(content, "//<gen>", "//</gen>").unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].id, "a");
        assert_eq!(blocks[0].body, "X\n");
        assert_eq!(blocks[1].id, "a");
        assert_eq!(blocks[1].body, "Y\n");
    }

    #[test]
    fn test_interleaved_ids_group_by_first_occurrence() {
        let content = "//<gen>a\nX\n//</gen>\n//<gen>b\nZ\n//</gen>\n//<gen>a\nY\n//</gen>\n";
        let blocks = extract_blocks(content, "//<gen>", "//</gen>").unwrap();

        let pairs: Vec<(&str, &str)> = blocks
            .iter()
            .map(|b| (b.id.as_str(), b.body.as_str()))
            .collect();
        assert_eq!(pairs, vec![("a", "X\n"), ("a", "Y\n"), ("b", "Z\n")]);
    }

    #[test]
    fn test_body_is_indent_normalized() {
        let content = "describe(() => {\n    //<gen>nested\n    const x = 1;\n      const y = 2;\n    //</gen>\n});\n";
        let blocks = extract_blocks(content, "//<gen>", "//</gen>").unwrap();

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "const x = 1;\n  const y = 2;\n");
    }

    #[test]
    fn test_bare_markers() {
        let content = "package main\n\n<gen>smtp_dial\nclient.Hello()\n</gen>\n";
        let blocks = extract_blocks(content, "<gen>", "</gen>").unwrap();

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].id, "smtp_dial");
        assert_eq!(blocks[0].body, "client.Hello()\n");
    }

    #[test]
    fn test_hash_and_quote_markers() {
        let r = "#<gen>send_email\nsend.email(email)\n#</gen>\n";
        let blocks = extract_blocks(r, "#<gen>", "#</gen>").unwrap();
        assert_eq!(blocks[0].id, "send_email");

        let vb = "'<gen>create_inbox\nDim inbox As Inbox\n'</gen>\n";
        let blocks = extract_blocks(vb, "'<gen>", "'</gen>").unwrap();
        assert_eq!(blocks[0].id, "create_inbox");
        assert_eq!(blocks[0].body, "Dim inbox As Inbox\n");
    }

    #[test]
    fn test_identifier_is_maximal_word_run() {
        let content = "//<gen>wait_for_sms(1)\nbody\n//</gen>\n";
        let blocks = extract_blocks(content, "//<gen>", "//</gen>").unwrap();

        assert_eq!(blocks[0].id, "wait_for_sms");
    }

    #[test]
    fn test_no_markers_no_blocks() {
        let blocks = extract_blocks("plain text\n", "//<gen>", "//</gen>").unwrap();
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_crlf_after_identifier_is_consumed() {
        let content = "//<gen>win\r\nline\r\n//</gen>\r\n";
        let blocks = extract_blocks(content, "//<gen>", "//</gen>").unwrap();

        assert_eq!(blocks[0].id, "win");
        assert_eq!(blocks[0].body, "line\r\n");
    }
}

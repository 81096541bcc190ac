//! Front-matter parsing.

use super::types::{Frontmatter, ParsedDocument};

const DELIMITER: &str = "---";

/// Split `content` into front matter and body.
///
/// Front matter is recognised only when the first line is exactly `---` and
/// a later line is exactly `---`:
/// ```markdown
/// ---
/// kind: project
/// ---
///
/// # Document content
/// ```
/// Enclosed lines are split on their first colon with both sides trimmed;
/// lines without a colon are ignored. One blank line directly after the
/// closing delimiter is dropped from the body.
pub fn parse(content: &str) -> ParsedDocument {
    let (first, mut remaining) = split_first_line(content);
    if first != DELIMITER {
        return ParsedDocument::without_frontmatter(content);
    }

    let mut frontmatter = Frontmatter::new();
    let mut consumed = 1;

    let body = loop {
        if remaining.is_empty() {
            // No closing ---, treat as no front matter
            return ParsedDocument::without_frontmatter(content);
        }
        let (line, next) = split_first_line(remaining);
        consumed += 1;
        if line == DELIMITER {
            break next;
        }
        if let Some((key, value)) = line.split_once(':') {
            frontmatter.insert(key.trim().to_string(), value.trim().to_string());
        }
        remaining = next;
    };

    let body = match body.strip_prefix('\n').or_else(|| body.strip_prefix("\r\n")) {
        Some(stripped) => {
            consumed += 1;
            stripped
        }
        None => body,
    };

    ParsedDocument { frontmatter, body: body.to_string(), body_line_offset: consumed }
}

/// Split off the first line, without its terminator, from the rest of `s`.
fn split_first_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(i) => {
            let line = &s[..i];
            (line.strip_suffix('\r').unwrap_or(line), &s[i + 1..])
        }
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_no_frontmatter() {
        let content = "# Hello\n\nSome content";
        let result = parse(content);
        assert!(result.frontmatter.is_empty());
        assert_eq!(result.body, content);
        assert_eq!(result.body_line_offset, 0);
    }

    #[test]
    fn parse_simple_key_values() {
        let content = "---\ncreated: 2024-08-13\ncompleted: \nkind: product\n---\n\nBody";
        let result = parse(content);
        assert_eq!(result.frontmatter.get("created").map(String::as_str), Some("2024-08-13"));
        assert_eq!(result.frontmatter.get("completed").map(String::as_str), Some(""));
        assert_eq!(result.frontmatter.get("kind").map(String::as_str), Some("product"));
        assert_eq!(result.body, "Body");
        assert_eq!(result.body_line_offset, 6);
    }

    #[test]
    fn parse_splits_on_first_colon_only() {
        let content = "---\nurl: https://example.com:8080/x\n---\nBody";
        let result = parse(content);
        assert_eq!(
            result.frontmatter.get("url").map(String::as_str),
            Some("https://example.com:8080/x")
        );
        assert_eq!(result.body, "Body");
        assert_eq!(result.body_line_offset, 3);
    }

    #[test]
    fn parse_ignores_lines_without_colon() {
        let content = "---\njust words\nkind: note\n---\nBody";
        let result = parse(content);
        assert_eq!(result.frontmatter.len(), 1);
        assert_eq!(result.frontmatter.get("kind").map(String::as_str), Some("note"));
    }

    #[test]
    fn parse_strips_at_most_one_blank_line() {
        let content = "---\nkind: note\n---\n\n\nBody";
        let result = parse(content);
        assert_eq!(result.body, "\nBody");
        assert_eq!(result.body_line_offset, 4);
    }

    #[test]
    fn parse_empty_frontmatter() {
        let content = "---\n---\n# Content";
        let result = parse(content);
        assert!(result.frontmatter.is_empty());
        assert_eq!(result.body, "# Content");
    }

    #[test]
    fn parse_unclosed_frontmatter_is_body() {
        let content = "---\nkind: project\n# Heading\n";
        let result = parse(content);
        assert!(result.frontmatter.is_empty());
        assert_eq!(result.body, content);
        assert_eq!(result.body_line_offset, 0);
    }

    #[test]
    fn parse_requires_delimiter_on_first_line() {
        let content = "\n---\nkind: project\n---\nBody";
        let result = parse(content);
        assert!(result.frontmatter.is_empty());
        assert_eq!(result.body, content);
    }

    #[test]
    fn parse_closing_delimiter_at_eof() {
        let result = parse("---\nkind: project\n---");
        assert_eq!(result.frontmatter.get("kind").map(String::as_str), Some("project"));
        assert_eq!(result.body, "");
    }

    #[test]
    fn parse_crlf_line_endings() {
        let content = "---\r\nkind: project\r\n---\r\n\r\nBody\r\n";
        let result = parse(content);
        assert_eq!(result.frontmatter.get("kind").map(String::as_str), Some("project"));
        assert_eq!(result.body, "Body\r\n");
        assert_eq!(result.body_line_offset, 4);
    }

    #[test]
    fn later_duplicate_key_wins() {
        let result = parse("---\nkind: a\nkind: b\n---\n");
        assert_eq!(result.frontmatter.get("kind").map(String::as_str), Some("b"));
    }
}

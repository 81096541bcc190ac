//! Front-matter types.

use std::collections::BTreeMap;

/// Flat front-matter mapping.
///
/// Ordered so that anything derived from it (search text in particular) is
/// deterministic across runs.
pub type Frontmatter = BTreeMap<String, String>;

/// Result of splitting front matter from a markdown document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Parsed key/value pairs. Empty when the document has no front matter.
    pub frontmatter: Frontmatter,
    /// The markdown body (everything after the front matter).
    pub body: String,
    /// Number of source lines that precede the first line of `body`.
    pub body_line_offset: usize,
}

impl ParsedDocument {
    /// A document with no recognised front matter; the body is the whole text.
    pub fn without_frontmatter(content: &str) -> Self {
        Self { frontmatter: Frontmatter::new(), body: content.to_string(), body_line_offset: 0 }
    }
}

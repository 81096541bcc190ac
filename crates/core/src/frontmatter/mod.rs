//! Front-matter extraction from markdown documents.
//!
//! Front matter here is a flat `key: value` preamble fenced by `---` lines.
//! Extraction never fails: anything that does not look like a complete
//! preamble is treated as body text.

pub mod parser;
pub mod types;

pub use parser::parse;
pub use types::{Frontmatter, ParsedDocument};

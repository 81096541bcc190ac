//! Markdown file discovery.
//!
//! Walks a root directory and returns the markdown files to index, in a
//! stable order.

pub mod walker;

pub use walker::{VaultWalker, VaultWalkerError, WalkedFile};

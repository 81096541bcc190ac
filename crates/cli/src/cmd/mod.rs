pub mod index;
pub mod list;
pub mod output;
pub mod query;

use std::path::Path;

use taskgraph_core::index::{IndexFile, IndexStore, StoreError};

/// Load the index for a read-only command, reporting failures on stderr.
///
/// Returns `None` when the command should exit with status 1.
pub(crate) fn load_index(path: &Path) -> Option<IndexFile> {
    match IndexStore::load(path) {
        Ok(index) => Some(index),
        Err(StoreError::NotFound(_)) => {
            eprintln!("Index not found at {}", path.display());
            eprintln!("Run: taskgraph index <dir> [--out <path>]");
            None
        }
        Err(e) => {
            eprintln!("Error loading index: {e}");
            None
        }
    }
}

//! Task index: building, persisting and searching task nodes.
//!
//! This module provides:
//! - Node building from markdown documents (headings and checkbox items)
//! - JSON persistence of the full node collection
//! - Ranked free-text search over loaded nodes
//!
//! # Example
//!
//! ```no_run
//! use taskgraph_core::index::{IndexBuilder, IndexFile, IndexStore, SearchEngine};
//! use std::path::Path;
//!
//! let run = IndexBuilder::new(Path::new("notes")).full_reindex(None).unwrap();
//! IndexStore::save(Path::new("data/index.json"), &IndexFile::new(run.nodes)).unwrap();
//!
//! let index = IndexStore::load(Path::new("data/index.json")).unwrap();
//! let engine = SearchEngine::new(&index.nodes);
//! for hit in engine.search("deploy", 10) {
//!     println!("{} ({})", hit.node.context, hit.score);
//! }
//! ```

pub mod builder;
pub mod search;
pub mod store;
pub mod types;

pub use builder::{
    BuilderError, IndexBuilder, IndexOptions, IndexRun, IndexStats, ProgressCallback,
    file_title, index_markdown,
};
pub use search::{
    DEFAULT_LIMIT, SearchEngine, SearchHit, checklist_items, score_match, tokenize,
};
pub use store::{DEFAULT_INDEX_PATH, IndexStore, StoreError};
pub use types::{
    CONTEXT_SEPARATOR, IndexFile, NodeKind, TaskNode, TaskState, build_search_text,
};

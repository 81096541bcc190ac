//! JSON persistence for the task index.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::IndexFile;

/// Default location of the persisted index, relative to the working directory.
pub const DEFAULT_INDEX_PATH: &str = "data/index.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("index not found at {0}")]
    NotFound(String),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read index {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write index {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse index {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize index: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Reads and writes the `{ "nodes": [...] }` index document.
pub struct IndexStore;

impl IndexStore {
    /// Write `index` to `path`, replacing any previous index as a whole.
    ///
    /// Missing parent directories are created. The document is written to a
    /// sibling temporary file first and renamed into place.
    pub fn save(path: &Path, index: &IndexFile) -> Result<(), StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDir {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(index).map_err(StoreError::Serialize)?;

        let tmp = temp_path(path);
        let write_err =
            |e| StoreError::Write { path: path.display().to_string(), source: e };
        fs::write(&tmp, json).map_err(write_err)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(e));
        }

        tracing::debug!(path = %path.display(), nodes = index.nodes.len(), "index saved");
        Ok(())
    }

    /// Load the index at `path`.
    ///
    /// A missing file is reported as [`StoreError::NotFound`]; nothing is
    /// created on disk.
    pub fn load(path: &Path) -> Result<IndexFile, StoreError> {
        if !path.exists() {
            return Err(StoreError::NotFound(path.display().to_string()));
        }

        let raw = fs::read_to_string(path)
            .map_err(|e| StoreError::Read { path: path.display().to_string(), source: e })?;

        let index: IndexFile = serde_json::from_str(&raw)
            .map_err(|e| StoreError::Parse { path: path.display().to_string(), source: e })?;

        tracing::debug!(path = %path.display(), nodes = index.nodes.len(), "index loaded");
        Ok(index)
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

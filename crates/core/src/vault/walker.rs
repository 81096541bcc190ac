//! Markdown discovery under an index root.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into, besides dot-prefixed entries.
const SKIPPED_DIRS: &[&str] = &["node_modules", "target", "__pycache__", "venv"];

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("index root does not exist: {0}")]
    MissingRoot(String),

    #[error("index root is not a directory: {0}")]
    NotADirectory(String),

    #[error("failed to traverse {0}: {1}")]
    Traverse(String, #[source] walkdir::Error),
}

/// A markdown file found by [`VaultWalker::walk`].
#[derive(Debug, Clone)]
pub struct WalkedFile {
    pub absolute_path: PathBuf,
    /// Path below the walked root; the index key is derived from it.
    pub relative_path: PathBuf,
}

#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    excluded: Vec<PathBuf>,
}

impl VaultWalker {
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Walker that also leaves out `excluded` folders.
    ///
    /// Exclusions are relative to `root`; absolute ones inside the root are
    /// rebased onto it.
    pub fn with_exclusions(
        root: &Path,
        excluded: Vec<PathBuf>,
    ) -> Result<Self, VaultWalkerError> {
        let root = root
            .canonicalize()
            .map_err(|_| VaultWalkerError::MissingRoot(root.display().to_string()))?;
        if !root.is_dir() {
            return Err(VaultWalkerError::NotADirectory(root.display().to_string()));
        }

        let excluded = excluded
            .into_iter()
            .map(|p| match p.strip_prefix(&root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => p,
            })
            .collect();

        Ok(Self { root, excluded })
    }

    /// Every markdown file under the root, ordered by relative path.
    ///
    /// Symlinks are not followed.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, VaultWalkerError> {
        let mut files = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.skips(e))
            .filter_map(|entry| match entry {
                Ok(e) if e.file_type().is_file() && is_markdown(e.path()) => {
                    Some(Ok(self.walked(e.into_path())))
                }
                Ok(_) => None,
                Err(e) => {
                    Some(Err(VaultWalkerError::Traverse(self.root.display().to_string(), e)))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Ok(files)
    }

    fn skips(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()) {
            return true;
        }
        entry
            .path()
            .strip_prefix(&self.root)
            .is_ok_and(|rel| self.excluded.iter().any(|ex| rel.starts_with(ex)))
    }

    fn walked(&self, absolute_path: PathBuf) -> WalkedFile {
        let relative_path =
            absolute_path.strip_prefix(&self.root).unwrap_or(&absolute_path).to_path_buf();
        WalkedFile { absolute_path, relative_path }
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("md"))
}

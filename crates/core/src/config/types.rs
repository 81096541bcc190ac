use std::path::PathBuf;

use serde::Deserialize;

use crate::index::{DEFAULT_INDEX_PATH, DEFAULT_LIMIT};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct IndexConfig {
    /// Where the index is written and read.
    #[serde(default = "default_index_path")]
    pub path: String,
    /// Skip unreadable files instead of aborting the index run.
    #[serde(default)]
    pub skip_unreadable: bool,
    /// Folders to leave out of indexing (relative to the indexed root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            path: default_index_path(),
            skip_unreadable: false,
            excluded_folders: Vec::new(),
        }
    }
}

fn default_index_path() -> String {
    DEFAULT_INDEX_PATH.to_string()
}

#[derive(Debug, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self { limit: default_limit() }
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Config file the values came from; `None` when running on defaults.
    pub source: Option<PathBuf>,
    pub index_path: PathBuf,
    pub skip_unreadable: bool,
    pub excluded_folders: Vec<PathBuf>,
    pub query_limit: usize,
    pub logging: LoggingConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source: None,
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            skip_unreadable: false,
            excluded_folders: Vec::new(),
            query_limit: DEFAULT_LIMIT,
            logging: LoggingConfig::default(),
        }
    }
}

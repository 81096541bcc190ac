use crate::config::types::{ConfigFile, ResolvedConfig};
use shellexpand::full;
use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("cannot expand path '{0}': {1}")]
    ExpandError(String, String),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration.
    ///
    /// An explicit `config_path` must exist. Without one, the default
    /// location is tried and built-in defaults apply when it is absent.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        match config_path {
            Some(path) => Self::load_file(path),
            None => Self::load_or_default(&default_config_path()),
        }
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<ResolvedConfig, ConfigError> {
        if path.exists() {
            Self::load_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(ResolvedConfig::default())
        }
    }

    /// Load and resolve the config file at `path`.
    pub fn load_file(path: &Path) -> Result<ResolvedConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let s = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        Self::resolve(cf, path)
    }

    fn resolve(cf: ConfigFile, source: &Path) -> Result<ResolvedConfig, ConfigError> {
        let index_path = expand_path(&cf.index.path)?;
        let excluded_folders = cf
            .index
            .excluded_folders
            .iter()
            .map(|f| expand_path(f))
            .collect::<Result<Vec<_>, _>>()?;

        // Resolve log file path if present
        let mut logging = cf.logging;
        if let Some(ref file) = logging.file {
            logging.file = Some(expand_path(&file.to_string_lossy())?);
        }

        Ok(ResolvedConfig {
            source: Some(source.to_path_buf()),
            index_path,
            skip_unreadable: cf.index.skip_unreadable,
            excluded_folders,
            query_limit: cf.query.limit,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("taskgraph").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("taskgraph").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded =
        full(input).map_err(|e| ConfigError::ExpandError(input.to_string(), e.to_string()))?;
    Ok(PathBuf::from(expanded.to_string()))
}

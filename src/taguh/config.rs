use crate::error::{Result, TaguhError};
use crate::query::SortOption;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_DIR: &str = "data";

/// Overrides the directory holding `config.json`.
pub const CONFIG_DIR_ENV: &str = "TAGUH_CONFIG_DIR";
/// Overrides the data directory from the config file.
pub const DATA_DIR_ENV: &str = "TAGUH_DATA_DIR";

/// User configuration, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaguhConfig {
    /// Where `taguh.json` and `tags.json` live. Relative paths are resolved
    /// against the working directory.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Ordering applied by `find tag` when none is given on the command line.
    #[serde(default)]
    pub default_sort: Option<SortOption>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

impl Default for TaguhConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_sort: None,
        }
    }
}

impl TaguhConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| TaguhError::io(&config_path, e))?;
        let config: TaguhConfig = serde_json::from_str(&content)
            .map_err(|e| TaguhError::serialization(&config_path, e))?;
        Ok(config)
    }

    /// The data directory resolved against `cwd`.
    pub fn resolved_data_dir(&self, cwd: &Path) -> PathBuf {
        if self.data_dir.is_absolute() {
            self.data_dir.clone()
        } else {
            cwd.join(&self.data_dir)
        }
    }
}

/// `$TAGUH_CONFIG_DIR`, falling back to the platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "taguh", "taguh").map(|dirs| dirs.config_dir().to_path_buf())
}

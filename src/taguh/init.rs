use crate::api::TaguhApi;
use crate::config::{config_dir, TaguhConfig, DATA_DIR_ENV};
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct TaguhContext {
    pub api: TaguhApi<FileStore>,
    pub config: TaguhConfig,
    pub data_dir: PathBuf,
}

/// Picks the data directory: explicit override, then `$TAGUH_DATA_DIR`, then
/// the config file (default `./data`). Relative paths resolve against `cwd`.
pub fn resolve_data_dir(cwd: &Path, config: &TaguhConfig, data_dir: Option<PathBuf>) -> PathBuf {
    let chosen = data_dir.or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from));
    match chosen {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => cwd.join(dir),
        None => config.resolved_data_dir(cwd),
    }
}

/// Loads configuration, makes sure both documents exist, and builds the API.
pub fn initialize(cwd: &Path, data_dir: Option<PathBuf>) -> Result<TaguhContext> {
    let config = match config_dir() {
        Some(dir) => TaguhConfig::load(&dir).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable config, using defaults");
            TaguhConfig::default()
        }),
        None => TaguhConfig::default(),
    };

    let data_dir = resolve_data_dir(cwd, &config, data_dir);
    tracing::debug!(data_dir = %data_dir.display(), "using data directory");

    let mut store = FileStore::new(&data_dir);
    store.ensure_data_layout()?;
    let api = TaguhApi::new(store).with_default_sort(config.default_sort);

    Ok(TaguhContext {
        api,
        config,
        data_dir,
    })
}

use crate::api::AbookApi;
use crate::config::{AbookConfig, CONFIG_FILENAME};
use crate::error::{AbookError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const HOME_ENV: &str = "ABOOK_HOME";

pub struct AbookContext {
    pub api: AbookApi<FileStore>,
    pub config: AbookConfig,
    pub data_dir: PathBuf,
}

/// Picks the data directory: an explicit path wins, then `ABOOK_HOME`, then
/// the platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "abook", "abook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AbookError::Store("Could not determine data directory".to_string()))
}

/// Loads config and both snapshots from `data_dir`.
///
/// A data directory without `config.json` gets one written with the defaults,
/// so the snapshot file names can be edited in place afterwards.
pub fn initialize(data_dir: PathBuf) -> Result<AbookContext> {
    let config = AbookConfig::load(&data_dir)?;
    if !data_dir.join(CONFIG_FILENAME).exists() {
        config.save(&data_dir)?;
        tracing::debug!(data_dir = %data_dir.display(), "wrote default config");
    }
    let store = FileStore::new(data_dir.clone()).with_config(&config);
    let api = AbookApi::open(store)?;
    tracing::debug!(data_dir = %data_dir.display(), "abook initialized");

    Ok(AbookContext {
        api,
        config,
        data_dir,
    })
}

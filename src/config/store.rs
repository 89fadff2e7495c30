//! Shared, reloadable configuration handle.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Clonable handle to the live [`Config`].
///
/// The network reads through it on every request; readers get a snapshot.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// built-in defaults.
    pub fn open(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (config, path) = match path {
            Some(path) => (Config::load_from(path)?, path.to_path_buf()),
            None => (Config::load()?, Config::config_path()),
        };
        Ok(Self::new(config, path))
    }

    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Apply an in-memory override, such as a command-line flag.
    pub fn update(&self, change: impl FnOnce(&mut Config)) {
        change(&mut self.inner.write());
    }

    /// Re-read the backing file. The current config survives a failed reload.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config;
        tracing::info!(path = %self.path.display(), "Configuration reloaded");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

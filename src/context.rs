//! Explicit dependencies shared by every store.

use std::sync::Arc;

use thiserror::Error;

use crate::config::ConfigStore;
use crate::network::{HttpNetwork, Network, NetworkError};
use crate::storage::{StorageError, StorageManager};

#[derive(Debug, Error)]
pub enum ContextError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Configuration, transport and database handed to the stores.
#[derive(Clone)]
pub struct ServiceContext {
    pub config: ConfigStore,
    pub network: Arc<dyn Network>,
    pub storage: StorageManager,
}

impl ServiceContext {
    pub fn new(config: ConfigStore, network: Arc<dyn Network>, storage: StorageManager) -> Self {
        Self {
            config,
            network,
            storage,
        }
    }

    /// HTTP network plus the database file named in the config.
    pub fn from_config(config: ConfigStore) -> Result<Self, ContextError> {
        let network = HttpNetwork::new(config.clone())?;
        let storage = StorageManager::open(&config.get().storage.path)?;
        Ok(Self::new(config, Arc::new(network), storage))
    }
}

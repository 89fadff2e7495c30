//! Shared test utilities.

#![allow(dead_code)]

pub mod mock_backend;

use mate::config::{Config, ConfigStore};
use mate::context::ServiceContext;
use mate::network::HttpNetwork;
use mate::storage::StorageManager;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Write a config file pointing both endpoints at `base_url`.
pub fn temp_config(base_url: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    let database = temp_dir.path().join("mate.sqlite");

    let content = format!(
        r#"[defaults]
timeout_seconds = 5
connect_timeout_seconds = 2

[storage]
path = "{}"

[dotcom]
base_url = "{base_url}"
auth_type = "bearer"
api_key = "dotcom-token"

[events]
base_url = "{base_url}"
auth_type = "api_key"
api_key = "events-key"
"#,
        database.display().to_string().replace('\\', "/"),
    );

    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn load_config(path: &PathBuf) -> ConfigStore {
    let config = Config::load_from(path).expect("config loads");
    ConfigStore::new(config, path.clone())
}

/// HTTP network against `base_url` with an in-memory database.
pub fn make_context(base_url: &str) -> (TempDir, ServiceContext) {
    let (dir, path) = temp_config(base_url);
    let config = load_config(&path);
    let network = HttpNetwork::new(config.clone()).expect("network builds");
    let storage = StorageManager::in_memory().expect("storage opens");
    (dir, ServiceContext::new(config, Arc::new(network), storage))
}

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default = "Endpoint::dotcom")]
    pub dotcom: Endpoint,
    #[serde(default = "Endpoint::events")]
    pub events: Endpoint,
}

/// Network settings shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Local database settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the SQLite database file.
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

/// One REST endpoint family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Base URL every request path is joined onto. Ends with `/`.
    pub base_url: String,
    /// Authentication type: "api_key", "bearer", "none".
    #[serde(rename = "auth_type", default = "default_auth_type")]
    pub auth_type_str: String,
    /// Direct API key or OAuth token for this endpoint.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_auth_type() -> String {
    "none".to_string()
}

fn default_storage_path() -> PathBuf {
    let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("mate").join("mate.sqlite")
}

impl Endpoint {
    /// WordPress.com REST API defaults.
    pub fn dotcom() -> Self {
        Self {
            base_url: "https://public-api.wordpress.com/rest/v1.1/".to_string(),
            auth_type_str: "bearer".to_string(),
            api_key: None,
        }
    }

    /// Events and weather API defaults.
    pub fn events() -> Self {
        Self {
            base_url: "https://api.mate.example.com/v1/".to_string(),
            auth_type_str: "api_key".to_string(),
            api_key: None,
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            storage: StorageConfig::default(),
            dotcom: Endpoint::dotcom(),
            events: Endpoint::events(),
        }
    }
}

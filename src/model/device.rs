use serde::{Deserialize, Serialize};

/// A device registered against a user for push delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MateDevice {
    #[serde(rename = "ID")]
    pub device_id: i64,
    pub user_id: i64,
    pub name: String,
    pub model: String,
    #[serde(default)]
    pub os_version: Option<String>,
}

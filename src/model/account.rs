use serde::{Deserialize, Serialize};

/// The signed-in WordPress.com user, as returned by `GET me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "ID")]
    pub user_id: i64,
    pub display_name: String,
    pub email: String,
    pub username: String,
    #[serde(rename = "avatar_URL", default)]
    pub gravatar_url: Option<String>,
    #[serde(rename = "profile_URL", default)]
    pub profile_url: Option<String>,
    pub email_verified: bool,
}

/// Result of asking the backend whether an email is already registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCheckData {
    pub id: String,
    pub email: String,
}

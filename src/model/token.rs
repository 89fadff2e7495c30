use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Short-lived token issued to a user by the ONSA endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnsaTokenData {
    pub token: String,
    pub user_id: i64,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl OnsaTokenData {
    /// Whether the token has an expiry that lies before `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_token_without_expiry_never_expires() {
        let token = OnsaTokenData {
            token: "abc".to_string(),
            user_id: 1,
            expires_at: None,
        };
        assert!(!token.is_expired(Utc::now()));
    }

    #[test]
    fn test_token_expiry() {
        let now = Utc::now();
        let token = OnsaTokenData {
            token: "abc".to_string(),
            user_id: 1,
            expires_at: Some(now - Duration::seconds(1)),
        };
        assert!(token.is_expired(now));
        assert!(!token.is_expired(now - Duration::seconds(10)));
    }
}

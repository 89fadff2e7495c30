//! Authentication header building for API requests.

use super::credentials::{AuthType, CredentialStatus};
use super::types::Endpoint;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the authentication header for an endpoint.
///
/// Returns `None` if no auth is needed or credentials are missing.
pub fn build_auth_header(endpoint: &Endpoint) -> Option<AuthHeader> {
    match (endpoint.auth_type(), endpoint.resolve_credential()) {
        (AuthType::ApiKey, CredentialStatus::Configured(key)) => {
            Some(("x-api-key".to_string(), key.expose().to_string()))
        }
        (AuthType::Bearer, CredentialStatus::Configured(key)) => Some((
            "Authorization".to_string(),
            format!("Bearer {}", key.expose()),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_endpoint(auth_type: &str, api_key: Option<&str>) -> Endpoint {
        Endpoint {
            base_url: "https://example.com/".to_string(),
            auth_type_str: auth_type.to_string(),
            api_key: api_key.map(String::from),
        }
    }

    #[test]
    fn test_no_auth_endpoint() {
        assert!(build_auth_header(&make_endpoint("none", Some("ignored"))).is_none());
    }

    #[test]
    fn test_api_key_header() {
        let (name, value) = build_auth_header(&make_endpoint("api_key", Some("test-key-123")))
            .expect("header");
        assert_eq!(name, "x-api-key");
        assert_eq!(value, "test-key-123");
    }

    #[test]
    fn test_bearer_header() {
        let (name, value) = build_auth_header(&make_endpoint("bearer", Some("token-456")))
            .expect("header");
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer token-456");
    }

    #[test]
    fn test_missing_key() {
        assert!(build_auth_header(&make_endpoint("bearer", None)).is_none());
    }
}

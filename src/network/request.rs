use serde::Serialize;
use serde_json::Value;

use super::error::NetworkError;

/// Endpoint family a request is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Api {
    /// WordPress.com-style REST API (accounts, tokens, devices, purchases).
    Dotcom,
    /// Events and weather API.
    Events,
}

impl std::fmt::Display for Api {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Api::Dotcom => write!(f, "dotcom"),
            Api::Events => write!(f, "events"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A typed HTTP request, relative to the base URL of its [`Api`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub api: Api,
    pub method: Method,
    pub path: String,
    pub parameters: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Request {
    pub fn dotcom(method: Method, path: impl Into<String>) -> Self {
        Self::new(Api::Dotcom, method, path)
    }

    pub fn events(method: Method, path: impl Into<String>) -> Self {
        Self::new(Api::Events, method, path)
    }

    fn new(api: Api, method: Method, path: impl Into<String>) -> Self {
        Self {
            api,
            method,
            path: path.into(),
            parameters: Vec::new(),
            body: None,
        }
    }

    /// Append a query parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.parameters.push((key.into(), value.to_string()));
        self
    }

    /// Attach a JSON body.
    pub fn with_body<T: Serialize>(mut self, body: &T) -> Result<Self, NetworkError> {
        let value = serde_json::to_value(body).map_err(|source| NetworkError::Body {
            path: self.path.clone(),
            source,
        })?;
        self.body = Some(value);
        Ok(self)
    }

    /// Join the request path onto a base URL, tolerating slashes on either side.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_url_joins_single_slash() {
        let request = Request::dotcom(Method::Get, "/me");
        assert_eq!(
            request.url("https://public-api.wordpress.com/rest/v1.1/"),
            "https://public-api.wordpress.com/rest/v1.1/me"
        );
        assert_eq!(
            request.url("https://public-api.wordpress.com/rest/v1.1"),
            "https://public-api.wordpress.com/rest/v1.1/me"
        );
    }

    #[test]
    fn test_builder_collects_parameters_and_body() {
        let request = Request::events(Method::Post, "events")
            .with_parameter("user_id", 7)
            .with_parameter("category_id", 3)
            .with_body(&json!({ "title": "Match" }))
            .unwrap();

        assert_eq!(request.api, Api::Events);
        assert_eq!(
            request.parameters,
            vec![
                ("user_id".to_string(), "7".to_string()),
                ("category_id".to_string(), "3".to_string()),
            ]
        );
        assert_eq!(request.body, Some(json!({ "title": "Match" })));
    }

    #[test]
    fn test_unserializable_body_is_an_error() {
        let mut body = std::collections::BTreeMap::new();
        body.insert(vec![1u8, 2], "map keys must be strings");

        let result = Request::dotcom(Method::Post, "devices/new").with_body(&body);
        match result {
            Err(NetworkError::Body { path, .. }) => assert_eq!(path, "devices/new"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

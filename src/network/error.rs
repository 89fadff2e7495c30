use thiserror::Error;

use super::request::Api;

/// Transport-level failures. Backend-reported errors are not
/// classified here; see [`crate::validator::ServiceError`].
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Endpoint '{api}' not configured: {reason}")]
    NotConfigured { api: Api, reason: String },

    #[error("Failed to serialize body for '{path}': {source}")]
    Body {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Connection failed to '{api}': {source}")]
    Connection {
        api: Api,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to '{api}' timed out")]
    Timeout { api: Api },

    #[error("Unacceptable status code {status}: {body}")]
    UnacceptableStatusCode { status: u16, body: String },
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::{build_auth_header, ConfigStore, CredentialStatus};
use crate::validator;

use super::error::NetworkError;
use super::request::{Api, Request};
use super::Network;

/// [`Network`] backed by a pooled `reqwest` client.
///
/// Endpoint URLs and credentials are read from the [`ConfigStore`] on every
/// request, so a config reload applies to the next call.
pub struct HttpNetwork {
    client: Client,
    config: ConfigStore,
}

impl HttpNetwork {
    pub fn new(config: ConfigStore) -> Result<Self, NetworkError> {
        let defaults = config.get().defaults;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(defaults.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(defaults.timeout_seconds.into()))
            .build()
            .map_err(NetworkError::Client)?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Network for HttpNetwork {
    async fn response_data(&self, request: Request) -> Result<Vec<u8>, NetworkError> {
        let config = self.config.get();
        let endpoint = match request.api {
            Api::Dotcom => &config.dotcom,
            Api::Events => &config.events,
        };

        if let CredentialStatus::Unconfigured { reason } = endpoint.resolve_credential() {
            return Err(NetworkError::NotConfigured {
                api: request.api,
                reason,
            });
        }

        let raw_url = request.url(&endpoint.base_url);
        let url = Url::parse_with_params(&raw_url, &request.parameters).map_err(|e| {
            NetworkError::InvalidUrl {
                url: raw_url.clone(),
                reason: e.to_string(),
            }
        })?;

        tracing::debug!(api = %request.api, method = ?request.method, url = %raw_url, "Sending request");

        let mut builder = self.client.request(request.method.into(), url);
        if let Some((name, value)) = build_auth_header(endpoint) {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let api = request.api;
        let response = builder.send().await.map_err(|e| classify(api, e))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| classify(api, e))?
            .to_vec();

        if !status.is_success() && !validator::contains_error_envelope(&body) {
            tracing::warn!(api = %api, status = status.as_u16(), "Request failed without error envelope");
            return Err(NetworkError::UnacceptableStatusCode {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(body)
    }
}

fn classify(api: Api, source: reqwest::Error) -> NetworkError {
    if source.is_timeout() {
        NetworkError::Timeout { api }
    } else {
        NetworkError::Connection { api, source }
    }
}

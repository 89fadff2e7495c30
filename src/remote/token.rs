use serde_json::json;

use crate::mapper::OnsaTokenMapper;
use crate::model::OnsaTokenData;
use crate::network::{Method, Request};

use super::{Remote, RemoteError};

#[derive(Clone)]
pub struct TokenRemote {
    remote: Remote,
}

impl TokenRemote {
    pub fn new(remote: Remote) -> Self {
        Self { remote }
    }

    /// Request a fresh ONSA token for `user_id`.
    pub async fn get_token(&self, user_id: i64) -> Result<OnsaTokenData, RemoteError> {
        let request =
            Request::dotcom(Method::Post, "onsa/token").with_body(&json!({ "user_id": user_id }))?;
        self.remote.enqueue(request, &OnsaTokenMapper).await
    }
}

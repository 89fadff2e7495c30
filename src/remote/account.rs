use serde_json::json;

use crate::mapper::{AccountMapper, EmailCheckMapper, SuccessMapper};
use crate::model::{Account, EmailCheckData};
use crate::network::{Method, Request};

use super::{Remote, RemoteError};

/// Account endpoints of the WordPress.com API.
#[derive(Clone)]
pub struct AccountRemote {
    remote: Remote,
}

impl AccountRemote {
    pub fn new(remote: Remote) -> Self {
        Self { remote }
    }

    /// Fetch the account the configured token belongs to.
    pub async fn load_account(&self) -> Result<Account, RemoteError> {
        let request = Request::dotcom(Method::Get, "me");
        self.remote.enqueue(request, &AccountMapper).await
    }

    pub async fn check_email(&self, email: &str) -> Result<EmailCheckData, RemoteError> {
        let request = Request::dotcom(Method::Post, "users/email/check")
            .with_body(&json!({ "email": email }))?;
        self.remote.enqueue(request, &EmailCheckMapper).await
    }

    pub async fn close_account(&self) -> Result<(), RemoteError> {
        let request = Request::dotcom(Method::Post, "me/account/close");
        self.remote.enqueue(request, &SuccessMapper).await
    }
}

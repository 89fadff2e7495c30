use async_trait::async_trait;

use crate::action::{reply, Action, Domain, TokenAction};
use crate::remote::TokenRemote;

use super::{reject, Store, StoreError};

pub struct TokenStore {
    remote: TokenRemote,
}

impl TokenStore {
    pub fn new(remote: TokenRemote) -> Self {
        Self { remote }
    }
}

#[async_trait]
impl Store for TokenStore {
    fn domain(&self) -> Domain {
        Domain::Token
    }

    async fn on_action(&self, action: Action) {
        let action = match action {
            Action::Token(action) => action,
            other => return reject(self.domain(), other),
        };

        let name = action.name();
        match action {
            TokenAction::GetToken {
                user_id,
                respond_to,
            } => {
                let result = self.remote.get_token(user_id).await.map_err(StoreError::from);
                reply(respond_to, name, result)
            }
        }
    }
}

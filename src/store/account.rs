use async_trait::async_trait;

use crate::action::{reply, Action, AccountAction, Domain};
use crate::model::Account;
use crate::remote::AccountRemote;
use crate::storage::{self, StorageManager};

use super::{reject, Store, StoreError};

pub struct AccountStore {
    remote: AccountRemote,
    storage: StorageManager,
}

impl AccountStore {
    pub fn new(remote: AccountRemote, storage: StorageManager) -> Self {
        Self { remote, storage }
    }

    async fn synchronize_account(&self) -> Result<Account, StoreError> {
        let account = self.remote.load_account().await?;
        let stored = account.clone();
        self.storage
            .perform(move |tx| storage::upsert_account(tx, &stored))
            .await?;
        Ok(account)
    }

    async fn load_account(&self, user_id: i64) -> Result<Account, StoreError> {
        self.storage
            .perform(move |tx| storage::load_account(tx, user_id))
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("account {}", user_id)))
    }

    async fn close_account(&self, user_id: i64) -> Result<(), StoreError> {
        self.remote.close_account().await?;
        let (events, devices) = self
            .storage
            .perform(move |tx| {
                storage::delete_account(tx, user_id)?;
                let events = storage::delete_events(tx, user_id)?;
                let devices = storage::delete_devices(tx, user_id)?;
                Ok((events, devices))
            })
            .await?;
        tracing::info!(user_id, events, devices, "Removed stored data of closed account");
        Ok(())
    }
}

#[async_trait]
impl Store for AccountStore {
    fn domain(&self) -> Domain {
        Domain::Account
    }

    async fn on_action(&self, action: Action) {
        let action = match action {
            Action::Account(action) => action,
            other => return reject(self.domain(), other),
        };

        let name = action.name();
        match action {
            AccountAction::SynchronizeAccount { respond_to } => {
                reply(respond_to, name, self.synchronize_account().await)
            }
            AccountAction::LoadAccount {
                user_id,
                respond_to,
            } => reply(respond_to, name, self.load_account(user_id).await),
            AccountAction::CheckEmail { email, respond_to } => {
                let result = self.remote.check_email(&email).await.map_err(StoreError::from);
                reply(respond_to, name, result)
            }
            AccountAction::CloseAccount {
                user_id,
                respond_to,
            } => reply(respond_to, name, self.close_account(user_id).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::mock::MockNetwork;
    use crate::network::Method;
    use crate::remote::{Remote, RemoteError};
    use crate::validator::{DotcomError, ServiceError};
    use std::sync::Arc;
    use tokio::sync::oneshot;

    const ME: &str = r#"{"ID": 42, "display_name": "Mate", "email": "mate@example.com", "username": "mate", "email_verified": true}"#;

    fn store(network: Arc<MockNetwork>) -> (AccountStore, StorageManager) {
        let storage = StorageManager::in_memory().unwrap();
        let store = AccountStore::new(AccountRemote::new(Remote::new(network)), storage.clone());
        (store, storage)
    }

    #[tokio::test]
    async fn test_synchronize_then_load() {
        let network = Arc::new(MockNetwork::new());
        network.enqueue(Method::Get, "me", ME);
        let (store, _storage) = store(network);

        let (respond_to, rx) = oneshot::channel();
        store
            .on_action(AccountAction::SynchronizeAccount { respond_to }.into())
            .await;
        let synced = rx.await.unwrap().unwrap();
        assert_eq!(synced.user_id, 42);

        let (respond_to, rx) = oneshot::channel();
        store
            .on_action(
                AccountAction::LoadAccount {
                    user_id: 42,
                    respond_to,
                }
                .into(),
            )
            .await;
        assert_eq!(rx.await.unwrap().unwrap(), synced);
    }

    #[tokio::test]
    async fn test_backend_error_is_forwarded_unchanged() {
        let network = Arc::new(MockNetwork::new());
        network.enqueue(
            Method::Get,
            "me",
            r#"{"error": "invalid_token", "message": "Expired"}"#,
        );
        let (store, storage) = store(network);

        let (respond_to, rx) = oneshot::channel();
        store
            .on_action(AccountAction::SynchronizeAccount { respond_to }.into())
            .await;

        match rx.await.unwrap() {
            Err(StoreError::Remote(RemoteError::Service(ServiceError::Dotcom(
                DotcomError::InvalidToken { message },
            )))) => assert_eq!(message, "Expired"),
            other => panic!("unexpected reply: {:?}", other),
        }
        let stored = storage.perform(|tx| storage::load_account(tx, 42)).await.unwrap();
        assert!(stored.is_none());
    }

    #[tokio::test]
    async fn test_load_missing_account_is_not_found() {
        let (store, _storage) = store(Arc::new(MockNetwork::new()));

        let (respond_to, rx) = oneshot::channel();
        store
            .on_action(
                AccountAction::LoadAccount {
                    user_id: 9,
                    respond_to,
                }
                .into(),
            )
            .await;
        assert!(matches!(rx.await.unwrap(), Err(StoreError::NotFound(_))));
    }
}

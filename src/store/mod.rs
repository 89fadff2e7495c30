//! Per-domain action handlers.
//!
//! A store owns one [`Domain`]: it runs the remote call, persists what the
//! domain persists, and answers the action's responder exactly once.

mod account;
mod device;
mod event;
mod iap;
mod manager;
mod token;
mod weather;

use async_trait::async_trait;
use thiserror::Error;

use crate::action::{Action, Domain};
use crate::dispatch::DispatchError;
use crate::remote::RemoteError;
use crate::storage::StorageError;

pub use account::AccountStore;
pub use device::DeviceStore;
pub use event::EventStore;
pub use iap::InAppPurchaseStore;
pub use manager::StoresManager;
pub use token::TokenStore;
pub use weather::WeatherStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("No store registered for '{0}' actions")]
    NoStore(Domain),

    #[error("Not found: {0}")]
    NotFound(String),
}

#[async_trait]
pub trait Store: Send + Sync {
    fn domain(&self) -> Domain;

    /// Handle one action. Actions of other domains are answered with
    /// [`StoreError::NoStore`].
    async fn on_action(&self, action: Action);
}

/// Answer an action this store does not own.
pub(crate) fn reject(store: Domain, action: Action) {
    tracing::warn!(
        store = %store,
        domain = %action.domain(),
        action = action.name(),
        "Store received an action of another domain"
    );
    let domain = action.domain();
    action.fail(StoreError::NoStore(domain));
}

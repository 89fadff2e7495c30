use std::collections::HashMap;
use std::sync::Arc;

use crate::action::{Action, Domain};
use crate::context::ServiceContext;
use crate::remote::{
    AccountRemote, DeviceRemote, EventRemote, InAppPurchaseRemote, Remote, TokenRemote,
    WeatherRemote,
};

use super::{
    AccountStore, DeviceStore, EventStore, InAppPurchaseStore, Store, StoreError, TokenStore,
    WeatherStore,
};

/// Routes actions to the store owning their domain.
pub struct StoresManager {
    stores: HashMap<Domain, Arc<dyn Store>>,
}

impl StoresManager {
    /// The full set of stores, wired to the context's network and storage.
    pub fn new(context: &ServiceContext) -> Self {
        let remote = Remote::new(Arc::clone(&context.network));
        let storage = context.storage.clone();

        let stores: [Arc<dyn Store>; 6] = [
            Arc::new(AccountStore::new(
                AccountRemote::new(remote.clone()),
                storage.clone(),
            )),
            Arc::new(TokenStore::new(TokenRemote::new(remote.clone()))),
            Arc::new(DeviceStore::new(
                DeviceRemote::new(remote.clone()),
                storage.clone(),
            )),
            Arc::new(EventStore::new(EventRemote::new(remote.clone()), storage)),
            Arc::new(WeatherStore::new(WeatherRemote::new(remote.clone()))),
            Arc::new(InAppPurchaseStore::new(InAppPurchaseRemote::new(remote))),
        ];
        Self::with_stores(stores)
    }

    /// A later store replaces an earlier one of the same domain.
    pub fn with_stores(stores: impl IntoIterator<Item = Arc<dyn Store>>) -> Self {
        let stores = stores
            .into_iter()
            .map(|store| (store.domain(), store))
            .collect();
        Self { stores }
    }

    pub fn store(&self, domain: Domain) -> Option<Arc<dyn Store>> {
        self.stores.get(&domain).cloned()
    }

    /// Hand `action` to its store and wait for the store to finish with it.
    pub async fn dispatch(&self, action: Action) {
        let domain = action.domain();
        match self.stores.get(&domain) {
            Some(store) => {
                tracing::debug!(domain = %domain, action = action.name(), "Dispatching action");
                store.on_action(action).await;
            }
            None => {
                tracing::warn!(domain = %domain, action = action.name(), "No store registered");
                action.fail(StoreError::NoStore(domain));
            }
        }
    }
}

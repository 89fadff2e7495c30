use async_trait::async_trait;

use crate::action::{reply, Action, Domain, InAppPurchaseAction};
use crate::remote::InAppPurchaseRemote;

use super::{reject, Store, StoreError};

pub struct InAppPurchaseStore {
    remote: InAppPurchaseRemote,
}

impl InAppPurchaseStore {
    pub fn new(remote: InAppPurchaseRemote) -> Self {
        Self { remote }
    }
}

#[async_trait]
impl Store for InAppPurchaseStore {
    fn domain(&self) -> Domain {
        Domain::InAppPurchase
    }

    async fn on_action(&self, action: Action) {
        let action = match action {
            Action::InAppPurchase(action) => action,
            other => return reject(self.domain(), other),
        };

        let name = action.name();
        match action {
            InAppPurchaseAction::LoadProducts { respond_to } => {
                let result = self.remote.load_products().await.map_err(StoreError::from);
                reply(respond_to, name, result)
            }
            InAppPurchaseAction::PurchaseProduct {
                product_id,
                receipt,
                respond_to,
            } => {
                let result = self
                    .remote
                    .create_order(&product_id, &receipt)
                    .await
                    .map_err(StoreError::from);
                if let Ok(order) = &result {
                    tracing::info!(order_id = order.order_id, product_id = %product_id, "Order created");
                }
                reply(respond_to, name, result)
            }
        }
    }
}

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};

use crate::action::{
    AccountAction, Action, DeviceAction, EventAction, InAppPurchaseAction, Responder,
    TokenAction, WeatherAction,
};
use crate::model::{
    Account, EmailCheckData, Forecast, InAppPurchaseOrder, InAppPurchaseProduct, MateDevice,
    MateEvent, OnsaTokenData,
};
use crate::store::StoreError;

use super::types::DispatchError;

/// Sending half of the action bus.
///
/// Every method builds the action's responder, sends the action and awaits
/// the single reply.
#[derive(Clone)]
pub struct StoresClient {
    sender: mpsc::Sender<Action>,
    timeout: Option<Duration>,
}

impl StoresClient {
    pub fn new(sender: mpsc::Sender<Action>) -> Self {
        Self {
            sender,
            timeout: None,
        }
    }

    /// Give up waiting for a reply after `timeout`. The action itself keeps
    /// running; only the caller stops waiting.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send a prebuilt action without waiting for its reply.
    pub async fn dispatch(&self, action: Action) -> Result<(), DispatchError> {
        self.sender
            .send(action)
            .await
            .map_err(|_| DispatchError::Disconnected)
    }

    async fn request<T, A>(&self, build: impl FnOnce(Responder<T>) -> A) -> Result<T, StoreError>
    where
        A: Into<Action>,
    {
        let (respond_to, receiver) = oneshot::channel();
        self.dispatch(build(respond_to).into()).await?;
        recv_with_timeout(receiver, self.timeout).await?
    }

    pub async fn synchronize_account(&self) -> Result<Account, StoreError> {
        self.request(|respond_to| AccountAction::SynchronizeAccount { respond_to })
            .await
    }

    pub async fn load_account(&self, user_id: i64) -> Result<Account, StoreError> {
        self.request(|respond_to| AccountAction::LoadAccount {
            user_id,
            respond_to,
        })
        .await
    }

    pub async fn check_email(&self, email: String) -> Result<EmailCheckData, StoreError> {
        self.request(|respond_to| AccountAction::CheckEmail { email, respond_to })
            .await
    }

    pub async fn close_account(&self, user_id: i64) -> Result<(), StoreError> {
        self.request(|respond_to| AccountAction::CloseAccount {
            user_id,
            respond_to,
        })
        .await
    }

    pub async fn get_token(&self, user_id: i64) -> Result<OnsaTokenData, StoreError> {
        self.request(|respond_to| TokenAction::GetToken {
            user_id,
            respond_to,
        })
        .await
    }

    pub async fn register_device(
        &self,
        name: String,
        model: String,
        os_version: Option<String>,
    ) -> Result<MateDevice, StoreError> {
        self.request(|respond_to| DeviceAction::RegisterDevice {
            name,
            model,
            os_version,
            respond_to,
        })
        .await
    }

    pub async fn synchronize_devices(&self, user_id: i64) -> Result<Vec<MateDevice>, StoreError> {
        self.request(|respond_to| DeviceAction::SynchronizeDevices {
            user_id,
            respond_to,
        })
        .await
    }

    pub async fn unregister_device(&self, device_id: i64) -> Result<(), StoreError> {
        self.request(|respond_to| DeviceAction::UnregisterDevice {
            device_id,
            respond_to,
        })
        .await
    }

    pub async fn synchronize_events(
        &self,
        user_id: i64,
        category_id: Option<i64>,
    ) -> Result<Vec<MateEvent>, StoreError> {
        self.request(|respond_to| EventAction::SynchronizeEvents {
            user_id,
            category_id,
            respond_to,
        })
        .await
    }

    pub async fn load_events(&self, user_id: i64) -> Result<Vec<MateEvent>, StoreError> {
        self.request(|respond_to| EventAction::LoadEvents {
            user_id,
            respond_to,
        })
        .await
    }

    pub async fn reset_events(&self, user_id: i64) -> Result<usize, StoreError> {
        self.request(|respond_to| EventAction::ResetEvents {
            user_id,
            respond_to,
        })
        .await
    }

    pub async fn load_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<Forecast, StoreError> {
        self.request(|respond_to| WeatherAction::LoadForecast {
            latitude,
            longitude,
            days,
            respond_to,
        })
        .await
    }

    pub async fn load_products(&self) -> Result<Vec<InAppPurchaseProduct>, StoreError> {
        self.request(|respond_to| InAppPurchaseAction::LoadProducts { respond_to })
            .await
    }

    pub async fn purchase_product(
        &self,
        product_id: String,
        receipt: String,
    ) -> Result<InAppPurchaseOrder, StoreError> {
        self.request(|respond_to| InAppPurchaseAction::PurchaseProduct {
            product_id,
            receipt,
            respond_to,
        })
        .await
    }
}

async fn recv_with_timeout<T>(
    receiver: oneshot::Receiver<T>,
    timeout: Option<Duration>,
) -> Result<T, DispatchError> {
    let Some(timeout) = timeout else {
        return receiver.await.map_err(|_| DispatchError::Disconnected);
    };

    match tokio::time::timeout(timeout, receiver).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(DispatchError::Disconnected),
        Err(_) => Err(DispatchError::Timeout),
    }
}

use async_trait::async_trait;

use crate::action::{reply, Action, DeviceAction, Domain};
use crate::model::MateDevice;
use crate::remote::DeviceRemote;
use crate::storage::{self, StorageManager};

use super::{reject, Store, StoreError};

pub struct DeviceStore {
    remote: DeviceRemote,
    storage: StorageManager,
}

impl DeviceStore {
    pub fn new(remote: DeviceRemote, storage: StorageManager) -> Self {
        Self { remote, storage }
    }

    async fn register_device(
        &self,
        name: &str,
        model: &str,
        os_version: Option<&str>,
    ) -> Result<MateDevice, StoreError> {
        let device = self.remote.register_device(name, model, os_version).await?;
        let stored = device.clone();
        self.storage
            .perform(move |tx| storage::upsert_device(tx, &stored))
            .await?;
        Ok(device)
    }

    async fn synchronize_devices(&self, user_id: i64) -> Result<Vec<MateDevice>, StoreError> {
        let devices = self.remote.load_devices().await?;
        let stored = self
            .storage
            .perform(move |tx| {
                storage::delete_devices(tx, user_id)?;
                for device in devices.iter().filter(|d| d.user_id == user_id) {
                    storage::upsert_device(tx, device)?;
                }
                storage::load_devices(tx, user_id)
            })
            .await?;
        Ok(stored)
    }

    async fn unregister_device(&self, device_id: i64) -> Result<(), StoreError> {
        self.remote.unregister_device(device_id).await?;
        self.storage
            .perform(move |tx| storage::delete_device(tx, device_id))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl Store for DeviceStore {
    fn domain(&self) -> Domain {
        Domain::Device
    }

    async fn on_action(&self, action: Action) {
        let action = match action {
            Action::Device(action) => action,
            other => return reject(self.domain(), other),
        };

        let action_name = action.name();
        match action {
            DeviceAction::RegisterDevice {
                name,
                model,
                os_version,
                respond_to,
            } => {
                let result = self
                    .register_device(&name, &model, os_version.as_deref())
                    .await;
                reply(respond_to, action_name, result)
            }
            DeviceAction::SynchronizeDevices {
                user_id,
                respond_to,
            } => reply(respond_to, action_name, self.synchronize_devices(user_id).await),
            DeviceAction::UnregisterDevice {
                device_id,
                respond_to,
            } => reply(respond_to, action_name, self.unregister_device(device_id).await),
        }
    }
}

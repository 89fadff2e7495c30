use crate::model::MateDevice;
use crate::store::StoreError;

use super::{reply, Responder};

#[derive(Debug)]
pub enum DeviceAction {
    RegisterDevice {
        name: String,
        model: String,
        os_version: Option<String>,
        respond_to: Responder<MateDevice>,
    },
    /// Replace the stored devices of `user_id` with the remote list.
    SynchronizeDevices {
        user_id: i64,
        respond_to: Responder<Vec<MateDevice>>,
    },
    UnregisterDevice {
        device_id: i64,
        respond_to: Responder<()>,
    },
}

impl DeviceAction {
    pub fn name(&self) -> &'static str {
        match self {
            DeviceAction::RegisterDevice { .. } => "register_device",
            DeviceAction::SynchronizeDevices { .. } => "synchronize_devices",
            DeviceAction::UnregisterDevice { .. } => "unregister_device",
        }
    }

    pub fn fail(self, error: StoreError) {
        let name = self.name();
        match self {
            DeviceAction::RegisterDevice { respond_to, .. } => reply(respond_to, name, Err(error)),
            DeviceAction::SynchronizeDevices { respond_to, .. } => {
                reply(respond_to, name, Err(error))
            }
            DeviceAction::UnregisterDevice { respond_to, .. } => {
                reply(respond_to, name, Err(error))
            }
        }
    }
}

use serde::Serialize;

use crate::mapper::{DeviceListMapper, DeviceMapper, SuccessMapper};
use crate::model::MateDevice;
use crate::network::{Method, Request};

use super::{Remote, RemoteError};

#[derive(Serialize)]
struct NewDevice<'a> {
    name: &'a str,
    model: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    os_version: Option<&'a str>,
}

#[derive(Clone)]
pub struct DeviceRemote {
    remote: Remote,
}

impl DeviceRemote {
    pub fn new(remote: Remote) -> Self {
        Self { remote }
    }

    pub async fn register_device(
        &self,
        name: &str,
        model: &str,
        os_version: Option<&str>,
    ) -> Result<MateDevice, RemoteError> {
        let request = Request::dotcom(Method::Post, "devices/new").with_body(&NewDevice {
            name,
            model,
            os_version,
        })?;
        self.remote.enqueue(request, &DeviceMapper).await
    }

    /// Devices registered for the signed-in user.
    pub async fn load_devices(&self) -> Result<Vec<MateDevice>, RemoteError> {
        let request = Request::dotcom(Method::Get, "devices");
        self.remote.enqueue(request, &DeviceListMapper).await
    }

    pub async fn unregister_device(&self, device_id: i64) -> Result<(), RemoteError> {
        let request = Request::dotcom(Method::Post, format!("devices/{}/delete", device_id));
        self.remote.enqueue(request, &SuccessMapper).await
    }
}

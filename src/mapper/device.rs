use serde::Deserialize;

use crate::model::MateDevice;

use super::{decode, Mapper, MapperError};

pub struct DeviceMapper;

impl Mapper for DeviceMapper {
    type Output = MateDevice;

    fn map(&self, response: &[u8]) -> Result<MateDevice, MapperError> {
        decode(response)
    }
}

#[derive(Deserialize)]
struct DeviceList {
    devices: Vec<MateDevice>,
}

/// Maps `{"devices": [...]}`, optionally inside the data envelope.
pub struct DeviceListMapper;

impl Mapper for DeviceListMapper {
    type Output = Vec<MateDevice>;

    fn map(&self, response: &[u8]) -> Result<Vec<MateDevice>, MapperError> {
        let list: DeviceList = decode(response)?;
        Ok(list.devices)
    }
}

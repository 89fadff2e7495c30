use serde::Deserialize;

use crate::model::{Account, EmailCheckData};

use super::{decode, Mapper, MapperError};

pub struct AccountMapper;

impl Mapper for AccountMapper {
    type Output = Account;

    fn map(&self, response: &[u8]) -> Result<Account, MapperError> {
        decode(response)
    }
}

pub struct EmailCheckMapper;

impl Mapper for EmailCheckMapper {
    type Output = EmailCheckData;

    fn map(&self, response: &[u8]) -> Result<EmailCheckData, MapperError> {
        decode(response)
    }
}

#[derive(Deserialize)]
struct SuccessResponse {
    success: bool,
}

/// Maps `{"success": true}` acknowledgements. `false` is an error.
pub struct SuccessMapper;

impl Mapper for SuccessMapper {
    type Output = ();

    fn map(&self, response: &[u8]) -> Result<(), MapperError> {
        let ack: SuccessResponse = decode(response)?;
        if ack.success {
            Ok(())
        } else {
            Err(MapperError::Unsuccessful)
        }
    }
}

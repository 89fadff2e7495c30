use crate::model::OnsaTokenData;

use super::{decode, Mapper, MapperError};

pub struct OnsaTokenMapper;

impl Mapper for OnsaTokenMapper {
    type Output = OnsaTokenData;

    fn map(&self, response: &[u8]) -> Result<OnsaTokenData, MapperError> {
        decode(response)
    }
}

use crate::model::{InAppPurchaseOrder, InAppPurchaseProduct};

use super::{decode, Mapper, MapperError};

pub struct ProductListMapper;

impl Mapper for ProductListMapper {
    type Output = Vec<InAppPurchaseProduct>;

    fn map(&self, response: &[u8]) -> Result<Vec<InAppPurchaseProduct>, MapperError> {
        decode(response)
    }
}

pub struct OrderMapper;

impl Mapper for OrderMapper {
    type Output = InAppPurchaseOrder;

    fn map(&self, response: &[u8]) -> Result<InAppPurchaseOrder, MapperError> {
        decode(response)
    }
}

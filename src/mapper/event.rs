use crate::model::MateEvent;

use super::{decode, Mapper, MapperError};

pub struct EventListMapper;

impl Mapper for EventListMapper {
    type Output = Vec<MateEvent>;

    fn map(&self, response: &[u8]) -> Result<Vec<MateEvent>, MapperError> {
        decode(response)
    }
}

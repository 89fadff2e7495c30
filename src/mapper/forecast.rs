use crate::model::Forecast;

use super::{decode, Mapper, MapperError};

pub struct ForecastMapper;

impl Mapper for ForecastMapper {
    type Output = Forecast;

    fn map(&self, response: &[u8]) -> Result<Forecast, MapperError> {
        decode(response)
    }
}

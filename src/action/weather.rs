use crate::model::Forecast;
use crate::store::StoreError;

use super::{reply, Responder};

#[derive(Debug)]
pub enum WeatherAction {
    LoadForecast {
        latitude: f64,
        longitude: f64,
        days: u8,
        respond_to: Responder<Forecast>,
    },
}

impl WeatherAction {
    pub fn name(&self) -> &'static str {
        match self {
            WeatherAction::LoadForecast { .. } => "load_forecast",
        }
    }

    pub fn fail(self, error: StoreError) {
        let name = self.name();
        match self {
            WeatherAction::LoadForecast { respond_to, .. } => reply(respond_to, name, Err(error)),
        }
    }
}

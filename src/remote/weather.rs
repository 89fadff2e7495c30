use crate::mapper::ForecastMapper;
use crate::model::Forecast;
use crate::network::{Method, Request};

use super::{Remote, RemoteError};

#[derive(Clone)]
pub struct WeatherRemote {
    remote: Remote,
}

impl WeatherRemote {
    pub fn new(remote: Remote) -> Self {
        Self { remote }
    }

    pub async fn load_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        days: u8,
    ) -> Result<Forecast, RemoteError> {
        let request = Request::events(Method::Get, "forecast")
            .with_parameter("lat", latitude)
            .with_parameter("lon", longitude)
            .with_parameter("days", days);
        self.remote.enqueue(request, &ForecastMapper).await
    }
}

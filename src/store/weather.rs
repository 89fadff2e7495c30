use async_trait::async_trait;

use crate::action::{reply, Action, Domain, WeatherAction};
use crate::remote::WeatherRemote;

use super::{reject, Store, StoreError};

/// Forecasts are not persisted.
pub struct WeatherStore {
    remote: WeatherRemote,
}

impl WeatherStore {
    pub fn new(remote: WeatherRemote) -> Self {
        Self { remote }
    }
}

#[async_trait]
impl Store for WeatherStore {
    fn domain(&self) -> Domain {
        Domain::Weather
    }

    async fn on_action(&self, action: Action) {
        let action = match action {
            Action::Weather(action) => action,
            other => return reject(self.domain(), other),
        };

        let name = action.name();
        match action {
            WeatherAction::LoadForecast {
                latitude,
                longitude,
                days,
                respond_to,
            } => {
                let result = self
                    .remote
                    .load_forecast(latitude, longitude, days)
                    .await
                    .map_err(StoreError::from);
                reply(respond_to, name, result)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::mock::MockNetwork;
    use crate::network::Method;
    use crate::remote::{Remote, RemoteError};
    use crate::validator::ServiceError;
    use std::sync::Arc;
    use tokio::sync::oneshot;

    fn load_forecast(respond_to: crate::action::Responder<crate::model::Forecast>) -> Action {
        WeatherAction::LoadForecast {
            latitude: 41.15,
            longitude: -8.61,
            days: 2,
            respond_to,
        }
        .into()
    }

    #[tokio::test]
    async fn test_forecast_is_passed_through() {
        let network = Arc::new(MockNetwork::new());
        network.enqueue(
            Method::Get,
            "forecast",
            r#"{"location": "Porto", "days": [
                {"date": "2026-05-02", "temperature_min": 12.5, "temperature_max": 21.0, "condition": "sunny"}
            ]}"#,
        );
        let store = WeatherStore::new(WeatherRemote::new(Remote::new(network.clone())));

        let (respond_to, rx) = oneshot::channel();
        store.on_action(load_forecast(respond_to)).await;

        let forecast = rx.await.unwrap().unwrap();
        assert_eq!(forecast.location, "Porto");
        assert_eq!(forecast.days.len(), 1);
        assert_eq!(network.requests()[0].parameters.len(), 3);
    }

    #[tokio::test]
    async fn test_api_error_is_replied() {
        let network = Arc::new(MockNetwork::new());
        network.enqueue(
            Method::Get,
            "forecast",
            r#"{"code": "bad_coordinates", "message": "Latitude out of range", "data": {"status": 400}}"#,
        );
        let store = WeatherStore::new(WeatherRemote::new(Remote::new(network)));

        let (respond_to, rx) = oneshot::channel();
        store.on_action(load_forecast(respond_to)).await;

        assert!(matches!(
            rx.await.unwrap(),
            Err(StoreError::Remote(RemoteError::Service(ServiceError::Api(_))))
        ));
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily forecast for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub location: String,
    pub days: Vec<ForecastDay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub condition: String,
}

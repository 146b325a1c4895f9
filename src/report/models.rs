use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound weather query
///
/// Fields are kept as raw json values so that presence, type and order are all
/// decided in `validate`. A `null` field counts as absent.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ReportRequest {
    pub token: Option<Value>,
    pub requester_name: Option<Value>,
    pub city: Option<Value>,
    pub date: Option<Value>,
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRequest {
    pub requester_name: String,
    pub city: String,
    /// Date as given by the caller, compared verbatim against provider dates
    pub date: String,
    pub given_date: NaiveDate,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WeatherSummary {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Max Temperature, C")]
    pub max_temp_c: f64,
    #[serde(rename = "Min Temperature, C")]
    pub min_temp_c: f64,
    #[serde(rename = "Max Wind Speed, kph")]
    pub max_wind_kph: f64,
    #[serde(rename = "Total Precipitation, mm")]
    pub total_precip_mm: f64,
    #[serde(rename = "Total Snow, cm")]
    pub total_snow_cm: f64,
    #[serde(rename = "Will it rain?")]
    pub will_it_rain: String,
    #[serde(rename = "Will it snow?")]
    pub will_it_snow: String,
    #[serde(rename = "Condition")]
    pub condition: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub requester_name: String,
    pub timestamp: String,
    pub location: String,
    pub weather: WeatherSummary,
}

/// Error body sent back to callers
#[derive(Serialize, Debug)]
pub struct ErrorMessage {
    pub message: String,
}

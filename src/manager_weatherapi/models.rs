use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Clone)]
pub struct Condition {
    pub text: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DayMetrics {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub maxwind_kph: f64,
    pub totalprecip_mm: f64,
    pub totalsnow_cm: f64,
    #[serde(default)]
    pub daily_will_it_rain: Option<Value>,
    #[serde(default)]
    pub daily_will_it_snow: Option<Value>,
    pub condition: Condition,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ForecastDay {
    pub date: String,
    pub day: DayMetrics,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

/// Forecast payload from the provider, location metadata is not read
#[derive(Deserialize, Debug, Clone)]
pub struct ForecastResponse {
    pub forecast: Forecast,
}

/// Returns true when a provider flag holds the value 1
///
/// The provider sends these as integers. `true` counts as 1, anything else
/// (missing, null, 0, false, text) counts as not set.
///
/// # Arguments
///
/// * 'flag' - raw flag value from the provider
pub fn flag_is_set(flag: &Option<Value>) -> bool {
    match flag {
        Some(Value::Bool(b)) => *b,
        Some(v) => v.as_f64() == Some(1.0),
        None => false,
    }
}

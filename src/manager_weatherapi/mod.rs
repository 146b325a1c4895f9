pub mod errors;
pub mod models;

use std::time::Duration;
use log::{debug, error};
use reqwest::Client;
use crate::manager_weatherapi::errors::WeatherApiError;
use crate::manager_weatherapi::models::ForecastResponse;

/// Struct for fetching daily forecasts from weatherapi.com
pub struct WeatherApi {
    client: Client,
    api_key: String,
    base_url: String,
}

impl WeatherApi {
    /// Returns a WeatherApi struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'api_key' - key used to authorize against the provider
    /// * 'base_url' - provider base url, i.e. `http://api.weatherapi.com/v1`
    /// * 'timeout' - upper bound for a complete request/response cycle
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<WeatherApi, WeatherApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Retrieves a forecast for the given city covering the given number of days,
    /// starting with today as seen by the provider.
    ///
    /// Air quality and alerts are not requested. A non-success status is returned
    /// as an error carrying the provider's status code and raw body.
    ///
    /// # Arguments
    ///
    /// * 'city' - city (or any location query the provider accepts)
    /// * 'days' - forecast horizon in days
    pub async fn forecast(&self, city: &str, days: u32) -> Result<ForecastResponse, WeatherApiError> {
        let url = format!("{}/forecast.json", self.base_url);
        let days = days.to_string();
        debug!("requesting {} day(s) of forecast for {}", days, city);

        let req = self.client
            .get(url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send().await?;

        let status = req.status();
        let body = req.text().await?;

        if !status.is_success() {
            error!("weatherapi responded {}: {}", status, body);
            return Err(WeatherApiError::Status { status: status.as_u16(), body });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

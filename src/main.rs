mod config;
mod errors;
mod handlers;
mod initialization;
mod logging;
mod manager_weatherapi;
mod report;

use std::time::Duration;
use actix_web::{web, App, HttpServer};
use chrono::NaiveDate;
use log::info;
use crate::errors::UnrecoverableError;
use crate::initialization::config;
use crate::manager_weatherapi::WeatherApi;

/// Read-only state shared by all workers
pub struct AppState {
    pub api_token: String,
    pub weather_api: WeatherApi,
    /// Source of "today" for the forecast horizon
    pub today: fn() -> NaiveDate,
}

#[actix_web::main]
async fn main() -> Result<(), UnrecoverableError> {
    let config = config()?;

    let weather_api = WeatherApi::new(
        &config.weather_api.api_key,
        &config.weather_api.base_url,
        Duration::from_secs(config.weather_api.timeout_secs),
    )?;

    let state = web::Data::new(AppState {
        api_token: config.security.api_token.clone(),
        weather_api,
        today: report::local_today,
    });

    info!("listening on {}:{}", config.web_server.bind_address, config.web_server.bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::routes)
    })
        .bind((config.web_server.bind_address, config.web_server.bind_port))?
        .run()
        .await?;

    Ok(())
}

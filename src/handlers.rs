use actix_web::error::InternalError;
use actix_web::http::header::ContentType;
use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::Utc;
use log::{error, info, warn};
use crate::AppState;
use crate::report::errors::ReportError;
use crate::report::models::{ErrorMessage, ReportRequest};
use crate::report::{build_report, forecast_horizon, select_day, validate};

const WELCOME: &str = "<p><h2>Little Dummy Welcome Message</h2></p>";

/// Registers all routes and the json body configuration
///
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(home)
        .service(weather);
}

/// Bodies that can't be read as a weather request get a 400 with a json message
///
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        warn!("rejected request body: {}", message);
        InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorMessage { message })).into()
    })
}

#[get("/")]
async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(WELCOME)
}

#[post("/weather")]
async fn weather(body: web::Json<ReportRequest>, data: web::Data<AppState>) -> Result<HttpResponse, ReportError> {
    let request = body.into_inner();

    let valid = match validate(&request, &data.api_token) {
        Ok(valid) => valid,
        Err(e) => {
            warn!("rejected weather request: {}", e);
            return Err(e);
        }
    };
    info!("weather request from {} for {} on {}", valid.requester_name, valid.city, valid.date);

    // Horizon uses local time while the report timestamp is UTC
    let days = forecast_horizon(valid.given_date, (data.today)());

    let forecast = match data.weather_api.forecast(&valid.city, days).await {
        Ok(forecast) => forecast,
        Err(e) => {
            error!("failed to get forecast for {}: {}", valid.city, e);
            return Err(ReportError::from(e));
        }
    };
    let timestamp = Utc::now();

    let day = select_day(&forecast.forecast.forecastday, &valid.date).ok_or_else(|| {
        error!("forecast for {} contained no days", valid.city);
        ReportError::EmptyForecast
    })?;
    if day.date != valid.date {
        warn!("no forecast day matches {}, reporting {} instead", valid.date, day.date);
    }

    Ok(HttpResponse::Ok().json(build_report(&valid.requester_name, &valid.city, day, timestamp)))
}

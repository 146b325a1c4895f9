use std::fmt;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use crate::manager_weatherapi::errors::WeatherApiError;
use crate::report::models::ErrorMessage;

#[derive(Debug, PartialEq)]
pub enum ReportError {
    MissingField(&'static str),
    Unauthorized,
    InvalidDateFormat,
    Upstream { status: u16, body: String },
    UpstreamUnavailable(String),
    EmptyForecast,
}

impl ReportError {
    /// Message exposed to the caller
    pub fn message(&self) -> String {
        match self {
            ReportError::MissingField(field) => format!("{} is required", field),
            ReportError::Unauthorized => "wrong API token".to_string(),
            ReportError::InvalidDateFormat => "Date format is invalid".to_string(),
            ReportError::Upstream { body, .. } => body.clone(),
            ReportError::UpstreamUnavailable(e) => format!("weather provider unavailable: {}", e),
            ReportError::EmptyForecast => "weather provider returned no forecast days".to_string(),
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ReportError: {}", self.message())
    }
}

impl ResponseError for ReportError {
    fn status_code(&self) -> StatusCode {
        match self {
            ReportError::MissingField(_) | ReportError::InvalidDateFormat => StatusCode::BAD_REQUEST,
            ReportError::Unauthorized => StatusCode::FORBIDDEN,
            ReportError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ReportError::UpstreamUnavailable(_) | ReportError::EmptyForecast => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorMessage { message: self.message() })
    }
}

impl From<WeatherApiError> for ReportError {
    fn from(e: WeatherApiError) -> Self {
        match e {
            WeatherApiError::Status { status, body } => ReportError::Upstream { status, body },
            WeatherApiError::Connection(e) | WeatherApiError::Document(e) => ReportError::UpstreamUnavailable(e),
        }
    }
}

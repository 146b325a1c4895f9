use std::fmt;

#[derive(Debug)]
pub enum WeatherApiError {
    /// The provider answered with a non-success status, body kept verbatim
    Status { status: u16, body: String },
    Connection(String),
    Document(String),
}

impl fmt::Display for WeatherApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WeatherApiError::Status { status, body } => write!(f, "WeatherApiError::Status: {} {}", status, body),
            WeatherApiError::Connection(e) => write!(f, "WeatherApiError::Connection: {}", e),
            WeatherApiError::Document(e) => write!(f, "WeatherApiError::Document: {}", e),
        }
    }
}
impl From<reqwest::Error> for WeatherApiError {
    fn from(e: reqwest::Error) -> Self {
        WeatherApiError::Connection(e.to_string())
    }
}
impl From<serde_json::Error> for WeatherApiError {
    fn from(e: serde_json::Error) -> Self {
        WeatherApiError::Document(e.to_string())
    }
}

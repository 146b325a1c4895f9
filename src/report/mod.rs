pub mod errors;
pub mod models;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde_json::Value;
use crate::manager_weatherapi::models::{flag_is_set, ForecastDay};
use crate::report::errors::ReportError;
use crate::report::models::{Report, ReportRequest, ValidRequest, WeatherSummary};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates an inbound request, first failing check wins
///
/// Checks run in the order token presence, token match, requester_name, city,
/// date presence and date format. A token that isn't a json string never matches,
/// a non-string requester_name or city is used in its json text form and a
/// non-string date is an invalid date.
///
/// # Arguments
///
/// * 'request' - the inbound request
/// * 'api_token' - the configured shared secret
pub fn validate(request: &ReportRequest, api_token: &str) -> Result<ValidRequest, ReportError> {
    let token = present(&request.token).ok_or(ReportError::MissingField("token"))?;
    if token.as_str() != Some(api_token) {
        return Err(ReportError::Unauthorized);
    }

    let requester_name = present(&request.requester_name).ok_or(ReportError::MissingField("requester_name"))?;
    let city = present(&request.city).ok_or(ReportError::MissingField("city"))?;
    let date = present(&request.date).ok_or(ReportError::MissingField("date"))?;
    let date = date.as_str().ok_or(ReportError::InvalidDateFormat)?;
    let given_date = parse_date(date)?;

    Ok(ValidRequest {
        requester_name: text(requester_name),
        city: text(city),
        date: date.to_string(),
        given_date,
    })
}

fn present(field: &Option<Value>) -> Option<&Value> {
    field.as_ref().filter(|v| !v.is_null())
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Today's date on the process' local clock
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a strict `YYYY-MM-DD` date that must also exist in the calendar
///
/// # Arguments
///
/// * 'date' - date string
pub fn parse_date(date: &str) -> Result<NaiveDate, ReportError> {
    let well_formed = date.len() == 10 && date.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return Err(ReportError::InvalidDateFormat);
    }

    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| ReportError::InvalidDateFormat)
}

/// Number of forecast days to ask the provider for
///
/// A date in the future gives the distance in days, today or any past date gives 1.
///
/// # Arguments
///
/// * 'given_date' - requested date
/// * 'today' - today's date
pub fn forecast_horizon(given_date: NaiveDate, today: NaiveDate) -> u32 {
    let difference = (given_date - today).num_days();
    if difference > 0 {
        u32::try_from(difference).unwrap_or(u32::MAX)
    } else {
        1
    }
}

/// Picks the forecast day to report on
///
/// Returns the first day whose date equals the requested one. When there is no match
/// the last day is returned as if it matched, only an empty list gives `None`.
///
/// # Arguments
///
/// * 'days' - forecast days in provider order
/// * 'date' - requested date string
pub fn select_day<'a>(days: &'a [ForecastDay], date: &str) -> Option<&'a ForecastDay> {
    days.iter()
        .find(|d| d.date == date)
        .or(days.last())
}

/// Flattens a forecast day into the outbound report
///
/// # Arguments
///
/// * 'requester_name' - name given by the caller
/// * 'city' - city given by the caller, reported as location
/// * 'day' - selected forecast day
/// * 'timestamp' - time the provider answered
pub fn build_report(requester_name: &str, city: &str, day: &ForecastDay, timestamp: DateTime<Utc>) -> Report {
    Report {
        requester_name: requester_name.to_string(),
        timestamp: timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        location: city.to_string(),
        weather: WeatherSummary {
            date: day.date.clone(),
            max_temp_c: day.day.maxtemp_c,
            min_temp_c: day.day.mintemp_c,
            max_wind_kph: day.day.maxwind_kph,
            total_precip_mm: day.day.totalprecip_mm,
            total_snow_cm: day.day.totalsnow_cm,
            will_it_rain: yes_no(flag_is_set(&day.day.daily_will_it_rain)),
            will_it_snow: yes_no(flag_is_set(&day.day.daily_will_it_snow)),
            condition: day.day.condition.text.clone(),
        },
    }
}

fn yes_no(flag: bool) -> String {
    let answer = if flag { "yes" } else { "no" };
    answer.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn request(token: Option<&str>, name: Option<&str>, city: Option<&str>, date: Option<&str>) -> ReportRequest {
        ReportRequest {
            token: token.map(Value::from),
            requester_name: name.map(Value::from),
            city: city.map(Value::from),
            date: date.map(Value::from),
        }
    }

    fn day(date: &str, rain: serde_json::Value, snow: serde_json::Value) -> ForecastDay {
        serde_json::from_value(json!({
            "date": date,
            "day": {
                "maxtemp_c": 21.5, "mintemp_c": 11.2, "maxwind_kph": 14.4,
                "totalprecip_mm": 2.3, "totalsnow_cm": 0.0,
                "daily_will_it_rain": rain, "daily_will_it_snow": snow,
                "condition": { "text": "Light rain" }
            }
        })).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn valid_request_passes() {
        let valid = validate(&request(Some("secret"), Some("Alice"), Some("Berlin"), Some("2024-06-01")), "secret").unwrap();

        assert_eq!(valid.requester_name, "Alice");
        assert_eq!(valid.city, "Berlin");
        assert_eq!(valid.date, "2024-06-01");
        assert_eq!(valid.given_date, date("2024-06-01"));
    }

    #[test]
    fn missing_fields_reported_in_order() {
        let cases = [
            (request(None, None, None, None), ReportError::MissingField("token")),
            (request(Some("secret"), None, None, None), ReportError::MissingField("requester_name")),
            (request(Some("secret"), Some("Alice"), None, None), ReportError::MissingField("city")),
            (request(Some("secret"), Some("Alice"), Some("Berlin"), None), ReportError::MissingField("date")),
        ];

        for (req, expected) in cases {
            assert_eq!(validate(&req, "secret").unwrap_err(), expected);
        }
    }

    #[test]
    fn missing_field_messages_name_the_field() {
        assert_eq!(ReportError::MissingField("token").message(), "token is required");
        assert_eq!(ReportError::MissingField("requester_name").message(), "requester_name is required");
        assert_eq!(ReportError::MissingField("city").message(), "city is required");
        assert_eq!(ReportError::MissingField("date").message(), "date is required");
    }

    #[test]
    fn wrong_token_wins_over_other_fields() {
        let err = validate(&request(Some("nope"), None, None, Some("garbage")), "secret").unwrap_err();

        assert_eq!(err, ReportError::Unauthorized);
        assert_eq!(err.message(), "wrong API token");
    }

    #[test]
    fn non_string_token_is_a_mismatch() {
        let req = ReportRequest { token: Some(json!(123)), requester_name: Some(json!(42)), ..Default::default() };

        assert_eq!(validate(&req, "secret").unwrap_err(), ReportError::Unauthorized);
        assert_eq!(validate(&req, "123").unwrap_err(), ReportError::Unauthorized);
    }

    #[test]
    fn null_fields_count_as_missing() {
        let req = ReportRequest { token: Some(json!(null)), city: Some(json!(7)), ..Default::default() };
        assert_eq!(validate(&req, "secret").unwrap_err(), ReportError::MissingField("token"));

        let req = ReportRequest {
            token: Some(json!("secret")),
            requester_name: Some(json!("Alice")),
            city: Some(json!(null)),
            ..Default::default()
        };
        assert_eq!(validate(&req, "secret").unwrap_err(), ReportError::MissingField("city"));
    }

    #[test]
    fn non_string_name_and_city_use_json_text() {
        let req = ReportRequest {
            token: Some(json!("secret")),
            requester_name: Some(json!(42)),
            city: Some(json!(true)),
            date: Some(json!("2024-06-01")),
        };
        let valid = validate(&req, "secret").unwrap();

        assert_eq!(valid.requester_name, "42");
        assert_eq!(valid.city, "true");
    }

    #[test]
    fn non_string_date_is_invalid() {
        let req = ReportRequest {
            token: Some(json!("secret")),
            requester_name: Some(json!("Alice")),
            city: Some(json!("Berlin")),
            date: Some(json!(20240601)),
        };

        assert_eq!(validate(&req, "secret").unwrap_err(), ReportError::InvalidDateFormat);
    }

    #[test]
    fn empty_strings_count_as_present() {
        let valid = validate(&request(Some("secret"), Some(""), Some(""), Some("2024-06-01")), "secret");

        assert!(valid.is_ok());
    }

    #[test]
    fn bad_dates_are_rejected() {
        for bad in ["2024-13-40", "notadate", "2023-02-29", "2024-6-1", "24-06-01", "2024/06/01", "2024-06-01T00:00", ""] {
            assert_eq!(parse_date(bad), Err(ReportError::InvalidDateFormat), "{}", bad);
        }
    }

    #[test]
    fn leap_day_is_accepted() {
        assert_eq!(parse_date("2024-02-29"), Ok(date("2024-02-29")));
    }

    #[test]
    fn horizon_counts_days_ahead() {
        assert_eq!(forecast_horizon(date("2024-06-04"), date("2024-06-01")), 3);
        assert_eq!(forecast_horizon(date("2024-06-02"), date("2024-06-01")), 1);
        assert_eq!(forecast_horizon(date("2024-07-01"), date("2024-06-01")), 30);
    }

    #[test]
    fn horizon_is_one_for_today_and_past() {
        assert_eq!(forecast_horizon(date("2024-06-01"), date("2024-06-01")), 1);
        assert_eq!(forecast_horizon(date("2024-05-20"), date("2024-06-01")), 1);
        assert_eq!(forecast_horizon(date("1999-01-01"), date("2024-06-01")), 1);
    }

    #[test]
    fn selects_exact_match() {
        let days = vec![
            day("2024-06-01", json!(0), json!(0)),
            day("2024-06-02", json!(1), json!(0)),
            day("2024-06-03", json!(0), json!(0)),
        ];

        assert_eq!(select_day(&days, "2024-06-02").unwrap().date, "2024-06-02");
    }

    #[test]
    fn selects_first_of_duplicate_matches() {
        let days = vec![
            day("2024-06-01", json!(1), json!(0)),
            day("2024-06-01", json!(0), json!(1)),
        ];

        let selected = select_day(&days, "2024-06-01").unwrap();
        assert!(flag_is_set(&selected.day.daily_will_it_rain));
    }

    // No explicit not-found path: an unmatched date silently reports the last day.
    #[test]
    fn unmatched_date_falls_back_to_last_day() {
        let days = vec![
            day("2024-06-01", json!(0), json!(0)),
            day("2024-06-02", json!(0), json!(0)),
        ];

        assert_eq!(select_day(&days, "2023-01-01").unwrap().date, "2024-06-02");
    }

    #[test]
    fn empty_forecast_selects_nothing() {
        assert!(select_day(&[], "2024-06-01").is_none());
    }

    #[test]
    fn report_maps_fields() {
        let stamp = Utc.with_ymd_and_hms(2024, 6, 1, 7, 5, 9).unwrap();
        let report = build_report("Alice", "Berlin", &day("2024-06-01", json!(1), json!(0)), stamp);

        assert_eq!(report.requester_name, "Alice");
        assert_eq!(report.location, "Berlin");
        assert_eq!(report.timestamp, "2024-06-01 07:05:09 UTC");
        assert_eq!(report.weather.date, "2024-06-01");
        assert_eq!(report.weather.max_temp_c, 21.5);
        assert_eq!(report.weather.min_temp_c, 11.2);
        assert_eq!(report.weather.max_wind_kph, 14.4);
        assert_eq!(report.weather.total_precip_mm, 2.3);
        assert_eq!(report.weather.total_snow_cm, 0.0);
        assert_eq!(report.weather.will_it_rain, "yes");
        assert_eq!(report.weather.will_it_snow, "no");
        assert_eq!(report.weather.condition, "Light rain");
    }

    #[test]
    fn only_one_means_yes() {
        let stamp = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let flags = [
            (json!(1), "yes"),
            (json!(1.0), "yes"),
            (json!(true), "yes"),
            (json!(0), "no"),
            (json!(false), "no"),
            (json!(2), "no"),
            (json!(null), "no"),
            (json!("1"), "no"),
        ];
        for (flag, expected) in flags {
            let report = build_report("Alice", "Berlin", &day("2024-06-01", flag.clone(), flag.clone()), stamp);
            assert_eq!(report.weather.will_it_rain, expected, "{}", flag);
            assert_eq!(report.weather.will_it_snow, expected, "{}", flag);
        }
    }

    #[test]
    fn missing_flags_mean_no() {
        let day: ForecastDay = serde_json::from_value(json!({
            "date": "2024-06-01",
            "day": {
                "maxtemp_c": 1.0, "mintemp_c": -3.0, "maxwind_kph": 5.0,
                "totalprecip_mm": 0.0, "totalsnow_cm": 1.5,
                "condition": { "text": "Overcast" }
            }
        })).unwrap();
        let report = build_report("Bob", "Oslo", &day, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        assert_eq!(report.weather.will_it_rain, "no");
        assert_eq!(report.weather.will_it_snow, "no");
    }

    #[test]
    fn report_serializes_with_display_keys() {
        let stamp = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let report = build_report("Alice", "Berlin", &day("2024-06-01", json!(0), json!(1)), stamp);
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["timestamp"], "2024-06-01 12:00:00 UTC");
        assert_eq!(value["weather"]["Date"], "2024-06-01");
        assert_eq!(value["weather"]["Max Temperature, C"], 21.5);
        assert_eq!(value["weather"]["Min Temperature, C"], 11.2);
        assert_eq!(value["weather"]["Max Wind Speed, kph"], 14.4);
        assert_eq!(value["weather"]["Total Precipitation, mm"], 2.3);
        assert_eq!(value["weather"]["Total Snow, cm"], 0.0);
        assert_eq!(value["weather"]["Will it rain?"], "no");
        assert_eq!(value["weather"]["Will it snow?"], "yes");
        assert_eq!(value["weather"]["Condition"], "Light rain");
    }
}

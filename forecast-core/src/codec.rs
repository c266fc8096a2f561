//! Decoding of OpenWeather-style payloads into domain records.
//!
//! Both entry points accept either the raw response text or an already parsed
//! [`serde_json::Value`]. The provider status field `cod` is checked before
//! anything else; the records themselves are then deserialized in one go so a
//! missing block fails the whole decode.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::ProviderError,
    model::{CurrentConditions, ForecastPoint, WindBearing},
};

const STATUS_OK: i64 = 200;
const STATUS_NOT_FOUND: i64 = 404;

/// Decode a "current weather" response body.
pub fn decode_current(raw: &str) -> Result<CurrentConditions, ProviderError> {
    let payload = parse_payload(raw)?;
    decode_current_value(&payload)
}

/// Decode an already parsed "current weather" response.
pub fn decode_current_value(payload: &Value) -> Result<CurrentConditions, ProviderError> {
    check_status(payload)?;

    let parsed = OwCurrentResponse::deserialize(payload).map_err(|e| {
        ProviderError::malformed(format!("current conditions: {e}"))
    })?;

    let weather = first_condition(parsed.weather)
        .ok_or_else(|| ProviderError::malformed("current conditions: empty weather array"))?;

    let wind_bearing = parsed
        .wind
        .deg
        .map(WindBearing::Degrees)
        .unwrap_or(WindBearing::Unknown);

    Ok(CurrentConditions {
        observed_at: parsed.dt,
        place_name: parsed.name.unwrap_or_default(),
        temperature_c: parsed.main.temp,
        temperature_min_c: parsed.main.temp_min,
        temperature_max_c: parsed.main.temp_max,
        pressure_hpa: parsed.main.pressure,
        humidity_pct: parsed.main.humidity,
        wind_speed: parsed.wind.speed,
        wind_bearing,
        condition_description: weather.description,
        condition_icon_code: weather.icon,
        sunrise_at: parsed.sys.sunrise,
        sunset_at: parsed.sys.sunset,
    })
}

/// Decode a 3-hour forecast series response body.
pub fn decode_forecast_series(raw: &str) -> Result<Vec<ForecastPoint>, ProviderError> {
    let payload = parse_payload(raw)?;
    decode_forecast_series_value(&payload)
}

/// Decode an already parsed 3-hour forecast series response.
///
/// Points keep the provider's order.
pub fn decode_forecast_series_value(payload: &Value) -> Result<Vec<ForecastPoint>, ProviderError> {
    check_status(payload)?;

    let parsed = OwForecastResponse::deserialize(payload)
        .map_err(|e| ProviderError::malformed(format!("forecast series: {e}")))?;

    let points = parsed
        .list
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let weather = first_condition(entry.weather).ok_or_else(|| {
                ProviderError::malformed(format!("forecast series: entry {index} has empty weather array"))
            })?;

            Ok(ForecastPoint {
                timestamp: entry.dt,
                timestamp_text: entry.dt_txt,
                temperature_c: entry.main.temp,
                temperature_min_c: entry.main.temp_min,
                temperature_max_c: entry.main.temp_max,
                pressure_hpa: entry.main.pressure,
                humidity_pct: entry.main.humidity,
                wind_speed: entry.wind.speed,
                wind_bearing: WindBearing::Degrees(entry.wind.deg),
                condition_description: weather.description,
                condition_icon_code: weather.icon,
            })
        })
        .collect::<Result<Vec<_>, ProviderError>>()?;

    tracing::debug!(points = points.len(), "decoded forecast series");

    Ok(points)
}

fn parse_payload(raw: &str) -> Result<Value, ProviderError> {
    serde_json::from_str(raw).map_err(|e| ProviderError::malformed(format!("invalid JSON: {e}")))
}

/// Interpret the provider status field. An absent field means success.
fn check_status(payload: &Value) -> Result<(), ProviderError> {
    let code = match payload.get("cod") {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Number(n)) => n.as_i64(),
        // The forecast endpoint sends the code as a string.
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    }
    .ok_or_else(|| ProviderError::malformed("status code `cod` is not an integer"))?;

    match code {
        STATUS_OK => Ok(()),
        STATUS_NOT_FOUND => {
            tracing::warn!(code, "provider reported location not found");
            Err(ProviderError::LocationNotFound)
        }
        other => {
            tracing::warn!(code = other, "provider reported an error status");
            Err(ProviderError::ProviderUnavailable { code: other })
        }
    }
}

/// Only the first condition entry is authoritative.
fn first_condition(weather: Vec<OwWeather>) -> Option<OwWeather> {
    weather.into_iter().next()
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    pressure: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentWind {
    speed: f64,
    deg: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwSeriesWind {
    speed: f64,
    deg: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwCurrentWind,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    dt_txt: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwSeriesWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

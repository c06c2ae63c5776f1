//! Forecast payload parsing.
//!
//! Converts the provider's raw JSON into a [`WeatherSnapshot`]. The
//! current-conditions section is required; the daily section degrades
//! to an empty forecast when malformed, so a bad forecast never costs
//! the user the current weather.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::codes::Condition;
use crate::types::{CurrentConditions, DailyForecastEntry, ParseError, WeatherSnapshot};

/// Maximum daily entries kept from a response.
pub const MAX_FORECAST_DAYS: usize = 7;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeatherSection>,
    // Deserialized leniently in a second step so a malformed daily
    // section cannot fail the whole response.
    daily: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherSection {
    temperature: Option<f64>,
    weathercode: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct DailySection {
    #[serde(default)]
    time: Vec<String>,
    #[serde(default)]
    temperature_2m_max: Vec<f64>,
    #[serde(default)]
    temperature_2m_min: Vec<f64>,
    #[serde(default)]
    weathercode: Vec<i32>,
}

/// Parse a raw forecast payload into a snapshot.
///
/// Requires a numeric temperature and weather code under
/// `current_weather`; anything less is [`ParseError::MissingCurrent`].
pub fn parse(raw: &str) -> Result<WeatherSnapshot, ParseError> {
    let response: ForecastResponse = serde_json::from_str(raw)?;

    let current = response
        .current_weather
        .ok_or(ParseError::MissingCurrent)?;
    let (temperature, weathercode) = match (current.temperature, current.weathercode) {
        (Some(t), Some(c)) => (t, c),
        _ => return Err(ParseError::MissingCurrent),
    };

    let daily = response.daily.map(parse_daily).unwrap_or_default();

    Ok(WeatherSnapshot {
        current: CurrentConditions {
            // `as` truncates toward zero; the UI shows whole degrees.
            temperature: temperature as i32,
            condition: Condition::from_code(weathercode),
        },
        daily,
    })
}

/// Build daily entries from the provider's parallel arrays.
///
/// Uses the shortest common prefix of the four arrays, capped at
/// [`MAX_FORECAST_DAYS`]. A section that fails typed deserialization or
/// carries a date outside `YYYY-MM-DD` yields an empty forecast.
fn parse_daily(value: serde_json::Value) -> Vec<DailyForecastEntry> {
    let section: DailySection = match serde_json::from_value(value) {
        Ok(section) => section,
        Err(e) => {
            tracing::warn!(error = %e, "malformed daily section, dropping forecast");
            return Vec::new();
        }
    };

    let len = section
        .time
        .len()
        .min(section.temperature_2m_max.len())
        .min(section.temperature_2m_min.len())
        .min(section.weathercode.len())
        .min(MAX_FORECAST_DAYS);

    let mut entries = Vec::with_capacity(len);
    for i in 0..len {
        let date = match NaiveDate::parse_from_str(&section.time[i], "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!(value = %section.time[i], error = %e, "bad daily date, dropping forecast");
                return Vec::new();
            }
        };

        entries.push(DailyForecastEntry {
            day_label: date.format("%a").to_string(),
            high: section.temperature_2m_max[i] as i32,
            low: section.temperature_2m_min[i] as i32,
            condition: Condition::from_code(section.weathercode[i]),
        });
    }

    entries
}

//! Weather data types and errors.

use serde::{Deserialize, Serialize};

use crate::codes::Condition;

/// Temperature unit requested from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// Query parameter value understood by the provider.
    pub fn query_value(self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "fahrenheit",
            TemperatureUnit::Celsius => "celsius",
        }
    }
}

/// Request preferences for a forecast fetch.
#[derive(Debug, Clone)]
pub struct ForecastOptions {
    pub temperature_unit: TemperatureUnit,
    /// Timezone the provider resolves daily boundaries in; "auto"
    /// derives it from the coordinate.
    pub timezone: String,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::default(),
            timezone: "auto".to_string(),
        }
    }
}

/// Current conditions at the trip's destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Whole degrees, truncated toward zero.
    pub temperature: i32,
    pub condition: Condition,
}

/// One day of the forecast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    /// Short weekday label ("Mon"). Presentational; ordering comes from
    /// the provider, not from this label.
    pub day_label: String,
    pub high: i32,
    pub low: i32,
    pub condition: Condition,
}

/// One atomically-replaced fetch result: current conditions plus up to
/// seven days of forecast. Either the whole snapshot is produced or
/// none of it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecastEntry>,
}

/// Errors from the HTTP fetch step.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be built; nothing reached the network.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network failure or non-success HTTP status, treated uniformly.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Errors from parsing the provider response.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("response was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("current weather section missing or incomplete")]
    MissingCurrent,
}

/// Any failure of a single fetch-and-parse attempt.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl WeatherError {
    /// Condensed category surfaced through the display state.
    pub fn failure_reason(&self) -> FailureReason {
        match self {
            WeatherError::Fetch(FetchError::InvalidRequest(_)) => FailureReason::InvalidRequest,
            WeatherError::Fetch(FetchError::Transport(_)) => FailureReason::Transport,
            WeatherError::Parse(_) => FailureReason::NoData,
        }
    }
}

/// Why the displayed weather for a trip is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// Malformed coordinate; the request never reached the network.
    InvalidRequest,
    /// Network or HTTP failure.
    Transport,
    /// A response arrived but lacked the required current conditions.
    NoData,
}

impl FailureReason {
    /// User-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureReason::InvalidRequest => "This trip's location can't be looked up.",
            FailureReason::Transport => {
                "Couldn't reach the weather service. Check your connection."
            }
            FailureReason::NoData => "No weather data available for this trip.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_query_values() {
        assert_eq!(TemperatureUnit::Fahrenheit.query_value(), "fahrenheit");
        assert_eq!(TemperatureUnit::Celsius.query_value(), "celsius");
        assert_eq!(TemperatureUnit::default(), TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn default_options_use_auto_timezone() {
        let opts = ForecastOptions::default();
        assert_eq!(opts.timezone, "auto");
        assert_eq!(opts.temperature_unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn failure_reasons_condense_errors() {
        let err = WeatherError::Fetch(FetchError::InvalidRequest(
            "non-finite coordinate".to_string(),
        ));
        assert_eq!(err.failure_reason(), FailureReason::InvalidRequest);

        let err = WeatherError::Parse(ParseError::MissingCurrent);
        assert_eq!(err.failure_reason(), FailureReason::NoData);
    }

    #[test]
    fn user_messages_are_non_empty() {
        for reason in [
            FailureReason::InvalidRequest,
            FailureReason::Transport,
            FailureReason::NoData,
        ] {
            assert!(!reason.user_message().is_empty());
        }
    }

    #[test]
    fn snapshot_serialization() {
        let snapshot = WeatherSnapshot {
            current: CurrentConditions {
                temperature: 68,
                condition: Condition::ClearSky,
            },
            daily: vec![DailyForecastEntry {
                day_label: "Mon".to_string(),
                high: 82,
                low: 55,
                condition: Condition::Rain,
            }],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"temperature\":68"));
        assert!(json.contains("clear_sky"));
        assert!(json.contains("Mon"));
    }
}

//! Open-Meteo forecast client.

use std::time::Duration;

use tracing::instrument;
use tripcheck_trips::Coordinate;
use url::Url;

use crate::types::{FetchError, ForecastOptions};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Daily variables requested alongside current weather.
const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weathercode";
const FORECAST_DAYS: u8 = 7;

/// Single-attempt HTTP client for the forecast endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    /// Client against the production forecast endpoint.
    pub fn new() -> Result<Self, FetchError> {
        Self::new_with_timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }

    /// Client with a caller-supplied per-request timeout.
    pub fn new_with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: FORECAST_URL.to_string(),
        })
    }

    /// Client against a different endpoint; tests point this at a mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    fn request_url(
        &self,
        coordinate: &Coordinate,
        options: &ForecastOptions,
    ) -> Result<Url, FetchError> {
        Url::parse_with_params(
            &self.base_url,
            [
                ("latitude", coordinate.latitude.to_string()),
                ("longitude", coordinate.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
                (
                    "temperature_unit",
                    options.temperature_unit.query_value().to_string(),
                ),
                ("timezone", options.timezone.clone()),
            ],
        )
        .map_err(|e| FetchError::InvalidRequest(format!("bad endpoint url: {e}")))
    }

    /// Fetch the raw forecast payload for `coordinate`.
    ///
    /// Exactly one outbound request per call; no caching, no retry. A
    /// non-finite coordinate fails before any network I/O, and any
    /// non-success HTTP status is reported as a transport error without
    /// reading the provider's error body.
    #[instrument(skip(self, options), level = "debug")]
    pub async fn fetch(
        &self,
        coordinate: &Coordinate,
        options: &ForecastOptions,
    ) -> Result<String, FetchError> {
        if !coordinate.is_finite() {
            return Err(FetchError::InvalidRequest(format!(
                "non-finite coordinate: latitude {}, longitude {}",
                coordinate.latitude, coordinate.longitude
            )));
        }

        let url = self.request_url(coordinate, options)?;
        tracing::debug!(%url, "requesting forecast");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        Ok(body)
    }
}

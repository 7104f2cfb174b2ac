pub mod air_quality;
pub mod current;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::weather::WeatherReport;

use self::{air_quality::AirQualityClient, current::CurrentWeatherClient};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("provider returned {status}")]
    NotFound { status: StatusCode },
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    /// Short text for the status line.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingApiKey => "Missing API key",
            Self::NotFound { .. } | Self::Transport(_) | Self::Decode(_) => "City not found",
        }
    }
}

pub(crate) fn http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Both provider endpoints behind one key.
#[derive(Debug, Clone)]
pub struct WeatherService {
    weather: CurrentWeatherClient,
    air_quality: AirQualityClient,
}

impl WeatherService {
    pub fn new(api_key: Option<&str>, weather_url: &str, air_quality_url: &str) -> Self {
        let client = http_client();
        let api_key = api_key.map(str::to_string);
        Self {
            weather: CurrentWeatherClient::with_client(
                client.clone(),
                weather_url,
                api_key.clone(),
            ),
            air_quality: AirQualityClient::with_client(client, air_quality_url, api_key),
        }
    }

    /// Current weather for `city`, then air quality at its coordinates. An
    /// air-quality failure leaves the report without a reading.
    pub async fn fetch_report(&self, city: &str) -> Result<WeatherReport, FetchError> {
        info!(city, "fetching weather");
        let snapshot = self.weather.fetch(city).await?;
        let air_quality = match self.air_quality.fetch(snapshot.coord).await {
            Ok(reading) => Some(reading),
            Err(err) => {
                debug!(error = %err, "air quality unavailable");
                None
            }
        };
        info!(
            city = %snapshot.display_name(),
            code = snapshot.condition_code,
            aqi = air_quality.map(|a| a.aqi),
            "weather fetched"
        );
        Ok(WeatherReport {
            snapshot,
            air_quality,
        })
    }
}

/// Maps a non-success status onto `NotFound`, otherwise passes the
/// response through.
pub(crate) fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(FetchError::NotFound { status })
    }
}

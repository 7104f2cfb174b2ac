use reqwest::Client;
use serde::Deserialize;

use super::{FetchError, check_status, http_client};
use crate::domain::weather::{AirQuality, Coordinates};

#[derive(Debug, Clone)]
pub struct AirQualityClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AirQualityClient {
    pub fn with_base_url(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self::with_client(http_client(), base_url, api_key)
    }

    pub(crate) fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    pub async fn fetch(&self, coord: Coordinates) -> Result<AirQuality, FetchError> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", coord.lat.to_string()),
                ("lon", coord.lon.to_string()),
                ("appid", api_key.to_string()),
            ])
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let payload: AirPollutionResponse = check_status(response)?
            .json()
            .await
            .map_err(FetchError::Decode)?;
        payload
            .list
            .first()
            .map(|entry| AirQuality {
                aqi: entry.main.aqi,
            })
            .ok_or(FetchError::NotFound {
                status: reqwest::StatusCode::NO_CONTENT,
            })
    }
}

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    #[serde(default)]
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    main: AqiMain,
}

#[derive(Debug, Deserialize)]
struct AqiMain {
    aqi: u8,
}

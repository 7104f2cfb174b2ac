use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use super::{FetchError, check_status, http_client};
use crate::domain::weather::{Coordinates, Readings, WeatherSnapshot, Wind};

#[derive(Debug, Clone)]
pub struct CurrentWeatherClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CurrentWeatherClient {
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

    pub async fn fetch(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", city), ("appid", api_key), ("units", "metric")])
            .send()
            .await
            .map_err(FetchError::Transport)?;
        let payload: CurrentResponse = check_status(response)?
            .json()
            .await
            .map_err(FetchError::Decode)?;
        Ok(payload.into_snapshot())
    }
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    #[serde(default)]
    weather: Vec<ConditionDto>,
    #[serde(default)]
    wind: WindDto,
    visibility: Option<f32>,
    #[serde(default)]
    main: MainDto,
    rain: Option<VolumeDto>,
    snow: Option<VolumeDto>,
    #[serde(default)]
    sys: SysDto,
    #[serde(default)]
    coord: CoordDto,
    #[serde(default)]
    timezone: i32,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
struct ConditionDto {
    #[serde(default)]
    id: i32,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct WindDto {
    #[serde(default)]
    speed: f32,
    #[serde(default)]
    deg: f32,
    gust: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
struct MainDto {
    #[serde(default)]
    temp: f32,
    #[serde(default)]
    feels_like: f32,
    #[serde(default)]
    humidity: f32,
    #[serde(default)]
    pressure: f32,
    sea_level: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct VolumeDto {
    #[serde(rename = "1h")]
    one_hour: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
struct SysDto {
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CoordDto {
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

impl CurrentResponse {
    fn into_snapshot(self) -> WeatherSnapshot {
        let (condition_code, description) = self
            .weather
            .into_iter()
            .next()
            .map_or((0, String::new()), |c| (c.id, c.description));
        WeatherSnapshot {
            city: self.name,
            country: self.sys.country.filter(|c| !c.is_empty()),
            condition_code,
            description,
            wind: Wind {
                speed: self.wind.speed,
                deg: self.wind.deg,
                gust: self.wind.gust,
            },
            visibility_m: self.visibility,
            rain_1h_mm: self.rain.and_then(|r| r.one_hour),
            snow_1h_mm: self.snow.and_then(|s| s.one_hour),
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
            timezone_offset_s: self.timezone,
            readings: Readings {
                temp_c: self.main.temp,
                feels_like_c: self.main.feels_like,
                humidity: self.main.humidity,
                pressure_hpa: self.main.pressure,
                sea_level_hpa: self.main.sea_level,
            },
            coord: Coordinates {
                lat: self.coord.lat,
                lon: self.coord.lon,
            },
            fetched_at: Utc::now(),
        }
    }
}

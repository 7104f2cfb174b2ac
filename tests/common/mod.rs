#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use weather_scene::{
    cli::{Cli, ColorArg, ViewArg},
    domain::weather::{
        AirQuality, Coordinates, Readings, WeatherReport, WeatherSnapshot, Wind,
    },
};

/// 2024-06-01 12:00 UTC.
pub const NOON_TS: i64 = 1_717_243_200;

pub fn cli_with_key(api_key: Option<&str>) -> Cli {
    Cli {
        city: Some("London".to_string()),
        api_key: api_key.map(str::to_string),
        fps: 30,
        no_animation: true,
        no_flash: false,
        view: ViewArg::Hud,
        color: ColorArg::Always,
        no_color: false,
        weather_url: None,
        air_quality_url: None,
        log_file: None,
        one_shot: false,
    }
}

pub fn cli_for_server(uri: &str) -> Cli {
    let mut cli = cli_with_key(Some("test-key"));
    cli.weather_url = Some(format!("{uri}/data/2.5/weather"));
    cli.air_quality_url = Some(format!("{uri}/data/2.5/air_pollution"));
    cli
}

pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp(NOON_TS, 0).unwrap_or_default()
}

pub fn snapshot(code: i32, wind_speed: f32) -> WeatherSnapshot {
    WeatherSnapshot {
        city: "London".to_string(),
        country: Some("GB".to_string()),
        condition_code: code,
        description: "scattered clouds".to_string(),
        wind: Wind {
            speed: wind_speed,
            deg: 250.0,
            gust: None,
        },
        visibility_m: Some(10_000.0),
        rain_1h_mm: None,
        snow_1h_mm: None,
        sunrise: NOON_TS - 7 * 3_600,
        sunset: NOON_TS + 8 * 3_600,
        timezone_offset_s: 3_600,
        readings: Readings {
            temp_c: 16.2,
            feels_like_c: 15.4,
            humidity: 71.0,
            pressure_hpa: 1_012.0,
            sea_level_hpa: None,
        },
        coord: Coordinates {
            lat: 51.5085,
            lon: -0.1257,
        },
        fetched_at: now(),
    }
}

pub fn report(code: i32, wind_speed: f32) -> WeatherReport {
    WeatherReport {
        snapshot: snapshot(code, wind_speed),
        air_quality: Some(AirQuality { aqi: 2 }),
    }
}

pub fn weather_body(code: i32, wind_speed: f32) -> Value {
    json!({
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": code, "main": "Rain", "description": "light rain"}],
        "main": {"temp": 12.7, "feels_like": 12.1, "humidity": 82, "pressure": 1008},
        "visibility": 6000,
        "wind": {"speed": wind_speed, "deg": 200, "gust": 9.4},
        "rain": {"1h": 0.6},
        "sys": {"country": "GB", "sunrise": NOON_TS - 25_000, "sunset": NOON_TS + 30_000},
        "timezone": 3600,
        "name": "London"
    })
}

pub fn air_body(aqi: u8) -> Value {
    json!({"coord": {"lon": -0.1257, "lat": 51.5085}, "list": [{"main": {"aqi": aqi}}]})
}

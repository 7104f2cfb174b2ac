use chrono::{DateTime, Utc};

use crate::{
    cli::{Cli, ColorArg, ViewArg},
    domain::weather::{Coordinates, Readings, WeatherReport, WeatherSnapshot, Wind},
};

/// Noon on 2024-06-01 UTC, between the fixture's sunrise and sunset.
pub(crate) const NOON_TS: i64 = 1_717_243_200;
pub(crate) const MIDNIGHT_TS: i64 = 1_717_200_000;

pub(crate) fn state_test_cli() -> Cli {
    Cli {
        city: Some("London".to_string()),
        api_key: Some("test-key".to_string()),
        fps: 30,
        no_animation: true,
        no_flash: false,
        view: ViewArg::Hud,
        color: ColorArg::Auto,
        no_color: false,
        weather_url: None,
        air_quality_url: None,
        log_file: None,
        one_shot: false,
    }
}

pub(crate) fn sample_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        city: "London".to_string(),
        country: Some("GB".to_string()),
        condition_code: 800,
        description: "clear sky".to_string(),
        wind: Wind {
            speed: 7.0,
            deg: 90.0,
            gust: Some(11.2),
        },
        visibility_m: Some(10_000.0),
        rain_1h_mm: None,
        snow_1h_mm: None,
        sunrise: NOON_TS - 6 * 3_600,
        sunset: NOON_TS + 8 * 3_600,
        timezone_offset_s: 3_600,
        readings: Readings {
            temp_c: 18.4,
            feels_like_c: 17.6,
            humidity: 62.0,
            pressure_hpa: 1_014.0,
            sea_level_hpa: Some(1_014.0),
        },
        coord: Coordinates {
            lat: 51.5085,
            lon: -0.1257,
        },
        fetched_at: DateTime::<Utc>::from_timestamp(NOON_TS, 0).unwrap_or_default(),
    }
}

pub(crate) fn snapshot_with(code: i32, wind_speed: f32) -> WeatherSnapshot {
    let mut snapshot = sample_snapshot();
    snapshot.condition_code = code;
    snapshot.wind.speed = wind_speed;
    snapshot
}

pub(crate) fn sample_report() -> WeatherReport {
    WeatherReport {
        snapshot: sample_snapshot(),
        air_quality: Some(crate::domain::weather::AirQuality { aqi: 2 }),
    }
}

use chrono::{DateTime, Duration, NaiveDate, Utc};

mod astronomy;
mod conditions;
mod conversions;

pub use astronomy::{MoonPhase, moon_phase};
pub use conditions::{DayPhase, SceneCategory, classify_condition, day_phase};
pub use conversions::{cardinal, format_local_time, round_temp, temperature_fill, visibility_km};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    /// m/s
    pub speed: f32,
    /// Degrees, meteorological (direction the wind comes from).
    pub deg: f32,
    pub gust: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readings {
    pub temp_c: f32,
    pub feels_like_c: f32,
    pub humidity: f32,
    pub pressure_hpa: f32,
    pub sea_level_hpa: Option<f32>,
}

/// One successful provider response. Replaces the previous snapshot wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: Option<String>,
    pub condition_code: i32,
    pub description: String,
    pub wind: Wind,
    pub visibility_m: Option<f32>,
    pub rain_1h_mm: Option<f32>,
    pub snow_1h_mm: Option<f32>,
    pub sunrise: i64,
    pub sunset: i64,
    pub timezone_offset_s: i32,
    pub readings: Readings,
    pub coord: Coordinates,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn category(&self) -> SceneCategory {
        classify_condition(self.condition_code)
    }

    #[must_use]
    pub fn day_phase_at(&self, now_ts: i64) -> DayPhase {
        day_phase(self.sunrise, self.sunset, now_ts)
    }

    /// Last-hour rain plus snow, in mm.
    #[must_use]
    pub fn precipitation_volume(&self) -> f32 {
        self.rain_1h_mm.unwrap_or(0.0) + self.snow_1h_mm.unwrap_or(0.0)
    }

    #[must_use]
    pub fn current_temp(&self) -> i32 {
        round_temp(self.readings.temp_c)
    }

    #[must_use]
    pub fn feels_like(&self) -> i32 {
        round_temp(self.readings.feels_like_c)
    }

    #[must_use]
    pub fn sunrise_local(&self) -> String {
        format_local_time(self.sunrise, self.timezone_offset_s)
    }

    #[must_use]
    pub fn sunset_local(&self) -> String {
        format_local_time(self.sunset, self.timezone_offset_s)
    }

    /// Wall-clock time in the city, `HH:MM AM`.
    #[must_use]
    pub fn city_local_time(&self, now: DateTime<Utc>) -> String {
        format_local_time(now.timestamp(), self.timezone_offset_s)
    }

    #[must_use]
    pub fn city_local_date(&self, now: DateTime<Utc>) -> NaiveDate {
        (now + Duration::seconds(i64::from(self.timezone_offset_s))).date_naive()
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.city, country),
            None => self.city.clone(),
        }
    }
}

/// European-style 1 (good) to 5 (very poor) index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AirQuality {
    pub aqi: u8,
}

impl AirQuality {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.aqi {
            1 => "Good",
            2 => "Fair",
            3 => "Moderate",
            4 => "Poor",
            5 => "Very poor",
            _ => "Unknown",
        }
    }
}

/// Weather snapshot plus the best-effort air-quality reading fetched after it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    pub air_quality: Option<AirQuality>,
}

#[cfg(test)]
mod tests;

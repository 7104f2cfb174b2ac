//! Text readouts shared by the dashboard cards and the HUD instruments.

use chrono::{DateTime, Utc};

use crate::{
    app::instruments::InstrumentKind,
    domain::weather::{WeatherReport, cardinal, moon_phase, temperature_fill, visibility_km},
};

pub const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readout {
    Location,
    Temperature,
    Atmosphere,
    Wind,
    Astronomy,
    AirQuality,
    Precipitation,
}

impl Readout {
    /// Dashboard order.
    pub const DASHBOARD: [Self; 6] = [
        Self::Location,
        Self::Atmosphere,
        Self::Wind,
        Self::Astronomy,
        Self::AirQuality,
        Self::Precipitation,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Location => "Location",
            Self::Temperature => "Temperature",
            Self::Atmosphere => "Atmosphere",
            Self::Wind => "Wind",
            Self::Astronomy => "Astronomy",
            Self::AirQuality => "Air quality",
            Self::Precipitation => "Precipitation",
        }
    }
}

impl From<InstrumentKind> for Readout {
    fn from(kind: InstrumentKind) -> Self {
        match kind {
            InstrumentKind::Temperature => Self::Temperature,
            InstrumentKind::Wind => Self::Wind,
            InstrumentKind::Astronomy => Self::Astronomy,
            InstrumentKind::Atmosphere => Self::Atmosphere,
            InstrumentKind::AirQuality => Self::AirQuality,
            InstrumentKind::Location => Self::Location,
        }
    }
}

fn optional(value: Option<f32>, unit: &str) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |v| format!("{v:.1} {unit}"))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn fill_bar(fraction: f32, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f32).round() as usize;
    format!("▕{}{}▏", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lines for `readout`, or a single placeholder before any data arrives.
#[must_use]
pub fn readout_lines(
    readout: Readout,
    report: Option<&WeatherReport>,
    now: DateTime<Utc>,
) -> Vec<String> {
    let Some(report) = report else {
        return vec![PLACEHOLDER.to_string()];
    };
    let s = &report.snapshot;
    match readout {
        Readout::Location => vec![
            s.display_name(),
            format!("{}°C  {}", s.current_temp(), s.description),
            format!("Local time {}", s.city_local_time(now)),
            format!("{:.2}°, {:.2}°", s.coord.lat, s.coord.lon),
        ],
        Readout::Temperature => vec![
            format!("{}°C", s.current_temp()),
            format!("Feels like {}°C", s.feels_like()),
            fill_bar(temperature_fill(s.readings.temp_c), 18),
        ],
        Readout::Atmosphere => vec![
            format!("Feels like {}°C", s.feels_like()),
            format!("Humidity {:.0}%", s.readings.humidity),
            format!("Pressure {:.0} hPa", s.readings.pressure_hpa),
            format!(
                "Visibility {} km",
                s.visibility_m
                    .map_or_else(|| PLACEHOLDER.to_string(), visibility_km)
            ),
        ],
        Readout::Wind => vec![
            format!("{:.1} m/s {}", s.wind.speed, cardinal(s.wind.deg)),
            format!("Direction {:.0}°", s.wind.deg),
            format!("Gusts {}", optional(s.wind.gust, "m/s")),
        ],
        Readout::Astronomy => {
            let phase = moon_phase(s.city_local_date(now));
            vec![
                format!("Sunrise {}", s.sunrise_local()),
                format!("Sunset {}", s.sunset_local()),
                format!("{} {}", phase.glyph(), phase.label()),
            ]
        }
        Readout::AirQuality => match report.air_quality {
            Some(aq) => vec![format!("AQI {} / 5", aq.aqi), aq.label().to_string()],
            None => vec![format!("AQI {PLACEHOLDER} / 5")],
        },
        Readout::Precipitation => vec![
            format!("Rain 1h {}", optional(s.rain_1h_mm, "mm")),
            format!("Snow 1h {}", optional(s.snow_1h_mm, "mm")),
        ],
    }
}

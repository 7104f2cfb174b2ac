#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneCategory {
    Clear,
    Cloudy,
    Rain,
    Storm,
    Snow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPhase {
    Day,
    Night,
}

impl DayPhase {
    #[must_use]
    pub fn is_day(self) -> bool {
        self == Self::Day
    }
}

/// Buckets an OpenWeather condition id. Atmosphere codes (7xx) and 800 land
/// in `Clear`, as does anything outside the documented ranges.
#[must_use]
pub fn classify_condition(code: i32) -> SceneCategory {
    match code {
        200..=299 => SceneCategory::Storm,
        300..=599 => SceneCategory::Rain,
        600..=699 => SceneCategory::Snow,
        801..=899 => SceneCategory::Cloudy,
        _ => SceneCategory::Clear,
    }
}

/// Day strictly between sunrise and sunset; the exact instants count as night.
#[must_use]
pub fn day_phase(sunrise: i64, sunset: i64, now: i64) -> DayPhase {
    if sunrise < now && now < sunset {
        DayPhase::Day
    } else {
        DayPhase::Night
    }
}

impl SceneCategory {
    #[must_use]
    pub fn label(self, phase: DayPhase) -> &'static str {
        match (self, phase) {
            (Self::Clear, DayPhase::Day) => "Clear sky",
            (Self::Clear, DayPhase::Night) => "Clear night",
            (Self::Cloudy, _) => "Cloudy",
            (Self::Rain, _) => "Rain",
            (Self::Storm, _) => "Thunderstorm",
            (Self::Snow, _) => "Snow",
        }
    }

    #[must_use]
    pub fn icon(self, phase: DayPhase) -> &'static str {
        match (self, phase) {
            (Self::Clear, DayPhase::Day) => "☀",
            (Self::Clear, DayPhase::Night) => "☾",
            (Self::Cloudy, _) => "☁",
            (Self::Rain, _) => "☂",
            (Self::Storm, _) => "⚡",
            (Self::Snow, _) => "❄",
        }
    }

    #[must_use]
    pub fn has_precipitation(self) -> bool {
        matches!(self, Self::Rain | Self::Storm | Self::Snow)
    }
}

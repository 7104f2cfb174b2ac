use crate::domain::weather::Wind;

const MAX_TILT_DEG: f32 = 20.0;
const MAX_FOG: f32 = 0.85;
const CLEAR_VISIBILITY_M: f32 = 10_000.0;

/// Wind-derived animation strength, 0 (calm) to 10 (gale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Intensity(u8);

impl Intensity {
    pub const MAX: u8 = 10;

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_wind_speed(speed: f32) -> Self {
        if speed.is_nan() || speed <= 0.0 {
            return Self(0);
        }
        let level = (speed / 2.0).floor().min(f32::from(Self::MAX));
        Self(level as u8)
    }

    #[must_use]
    pub fn new(level: u8) -> Self {
        Self(level.min(Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_f32(self) -> f32 {
        f32::from(self.0)
    }
}

/// Opacity of the fog veil, 0 to 0.85.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FogLevel(f32);

impl FogLevel {
    #[must_use]
    pub fn from_visibility(visibility_m: f32) -> Self {
        if visibility_m.is_nan() {
            return Self(0.0);
        }
        Self((1.0 - visibility_m / CLEAR_VISIBILITY_M).clamp(0.0, MAX_FOG))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_visible(self) -> bool {
        self.0 > 0.0
    }
}

/// Sideways lean for balloons: the wind's east-west component, capped at
/// twenty degrees either way.
#[must_use]
pub fn tilt_degrees(wind: Wind) -> f32 {
    let speed = if wind.speed.is_finite() {
        wind.speed.max(0.0)
    } else {
        0.0
    };
    let deg = if wind.deg.is_finite() {
        wind.deg.rem_euclid(360.0)
    } else {
        0.0
    };
    deg.to_radians().sin() * (speed * 1.5).min(MAX_TILT_DEG)
}

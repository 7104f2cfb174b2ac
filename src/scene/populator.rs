use super::{Intensity, RandomSource};
use crate::domain::weather::{DayPhase, SceneCategory};

pub const MAX_RAINDROPS: usize = 400;
pub const MAX_SNOWFLAKES: usize = 200;
pub const STAR_COUNT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    pub width: f32,
    pub top_pct: f32,
    pub left_pct: f32,
    /// Seconds for one crossing of the sky.
    pub speed_s: f32,
    pub delay_s: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Raindrop {
    pub length: f32,
    pub left_pct: f32,
    pub duration_s: f32,
    pub delay_s: f32,
    pub rotation_deg: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snowflake {
    pub size: f32,
    pub left_pct: f32,
    pub duration_s: f32,
    pub delay_s: f32,
    pub swing: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub top_pct: f32,
    pub left_pct: f32,
    pub size: f32,
    pub delay_s: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Precipitation {
    pub raindrops: Vec<Raindrop>,
    pub snowflakes: Vec<Snowflake>,
}

#[must_use]
pub fn cloud_count(category: SceneCategory) -> usize {
    match category {
        SceneCategory::Clear => 1,
        SceneCategory::Cloudy | SceneCategory::Snow => 8,
        SceneCategory::Rain | SceneCategory::Storm => 12,
    }
}

pub fn populate_clouds(
    category: SceneCategory,
    intensity: Intensity,
    rng: &mut dyn RandomSource,
) -> Vec<Cloud> {
    let base_speed = 60.0 - intensity.as_f32() * 4.0;
    (0..cloud_count(category))
        .map(|_| Cloud {
            width: rng.between(100.0, 250.0),
            top_pct: rng.between(0.0, 40.0),
            left_pct: rng.between(-20.0, 0.0),
            speed_s: rng.between(base_speed, base_speed + 20.0),
            delay_s: -rng.between(0.0, 20.0),
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn particle_count(base: usize, intensity: Intensity, volume: f32, cap: usize) -> usize {
    let volume = if volume.is_finite() { volume.max(0.0) } else { 0.0 };
    let total = base as f32 + intensity.as_f32() * 10.0 + (volume * 20.0).floor();
    (total as usize).min(cap)
}

#[must_use]
pub fn raindrop_count(intensity: Intensity, volume: f32) -> usize {
    particle_count(30, intensity, volume, MAX_RAINDROPS)
}

#[must_use]
pub fn snowflake_count(intensity: Intensity, volume: f32) -> usize {
    particle_count(50, intensity, volume, MAX_SNOWFLAKES)
}

/// Rain for rain and storm, snow for snow, nothing otherwise. The inactive
/// collection is always empty.
pub fn populate_precipitation(
    category: SceneCategory,
    intensity: Intensity,
    volume: f32,
    rng: &mut dyn RandomSource,
) -> Precipitation {
    match category {
        SceneCategory::Rain | SceneCategory::Storm => {
            let rotation_deg = 10.0 + intensity.as_f32() * 2.0;
            let raindrops = (0..raindrop_count(intensity, volume))
                .map(|_| Raindrop {
                    length: rng.between(10.0, 30.0),
                    left_pct: rng.between(0.0, 100.0),
                    duration_s: rng.between(0.5, 1.0),
                    delay_s: -rng.between(0.0, 2.0),
                    rotation_deg,
                })
                .collect();
            Precipitation {
                raindrops,
                snowflakes: Vec::new(),
            }
        }
        SceneCategory::Snow => {
            let snowflakes = (0..snowflake_count(intensity, volume))
                .map(|_| Snowflake {
                    size: rng.between(2.0, 6.0),
                    left_pct: rng.between(0.0, 100.0),
                    duration_s: rng.between(3.0, 8.0),
                    delay_s: -rng.between(0.0, 10.0),
                    swing: rng.between(-10.0, 10.0),
                })
                .collect();
            Precipitation {
                raindrops: Vec::new(),
                snowflakes,
            }
        }
        SceneCategory::Clear | SceneCategory::Cloudy => Precipitation::default(),
    }
}

/// Stars only on clear nights.
pub fn populate_stars(
    phase: DayPhase,
    category: SceneCategory,
    rng: &mut dyn RandomSource,
) -> Vec<Star> {
    if phase.is_day() || category != SceneCategory::Clear {
        return Vec::new();
    }
    (0..STAR_COUNT)
        .map(|_| Star {
            top_pct: rng.between(0.0, 60.0),
            left_pct: rng.between(0.0, 100.0),
            size: rng.between(1.0, 3.0),
            delay_s: rng.between(0.0, 5.0),
        })
        .collect()
}

//! Scene parameter engine: turns a weather snapshot into everything the
//! canvas needs to draw, without touching the terminal.

mod intensity;
mod lightning;
mod populator;
mod random;
mod theme;

pub use intensity::{FogLevel, Intensity, tilt_degrees};
pub use lightning::{
    FLASH_DURATION, LightningPulse, LightningState, flash_window_ms, next_flash_delay,
};
pub use populator::{
    Cloud, MAX_RAINDROPS, MAX_SNOWFLAKES, Precipitation, Raindrop, STAR_COUNT, Snowflake, Star,
    cloud_count, populate_clouds, populate_precipitation, populate_stars, raindrop_count,
    snowflake_count,
};
pub use random::{RandomSource, SequenceRandom, SystemRandom};
pub use theme::{
    BALLOONS, BalloonColors, BalloonLayout, BoatColors, CloudTint, MotionParams, Palette, Rgb,
    WAVE_LAYERS, WaveLayer, balloon_colors, boat_colors, fog_veil, motion, palette,
};

use tracing::debug;

use crate::domain::weather::{DayPhase, SceneCategory, WeatherSnapshot, Wind};

/// What the lightning task should do after a snapshot is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StormTransition {
    Unchanged,
    Started { generation: u64 },
    Stopped,
    /// Still stormy but at a new intensity; the old cycle is dead.
    Restarted { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneUpdate {
    pub clouds: bool,
    pub precipitation: bool,
    pub stars: bool,
    pub storm: StormTransition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub category: SceneCategory,
    pub day_phase: DayPhase,
    pub intensity: Intensity,
    pub fog: FogLevel,
    pub tilt_deg: f32,
    pub wind_speed: f32,
    pub precipitation_mm: f32,
    pub clouds: Vec<Cloud>,
    pub raindrops: Vec<Raindrop>,
    pub snowflakes: Vec<Snowflake>,
    pub stars: Vec<Star>,
    pub lightning: LightningState,
}

impl SceneState {
    /// Clear daytime sky with a light breeze, shown before any data arrives.
    pub fn new(rng: &mut dyn RandomSource) -> Self {
        let category = SceneCategory::Clear;
        let intensity = Intensity::new(3);
        Self {
            category,
            day_phase: DayPhase::Day,
            intensity,
            fog: FogLevel::default(),
            tilt_deg: 0.0,
            wind_speed: 0.0,
            precipitation_mm: 0.0,
            clouds: populate_clouds(category, intensity, rng),
            raindrops: Vec::new(),
            snowflakes: Vec::new(),
            stars: Vec::new(),
            lightning: LightningState::default(),
        }
    }

    #[must_use]
    pub fn palette(&self) -> &'static Palette {
        palette(self.day_phase, self.category)
    }

    #[must_use]
    pub fn motion(&self) -> MotionParams {
        motion(self.category, self.intensity)
    }

    #[must_use]
    pub fn cloud_tint(&self) -> CloudTint {
        CloudTint::from_volume(self.precipitation_mm)
    }

    #[must_use]
    pub fn is_storm(&self) -> bool {
        self.category == SceneCategory::Storm
    }

    /// Derives every scene parameter from `snapshot` as seen at `now_ts`.
    /// Clouds regenerate on a category or intensity change, precipitation on
    /// every snapshot, stars on a day-phase or category change.
    pub fn apply(
        &mut self,
        snapshot: &WeatherSnapshot,
        now_ts: i64,
        rng: &mut dyn RandomSource,
    ) -> SceneUpdate {
        let category = snapshot.category();
        let day_phase = snapshot.day_phase_at(now_ts);
        let intensity = Intensity::from_wind_speed(snapshot.wind.speed);

        let clouds = (category, intensity) != (self.category, self.intensity);
        let stars = (day_phase, category) != (self.day_phase, self.category);
        let was_storm = self.is_storm();
        let intensity_changed = intensity != self.intensity;

        self.category = category;
        self.day_phase = day_phase;
        self.intensity = intensity;
        self.fog = snapshot
            .visibility_m
            .map_or_else(FogLevel::default, FogLevel::from_visibility);
        self.apply_wind(snapshot.wind);
        self.precipitation_mm = snapshot.precipitation_volume();

        if clouds {
            self.clouds = populate_clouds(category, intensity, rng);
        }
        let precipitation = populate_precipitation(category, intensity, self.precipitation_mm, rng);
        self.raindrops = precipitation.raindrops;
        self.snowflakes = precipitation.snowflakes;
        if stars {
            self.stars = populate_stars(day_phase, category, rng);
        }

        let storm = match (was_storm, self.is_storm()) {
            (true, false) => {
                self.lightning.cancel();
                StormTransition::Stopped
            }
            (false, true) => StormTransition::Started {
                generation: self.lightning.arm(),
            },
            (true, true) if intensity_changed => StormTransition::Restarted {
                generation: self.lightning.arm(),
            },
            _ => StormTransition::Unchanged,
        };

        debug!(
            ?category,
            ?day_phase,
            intensity = intensity.value(),
            clouds = self.clouds.len(),
            raindrops = self.raindrops.len(),
            snowflakes = self.snowflakes.len(),
            stars = self.stars.len(),
            ?storm,
            "scene regenerated"
        );

        SceneUpdate {
            clouds,
            precipitation: true,
            stars,
            storm,
        }
    }

    fn apply_wind(&mut self, wind: Wind) {
        self.tilt_deg = tilt_degrees(wind);
        self.wind_speed = if wind.speed.is_finite() {
            wind.speed.max(0.0)
        } else {
            0.0
        };
    }

    /// Applies a lightning pulse; stale or out-of-storm pulses are dropped.
    pub fn apply_pulse(&mut self, pulse: LightningPulse) -> bool {
        if !self.is_storm() {
            return false;
        }
        self.lightning.pulse(pulse)
    }

    #[must_use]
    pub fn flash_visible(&self) -> bool {
        self.lightning.flash
    }
}

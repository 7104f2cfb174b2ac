use super::Intensity;
use crate::domain::weather::{DayPhase, SceneCategory};

/// 24-bit color, independent of any terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hex(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

const fn hex(value: u32) -> Rgb {
    Rgb::hex(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub sky_id: &'static str,
    /// Top, middle, horizon.
    pub sky: [Rgb; 3],
    /// Back to front.
    pub waves: [Rgb; 5],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoatColors {
    pub sail: Rgb,
    pub jib: Rgb,
    pub hull: Rgb,
    pub deck: Rgb,
    pub mast: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalloonColors {
    pub envelope: Rgb,
    pub band: Rgb,
    pub basket: Rgb,
}

static DAY_CLEAR: Palette = Palette {
    sky_id: "clear-day",
    sky: [hex(0x0284c7), hex(0x38bdf8), hex(0xbae6fd)],
    waves: [
        hex(0x7dd3fc),
        hex(0x38bdf8),
        hex(0x0ea5e9),
        hex(0x0284c7),
        hex(0x0369a1),
    ],
};
static DAY_CLOUDY: Palette = Palette {
    sky_id: "cloudy-day",
    sky: [hex(0x94a3b8), hex(0xcbd5e1), hex(0xe2e8f0)],
    waves: [
        hex(0xe2e8f0),
        hex(0xcbd5e1),
        hex(0x94a3b8),
        hex(0x64748b),
        hex(0x475569),
    ],
};
static DAY_RAIN: Palette = Palette {
    sky_id: "rain-day",
    sky: [hex(0x475569), hex(0x64748b), hex(0x94a3b8)],
    waves: [
        hex(0xcbd5e1),
        hex(0x94a3b8),
        hex(0x64748b),
        hex(0x475569),
        hex(0x334155),
    ],
};
static DAY_STORM: Palette = Palette {
    sky_id: "storm-day",
    sky: [hex(0x1e293b), hex(0x334155), hex(0x475569)],
    waves: [
        hex(0x94a3b8),
        hex(0x64748b),
        hex(0x475569),
        hex(0x334155),
        hex(0x1e293b),
    ],
};
static DAY_SNOW: Palette = Palette {
    sky_id: "snow-day",
    sky: [hex(0xe2e8f0), hex(0xf1f5f9), hex(0xffffff)],
    waves: [
        hex(0xf1f5f9),
        hex(0xe2e8f0),
        hex(0xcbd5e1),
        hex(0x94a3b8),
        hex(0x64748b),
    ],
};
static NIGHT_CLEAR: Palette = Palette {
    sky_id: "clear-night",
    sky: [hex(0x0f172a), hex(0x1e1b4b), hex(0x312e81)],
    waves: [
        hex(0x6366f1),
        hex(0x4f46e5),
        hex(0x4338ca),
        hex(0x3730a3),
        hex(0x312e81),
    ],
};
static NIGHT_CLOUDY: Palette = Palette {
    sky_id: "cloudy-night",
    sky: [hex(0x030712), hex(0x0f172a), hex(0x1e293b)],
    waves: [
        hex(0x64748b),
        hex(0x475569),
        hex(0x334155),
        hex(0x1e293b),
        hex(0x0f172a),
    ],
};
static NIGHT_RAIN: Palette = Palette {
    sky_id: "rain-night",
    sky: [hex(0x020617), hex(0x111827), hex(0x1f2937)],
    waves: [
        hex(0x475569),
        hex(0x334155),
        hex(0x1e293b),
        hex(0x0f172a),
        hex(0x020617),
    ],
};
static NIGHT_STORM: Palette = Palette {
    sky_id: "storm-night",
    sky: [hex(0x000000), hex(0x020617), hex(0x3b0764)],
    waves: [
        hex(0x4338ca),
        hex(0x3730a3),
        hex(0x312e81),
        hex(0x1e1b4b),
        hex(0x000000),
    ],
};
static NIGHT_SNOW: Palette = Palette {
    sky_id: "snow-night",
    sky: [hex(0x0f172a), hex(0x1e293b), hex(0x172554)],
    waves: [
        hex(0xa5f3fc),
        hex(0x67e8f9),
        hex(0x22d3ee),
        hex(0x06b6d4),
        hex(0x0891b2),
    ],
};

#[must_use]
pub fn palette(phase: DayPhase, category: SceneCategory) -> &'static Palette {
    match (phase, category) {
        (DayPhase::Day, SceneCategory::Clear) => &DAY_CLEAR,
        (DayPhase::Day, SceneCategory::Cloudy) => &DAY_CLOUDY,
        (DayPhase::Day, SceneCategory::Rain) => &DAY_RAIN,
        (DayPhase::Day, SceneCategory::Storm) => &DAY_STORM,
        (DayPhase::Day, SceneCategory::Snow) => &DAY_SNOW,
        (DayPhase::Night, SceneCategory::Clear) => &NIGHT_CLEAR,
        (DayPhase::Night, SceneCategory::Cloudy) => &NIGHT_CLOUDY,
        (DayPhase::Night, SceneCategory::Rain) => &NIGHT_RAIN,
        (DayPhase::Night, SceneCategory::Storm) => &NIGHT_STORM,
        (DayPhase::Night, SceneCategory::Snow) => &NIGHT_SNOW,
    }
}

#[must_use]
pub fn boat_colors(phase: DayPhase) -> BoatColors {
    match phase {
        DayPhase::Day => BoatColors {
            sail: hex(0xffffff),
            jib: hex(0xf1f5f9),
            hull: hex(0xa16207),
            deck: hex(0xca8a04),
            mast: hex(0x78350f),
        },
        DayPhase::Night => BoatColors {
            sail: hex(0x475569),
            jib: hex(0x334155),
            hull: hex(0x1e293b),
            deck: hex(0x0f172a),
            mast: hex(0x020617),
        },
    }
}

#[must_use]
pub fn balloon_colors(phase: DayPhase) -> BalloonColors {
    match phase {
        DayPhase::Day => BalloonColors {
            envelope: hex(0xef4444),
            band: hex(0xb91c1c),
            basket: hex(0x78350f),
        },
        DayPhase::Night => BalloonColors {
            envelope: hex(0xc2410c),
            band: hex(0x991b1b),
            basket: hex(0x451a03),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudTint {
    Plain,
    Light,
    Heavy,
}

impl CloudTint {
    #[must_use]
    pub fn from_volume(volume_mm: f32) -> Self {
        if volume_mm > 2.0 {
            Self::Heavy
        } else if volume_mm > 0.1 {
            Self::Light
        } else {
            Self::Plain
        }
    }

    #[must_use]
    pub fn color(self, phase: DayPhase) -> Rgb {
        match (self, phase) {
            (Self::Heavy, DayPhase::Day) => hex(0x334155),
            (Self::Heavy, DayPhase::Night) => hex(0x1e293b),
            (Self::Light, DayPhase::Day) => hex(0x94a3b8),
            (Self::Light, DayPhase::Night) => hex(0x475569),
            (Self::Plain, DayPhase::Day) => hex(0xffffff),
            (Self::Plain, DayPhase::Night) => hex(0x64748b),
        }
    }
}

/// Veil color and its maximum opacity.
#[must_use]
pub fn fog_veil(phase: DayPhase) -> (Rgb, f32) {
    match phase {
        DayPhase::Day => (hex(0xffffff), 0.8),
        DayPhase::Night => (Rgb(15, 23, 42), 0.9),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    pub wave_scale_y: f32,
    pub bob_height_px: f32,
    pub boat_rotation_deg: f32,
    pub mainsail_scale: f32,
    pub jib_scale: f32,
    /// Waves and boat hold still (iced over).
    pub frozen: bool,
}

#[must_use]
pub fn motion(category: SceneCategory, intensity: Intensity) -> MotionParams {
    let i = intensity.as_f32();
    let storm_boost = if category == SceneCategory::Storm {
        1.5
    } else {
        1.0
    };
    let frozen = category == SceneCategory::Snow;
    MotionParams {
        wave_scale_y: (1.2 + i * 0.15) * storm_boost,
        bob_height_px: (10.0 + i * 8.0) * storm_boost,
        boat_rotation_deg: if frozen { 25.0 } else { i * 1.5 },
        mainsail_scale: 1.0 + i * 0.06,
        jib_scale: 1.0 + i * 0.03,
        frozen,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveLayer {
    pub speed_base_s: f32,
    pub bob_period_s: f32,
    pub bob_delay_s: f32,
    pub opacity: f32,
}

/// Back to front, matching `Palette::waves`.
pub const WAVE_LAYERS: [WaveLayer; 5] = [
    WaveLayer {
        speed_base_s: 35.0,
        bob_period_s: 7.0,
        bob_delay_s: 0.0,
        opacity: 0.5,
    },
    WaveLayer {
        speed_base_s: 28.0,
        bob_period_s: 6.0,
        bob_delay_s: -1.0,
        opacity: 0.6,
    },
    WaveLayer {
        speed_base_s: 20.0,
        bob_period_s: 5.0,
        bob_delay_s: -2.0,
        opacity: 0.7,
    },
    WaveLayer {
        speed_base_s: 14.0,
        bob_period_s: 4.0,
        bob_delay_s: -1.5,
        opacity: 0.85,
    },
    WaveLayer {
        speed_base_s: 9.0,
        bob_period_s: 3.0,
        bob_delay_s: -0.5,
        opacity: 1.0,
    },
];

impl WaveLayer {
    /// Seconds per horizontal cycle; stronger wind moves water faster.
    #[must_use]
    pub fn flow_period_s(&self, intensity: Intensity) -> f32 {
        self.speed_base_s - intensity.as_f32()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalloonLayout {
    pub left_pct: f32,
    pub top_pct: f32,
    pub bob_base_s: f32,
    /// Balloons further away render smaller and dimmer.
    pub depth: f32,
}

/// Far, middle, near.
pub const BALLOONS: [BalloonLayout; 3] = [
    BalloonLayout {
        left_pct: 15.0,
        top_pct: 25.0,
        bob_base_s: 8.0,
        depth: 0.6,
    },
    BalloonLayout {
        left_pct: 75.0,
        top_pct: 15.0,
        bob_base_s: 7.0,
        depth: 0.8,
    },
    BalloonLayout {
        left_pct: 45.0,
        top_pct: 20.0,
        bob_base_s: 6.0,
        depth: 1.0,
    },
];

impl BalloonLayout {
    /// Bob period shortens as the wind picks up, never below one second.
    #[must_use]
    pub fn bob_period_s(&self, wind_speed: f32) -> f32 {
        let wind = if wind_speed.is_finite() {
            wind_speed.max(0.0)
        } else {
            0.0
        };
        (self.bob_base_s - wind / 5.0).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHASES: [DayPhase; 2] = [DayPhase::Day, DayPhase::Night];
    const CATEGORIES: [SceneCategory; 5] = [
        SceneCategory::Clear,
        SceneCategory::Cloudy,
        SceneCategory::Rain,
        SceneCategory::Storm,
        SceneCategory::Snow,
    ];

    #[test]
    fn every_combination_has_a_distinct_palette() {
        let mut ids = Vec::new();
        for phase in PHASES {
            for category in CATEGORIES {
                ids.push(palette(phase, category).sky_id);
            }
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn palette_values_match_table() {
        let clear = palette(DayPhase::Day, SceneCategory::Clear);
        assert_eq!(clear.sky[0], Rgb(0x02, 0x84, 0xc7));
        assert_eq!(clear.waves[4], Rgb(0x03, 0x69, 0xa1));
        let storm = palette(DayPhase::Night, SceneCategory::Storm);
        assert_eq!(storm.sky[0], Rgb(0, 0, 0));
        assert_eq!(storm.waves[0], Rgb::hex(0x4338ca));
        assert_eq!(boat_colors(DayPhase::Day).hull, Rgb::hex(0xa16207));
        assert_eq!(boat_colors(DayPhase::Night).sail, Rgb::hex(0x475569));
    }

    #[test]
    fn motion_scales_with_intensity() {
        let calm = motion(SceneCategory::Clear, Intensity::new(0));
        assert!((calm.wave_scale_y - 1.2).abs() < 1e-5);
        assert!((calm.bob_height_px - 10.0).abs() < 1e-5);
        assert!(calm.boat_rotation_deg.abs() < 1e-5);
        assert!(!calm.frozen);

        let windy = motion(SceneCategory::Rain, Intensity::new(10));
        assert!((windy.mainsail_scale - 1.6).abs() < 1e-5);
        assert!((windy.jib_scale - 1.3).abs() < 1e-5);
        assert!((windy.boat_rotation_deg - 15.0).abs() < 1e-5);
    }

    #[test]
    fn storms_amplify_and_snow_freezes() {
        let storm = motion(SceneCategory::Storm, Intensity::new(4));
        assert!((storm.wave_scale_y - 2.7).abs() < 1e-4);
        assert!((storm.bob_height_px - 63.0).abs() < 1e-4);

        let snow = motion(SceneCategory::Snow, Intensity::new(4));
        assert!(snow.frozen);
        assert!((snow.boat_rotation_deg - 25.0).abs() < 1e-5);
    }

    #[test]
    fn wave_flow_period_shrinks_with_intensity() {
        let periods: Vec<f32> = WAVE_LAYERS
            .iter()
            .map(|layer| layer.flow_period_s(Intensity::new(5)))
            .collect();
        assert_eq!(periods, vec![30.0, 23.0, 15.0, 9.0, 4.0]);
    }

    #[test]
    fn cloud_tint_thresholds() {
        assert_eq!(CloudTint::from_volume(0.0), CloudTint::Plain);
        assert_eq!(CloudTint::from_volume(0.1), CloudTint::Plain);
        assert_eq!(CloudTint::from_volume(0.2), CloudTint::Light);
        assert_eq!(CloudTint::from_volume(2.0), CloudTint::Light);
        assert_eq!(CloudTint::from_volume(2.5), CloudTint::Heavy);
        assert_eq!(
            CloudTint::Heavy.color(DayPhase::Night),
            Rgb::hex(0x1e293b)
        );
    }

    #[test]
    fn balloon_bob_never_stalls() {
        assert!((BALLOONS[2].bob_period_s(5.0) - 5.0).abs() < 1e-5);
        assert!((BALLOONS[2].bob_period_s(80.0) - 1.0).abs() < 1e-5);
        assert!((BALLOONS[0].bob_period_s(f32::NAN) - 8.0).abs() < 1e-5);
    }
}

mod common;

use std::time::Duration;

use proptest::prelude::*;
use weather_scene::{
    domain::weather::{SceneCategory, Wind, classify_condition},
    scene::{
        FogLevel, Intensity, MAX_RAINDROPS, MAX_SNOWFLAKES, SceneState, SequenceRandom,
        next_flash_delay, populate_precipitation, raindrop_count, snowflake_count,
        tilt_degrees,
    },
};

use common::{NOON_TS, snapshot};

proptest! {
    #[test]
    fn intensity_stays_in_range(speed in any::<f32>()) {
        prop_assert!(Intensity::from_wind_speed(speed).value() <= 10);
    }

    #[test]
    fn intensity_is_monotonic(a in 0.0f32..200.0, b in 0.0f32..200.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Intensity::from_wind_speed(lo) <= Intensity::from_wind_speed(hi));
    }

    #[test]
    fn fog_stays_in_range(visibility in any::<f32>()) {
        let fog = FogLevel::from_visibility(visibility).value();
        prop_assert!((0.0..=0.85).contains(&fog));
    }

    #[test]
    fn tilt_never_exceeds_twenty_degrees(speed in any::<f32>(), deg in any::<f32>()) {
        let tilt = tilt_degrees(Wind { speed, deg, gust: None });
        prop_assert!(tilt.is_finite());
        prop_assert!(tilt.abs() <= 20.0 + f32::EPSILON);
    }

    #[test]
    fn particle_counts_are_capped_and_grow_with_volume(
        level in 0u8..=10,
        volume in 0.0f32..100.0,
        extra in 0.0f32..10.0,
    ) {
        let intensity = Intensity::new(level);
        prop_assert!(raindrop_count(intensity, volume) <= MAX_RAINDROPS);
        prop_assert!(snowflake_count(intensity, volume) <= MAX_SNOWFLAKES);
        prop_assert!(raindrop_count(intensity, volume) <= raindrop_count(intensity, volume + extra));
        prop_assert!(snowflake_count(intensity, volume) <= snowflake_count(intensity, volume + extra));
    }

    #[test]
    fn only_one_precipitation_kind_at_a_time(code in 100i32..1000, level in 0u8..=10, volume in 0.0f32..5.0) {
        let category = classify_condition(code);
        let mut rng = SequenceRandom::constant(0.5);
        let precipitation = populate_precipitation(category, Intensity::new(level), volume, &mut rng);
        prop_assert!(precipitation.raindrops.is_empty() || precipitation.snowflakes.is_empty());
        match category {
            SceneCategory::Rain | SceneCategory::Storm => prop_assert!(!precipitation.raindrops.is_empty()),
            SceneCategory::Snow => prop_assert!(!precipitation.snowflakes.is_empty()),
            SceneCategory::Clear | SceneCategory::Cloudy => {
                prop_assert!(precipitation.raindrops.is_empty() && precipitation.snowflakes.is_empty());
            }
        }
    }

    #[test]
    fn lightning_delay_stays_in_window(level in 0u8..=10, unit in 0.0f64..1.0) {
        let mut rng = SequenceRandom::constant(unit);
        let delay = next_flash_delay(Intensity::new(level), &mut rng);
        let window = 10_000 - u64::from(level) * 900;
        prop_assert!(delay >= Duration::from_millis(500));
        prop_assert!(delay < Duration::from_millis(500 + window));
    }

    #[test]
    fn scene_tracks_any_snapshot(code in 100i32..1000, speed in 0.0f32..60.0, offset in -50_000i64..50_000) {
        let mut rng = SequenceRandom::constant(0.25);
        let mut scene = SceneState::new(&mut rng);
        let snap = snapshot(code, speed);
        scene.apply(&snap, NOON_TS + offset, &mut rng);
        prop_assert_eq!(scene.category, classify_condition(code));
        prop_assert_eq!(scene.intensity, Intensity::from_wind_speed(speed));
        prop_assert!(scene.stars.is_empty() || (scene.category == SceneCategory::Clear && !scene.day_phase.is_day()));
        prop_assert_eq!(scene.is_storm(), scene.category == SceneCategory::Storm);
    }
}

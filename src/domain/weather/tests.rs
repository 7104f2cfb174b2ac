use super::*;

fn snapshot() -> WeatherSnapshot {
    crate::test_support::sample_snapshot()
}

#[test]
fn condition_ranges_map_to_categories() {
    for code in [200, 202, 232, 299] {
        assert_eq!(classify_condition(code), SceneCategory::Storm, "{code}");
    }
    for code in [300, 321, 500, 531, 599] {
        assert_eq!(classify_condition(code), SceneCategory::Rain, "{code}");
    }
    for code in [600, 622, 699] {
        assert_eq!(classify_condition(code), SceneCategory::Snow, "{code}");
    }
    for code in [801, 804, 899] {
        assert_eq!(classify_condition(code), SceneCategory::Cloudy, "{code}");
    }
}

#[test]
fn unmatched_codes_fall_back_to_clear() {
    for code in [i32::MIN, -1, 0, 100, 199, 700, 741, 781, 800, 900, 950, i32::MAX] {
        assert_eq!(classify_condition(code), SceneCategory::Clear, "{code}");
    }
}

#[test]
fn day_phase_is_strict_on_both_edges() {
    let sunrise = 1_000;
    let sunset = 2_000;
    assert_eq!(day_phase(sunrise, sunset, 1_001), DayPhase::Day);
    assert_eq!(day_phase(sunrise, sunset, 1_999), DayPhase::Day);
    assert_eq!(day_phase(sunrise, sunset, sunrise), DayPhase::Night);
    assert_eq!(day_phase(sunrise, sunset, sunset), DayPhase::Night);
    assert_eq!(day_phase(sunrise, sunset, 500), DayPhase::Night);
    assert_eq!(day_phase(sunrise, sunset, 2_500), DayPhase::Night);
}

#[test]
fn precipitation_volume_sums_present_fields() {
    let mut snap = snapshot();
    snap.rain_1h_mm = None;
    snap.snow_1h_mm = None;
    assert!(snap.precipitation_volume().abs() < f32::EPSILON);

    snap.rain_1h_mm = Some(1.25);
    assert!((snap.precipitation_volume() - 1.25).abs() < f32::EPSILON);

    snap.snow_1h_mm = Some(0.5);
    assert!((snap.precipitation_volume() - 1.75).abs() < f32::EPSILON);
}

#[test]
fn cardinal_rounds_to_nearest_octant() {
    assert_eq!(cardinal(0.0), "N");
    assert_eq!(cardinal(22.0), "N");
    assert_eq!(cardinal(23.0), "NE");
    assert_eq!(cardinal(90.0), "E");
    assert_eq!(cardinal(225.0), "SW");
    assert_eq!(cardinal(350.0), "N");
    assert_eq!(cardinal(f32::NAN), "-");
}

#[test]
fn local_time_applies_timezone_offset() {
    // 2024-01-01T06:30:00Z
    let ts = 1_704_090_600;
    assert_eq!(format_local_time(ts, 0), "06:30 AM");
    assert_eq!(format_local_time(ts, 3_600 * 9), "03:30 PM");
    assert_eq!(format_local_time(ts, -3_600 * 7), "11:30 PM");
}

#[test]
fn moon_phase_matches_known_dates() {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
    assert_eq!(moon_phase(date(2000, 1, 6)), MoonPhase::New);
    assert_eq!(moon_phase(date(2024, 1, 25)), MoonPhase::Full);
    assert_eq!(moon_phase(date(2024, 4, 8)), MoonPhase::New);
    assert_eq!(moon_phase(date(2024, 2, 2)), MoonPhase::LastQuarter);
    assert_eq!(MoonPhase::Full.label(), "Full Moon");
}

#[test]
fn temperature_fill_clamps_to_ring() {
    assert!(temperature_fill(-20.0).abs() < f32::EPSILON);
    assert!((temperature_fill(40.0) - 1.0).abs() < f32::EPSILON);
    assert!((temperature_fill(17.5) - 0.5).abs() < 1e-6);
    assert!(temperature_fill(f32::NAN).abs() < f32::EPSILON);
}

#[test]
fn display_name_includes_country_when_known() {
    let mut snap = snapshot();
    assert_eq!(snap.display_name(), "London, GB");
    snap.country = None;
    assert_eq!(snap.display_name(), "London");
}

#[test]
fn air_quality_labels_cover_scale() {
    assert_eq!(AirQuality { aqi: 1 }.label(), "Good");
    assert_eq!(AirQuality { aqi: 5 }.label(), "Very poor");
    assert_eq!(AirQuality { aqi: 9 }.label(), "Unknown");
}

#[test]
fn visibility_formats_one_decimal_km() {
    assert_eq!(visibility_km(10_000.0), "10.0");
    assert_eq!(visibility_km(3_450.0), "3.5");
}

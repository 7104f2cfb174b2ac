use chrono::DateTime;

const CARDINALS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Temperature ring spans this range in °C.
const TEMP_RING_MIN_C: f32 = -5.0;
const TEMP_RING_MAX_C: f32 = 40.0;

#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_temp(value: f32) -> i32 {
    value.round() as i32
}

#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cardinal(deg: f32) -> &'static str {
    if !deg.is_finite() {
        return "-";
    }
    let idx = (deg.rem_euclid(360.0) / 45.0).round() as usize % CARDINALS.len();
    CARDINALS[idx]
}

/// `HH:MM AM` of an epoch timestamp shifted by the city's UTC offset.
#[must_use]
pub fn format_local_time(timestamp: i64, tz_offset_s: i32) -> String {
    DateTime::from_timestamp(timestamp + i64::from(tz_offset_s), 0)
        .map_or_else(|| "--".to_string(), |t| t.format("%I:%M %p").to_string())
}

/// Position of `temp_c` along the temperature ring, 0..=1.
#[must_use]
pub fn temperature_fill(temp_c: f32) -> f32 {
    if !temp_c.is_finite() {
        return 0.0;
    }
    ((temp_c - TEMP_RING_MIN_C) / (TEMP_RING_MAX_C - TEMP_RING_MIN_C)).clamp(0.0, 1.0)
}

#[must_use]
pub fn visibility_km(visibility_m: f32) -> String {
    format!("{:.1}", visibility_m / 1000.0)
}

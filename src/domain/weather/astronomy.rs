use chrono::{Datelike, NaiveDate};

const SYNODIC_MONTH_DAYS: f64 = 29.530_588_2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

const PHASES: [MoonPhase; 8] = [
    MoonPhase::New,
    MoonPhase::WaxingCrescent,
    MoonPhase::FirstQuarter,
    MoonPhase::WaxingGibbous,
    MoonPhase::Full,
    MoonPhase::WaningGibbous,
    MoonPhase::LastQuarter,
    MoonPhase::WaningCrescent,
];

impl MoonPhase {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Self::New => '●',
            Self::WaxingCrescent | Self::FirstQuarter => '◐',
            Self::WaxingGibbous | Self::Full | Self::WaningGibbous => '○',
            Self::LastQuarter | Self::WaningCrescent => '◑',
        }
    }
}

/// Approximate phase from a day count since a reference new moon, snapped
/// to the nearest eighth of the lunar cycle.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn moon_phase(date: NaiveDate) -> MoonPhase {
    let mut year = f64::from(date.year());
    let mut month = f64::from(date.month());
    if month < 3.0 {
        year -= 1.0;
        month += 12.0;
    }
    month += 1.0;

    let days = 365.25 * year + 30.6 * month + f64::from(date.day()) - 694_039.09;
    let cycles = days / SYNODIC_MONTH_DAYS;
    let fraction = cycles - cycles.trunc();
    let idx = (fraction * 8.0).round() as usize;
    PHASES[if idx >= PHASES.len() { 0 } else { idx }]
}

use std::time::Duration;

use super::{Intensity, RandomSource};

pub const FLASH_DURATION: Duration = Duration::from_millis(200);
const MIN_GAP_MS: u64 = 500;
const BASE_WINDOW_MS: u64 = 10_000;
const WINDOW_STEP_MS: u64 = 900;

/// Width of the random part of the gap between strikes.
#[must_use]
pub fn flash_window_ms(intensity: Intensity) -> u64 {
    BASE_WINDOW_MS - u64::from(intensity.value()) * WINDOW_STEP_MS
}

/// Time from one strike to the next, uniform in `[500, 500 + window)` ms.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn next_flash_delay(intensity: Intensity, rng: &mut dyn RandomSource) -> Duration {
    let window = flash_window_ms(intensity);
    let offset = ((rng.next_unit() * window as f64).floor() as u64).min(window - 1);
    Duration::from_millis(MIN_GAP_MS + offset)
}

/// One flash-on or flash-off message from the lightning task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightningPulse {
    pub generation: u64,
    pub visible: bool,
}

/// Flash flag plus the generation of the currently armed cycle. Pulses from
/// older generations are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightningState {
    pub flash: bool,
    pub generation: u64,
}

impl LightningState {
    /// Starts a fresh cycle and returns its generation.
    pub fn arm(&mut self) -> u64 {
        self.flash = false;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn cancel(&mut self) {
        self.flash = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Returns whether the pulse belonged to the live cycle.
    pub fn pulse(&mut self, pulse: LightningPulse) -> bool {
        if pulse.generation != self.generation {
            return false;
        }
        self.flash = pulse.visible;
        true
    }
}

use rand::Rng;

/// Source of uniform samples in `[0, 1)` for scene generation.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[low, high)`.
    #[allow(clippy::cast_possible_truncation)]
    fn between(&mut self, low: f32, high: f32) -> f32 {
        low + (high - low) * self.next_unit() as f32
    }
}

/// Thread-local RNG, sampled fresh on every call so the handle itself stays
/// `Send` and can live inside spawned tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

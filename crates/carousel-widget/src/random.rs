//! Injectable randomness for cosmetic card variation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// True with probability `p`: one draw `u` succeeds when `u < p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Uniform integer in `low..=high`, computed as `floor(u * span) + low`.
    fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        let span = f64::from(high.saturating_sub(low) + 1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let offset = (self.next_unit() * span).floor() as u32;
        low + offset.min(high - low)
    }
}

/// Fresh thread-local randomness on every draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::random::<f64>()
    }
}

/// Reproducible draws from a fixed seed.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// An empty script always yields `0.999_999`, which fails every cosmetic
/// chance draw.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// How many draws have been taken so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let value = if self.values.is_empty() {
            0.999_999
        } else {
            self.values[self.cursor % self.values.len()]
        };
        self.cursor += 1;
        value.clamp(0.0, 0.999_999)
    }
}

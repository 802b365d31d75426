//! Random unit sources for draws
//!
//! The engine never generates randomness itself. Callers inject a
//! [`RandomSource`], which makes every draw reproducible under test.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::error::{PrizeError, PrizeResult};

/// Supplier of uniform samples in [0, 1)
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// ChaCha8-backed source, reproducible when seeded
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    /// Create a source with optional seed (None = OS entropy)
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(None)
    }
}

impl RandomSource for SeededSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed sequence of units, looping when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    units: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(units: Vec<f64>) -> PrizeResult<Self> {
        if units.is_empty() {
            return Err(PrizeError::EmptyScript);
        }
        if let Some(&bad) = units.iter().find(|u| !(0.0..1.0).contains(*u)) {
            return Err(PrizeError::UnitOutOfRange(bad));
        }
        Ok(Self { units, cursor: 0 })
    }

    /// Number of units handed out so far
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        let unit = self.units[self.cursor % self.units.len()];
        self.cursor += 1;
        unit
    }
}

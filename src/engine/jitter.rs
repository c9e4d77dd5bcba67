//! Confidence jitter sources
//!
//! The classifier's confidence starts from a uniform draw in `[0, 1)`.
//! The draw is the engine's only non-determinism, so it sits behind a
//! trait: production uses the thread RNG, reproducible runs use a seeded
//! RNG, and tests pin an exact value.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of the confidence jitter draw
pub trait ConfidenceJitter: Send + Sync {
    /// Draw a uniform value in `[0, 1)`.
    fn draw(&self) -> f64;
}

/// Thread-local RNG jitter (production default)
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngJitter;

impl ConfidenceJitter for ThreadRngJitter {
    fn draw(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Seeded RNG jitter for reproducible draw sequences
pub struct SeededJitter {
    rng: Mutex<StdRng>,
}

impl SeededJitter {
    /// Create a jitter source seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ConfidenceJitter for SeededJitter {
    fn draw(&self) -> f64 {
        match self.rng.lock() {
            Ok(mut rng) => rng.gen::<f64>(),
            Err(poisoned) => poisoned.into_inner().gen::<f64>(),
        }
    }
}

/// Fixed jitter value for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedJitter(pub f64);

impl ConfidenceJitter for FixedJitter {
    fn draw(&self) -> f64 {
        self.0
    }
}

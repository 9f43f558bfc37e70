//! Deterministic, injectable randomness.
//!
//! # Determinism strategy
//!
//! The whole simulation is single-threaded and consumes one random stream,
//! so one seeded [`EpiRng`] is threaded through every operation that draws.
//! Two runs with the same seed, population, diseases, and event schedule
//! make the same sequence of draws and therefore produce byte-identical
//! day-by-day histories.
//!
//! Nothing in `epi-*` touches `rand::thread_rng()`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for all simulation draws.
///
/// The engine creates one from `SimConfig::seed`; tests
/// construct their own to exercise single transitions deterministically.
pub struct EpiRng(SmallRng);

impl EpiRng {
    /// Seed deterministically from a caller-supplied value.
    pub fn new(seed: u64) -> Self {
        EpiRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    ///
    /// This is the single Bernoulli gate behind every transmission attempt,
    /// recovery draw, quarantine election, campaign coverage roll, and
    /// mixing-parameter contact roll.
    #[inline]
    pub fn chance(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose `amount` distinct indices uniformly from `0..length`,
    /// without replacement.
    ///
    /// # Panics
    /// Panics if `amount > length` — callers validate population size first.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}

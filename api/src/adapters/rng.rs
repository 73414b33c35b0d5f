//! `rand`-backed RandomSource

use rand::Rng;

use crate::domain::ports::RandomSource;

/// Draws from the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

//! Random source port
//!
//! Abstracts the uniform draw used by weighted operator selection.

/// Source of uniformly distributed numbers
pub trait RandomSource: Send + Sync {
    /// A number drawn uniformly from `[low, high]`
    fn uniform(&self, low: f64, high: f64) -> f64;
}

//! Kernel trait definition

/// Kernel function trait
///
/// A kernel function K(x, y) must satisfy Mercer's condition to be valid for SVM.
/// Every bosonic kernel treats each vector entry as an independent mode and
/// multiplies the per-mode overlaps, so `x` and `y` must have the same length.
/// Callers are expected to check dimensions before calling `compute`; the
/// Gram matrix builder does this once per batch.
pub trait Kernel: Send + Sync {
    /// Compute kernel value K(x, y)
    fn compute(&self, x: &[f64], y: &[f64]) -> f64;
}

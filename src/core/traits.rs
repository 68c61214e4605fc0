//! Core traits

use crate::core::{GramMatrix, Result};

/// A kernel that can be handed to an SVM solver as a precomputed Gram matrix
///
/// The solver calls [`gram`](PrecomputedKernel::gram) once during training with
/// `y = None` (training set against itself) and once per prediction batch with
/// `y = Some(training set)`.
pub trait PrecomputedKernel: Send + Sync {
    /// Compute the Gram matrix between batch `x` and batch `y`
    ///
    /// When `y` is `None` the matrix of `x` against itself is returned.
    fn gram<R: AsRef<[f64]> + Sync>(&self, x: &[R], y: Option<&[R]>) -> Result<GramMatrix>;
}

//! Squeezing kernel implementation
//!
//! Each feature value is used as the phase of a single-mode squeezed vacuum
//! with fixed squeezing magnitude r. The overlap of two such states is
//!
//! |⟨ζ(r, x)|ζ(r, y)⟩|² = 1 / |σ|,  σ = cosh²(r) − e^{i(y − x)} sinh²(r)
//!
//! and the kernel is the product of these overlaps over all modes.

use crate::kernel::Kernel;
use num_complex::Complex64;

/// Squeezed-vacuum phase-encoding kernel
///
/// Values lie in (0, 1]; a vector compared with itself always gives 1.
/// Larger `sq_mag` makes the kernel more sensitive to phase differences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqueezingKernel {
    sq_mag: f64,
}

impl SqueezingKernel {
    /// Create a new squeezing kernel with the given squeezing magnitude
    pub fn new(sq_mag: f64) -> Self {
        Self { sq_mag }
    }

    /// Get the squeezing magnitude
    pub fn sq_mag(&self) -> f64 {
        self.sq_mag
    }
}

impl Default for SqueezingKernel {
    /// Default squeezing kernel with sq_mag = 1.0
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Kernel for SqueezingKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        let cosh_sq = self.sq_mag.cosh().powi(2);
        let sinh_sq = self.sq_mag.sinh().powi(2);

        x.iter()
            .zip(y.iter())
            .map(|(&phi_1, &phi_2)| {
                let sigma = Complex64::new(cosh_sq, 0.0) - Complex64::cis(phi_2 - phi_1) * sinh_sq;
                sigma.sqrt().inv().norm_sqr()
            })
            .product()
    }
}

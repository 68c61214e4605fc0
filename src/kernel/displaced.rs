//! Displaced kernel implementation
//!
//! Each feature value is used as the phase of a coherent amplitude on a
//! circle of radius α: z = α·e^{ix}. Per mode the kernel is the damping
//! factor exp(−|z₁ − z₂|), and modes combine by product.

use crate::kernel::Kernel;
use num_complex::Complex64;

/// Coherent-state phase-encoding kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacedKernel {
    dis_mag: f64,
}

impl DisplacedKernel {
    /// Create a new displaced kernel with the given displacement magnitude
    pub fn new(dis_mag: f64) -> Self {
        Self { dis_mag }
    }

    /// Get the displacement magnitude
    pub fn dis_mag(&self) -> f64 {
        self.dis_mag
    }
}

impl Default for DisplacedKernel {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Kernel for DisplacedKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        x.iter()
            .zip(y.iter())
            .map(|(&phi_1, &phi_2)| {
                let z1 = Complex64::from_polar(self.dis_mag, phi_1);
                let z2 = Complex64::from_polar(self.dis_mag, phi_2);
                (-(z1 - z2).norm()).exp()
            })
            .product()
    }
}

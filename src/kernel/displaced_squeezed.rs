//! Displaced squeezed state kernels
//!
//! Both kernels in this module evaluate the overlap of two single-mode
//! displaced squeezed states |z, ζ⟩ with ζ = r·e^{iθ}. With
//! c_k = cosh(−r_k), s_k = sinh(−r_k) the overlap per mode is
//!
//! ```text
//! σ   = c₂c₁ − e^{i(θ₂−θ₁)} s₂s₁
//! η₂₁ = (z₂ − z₁)c₂ − (z̄₂ − z̄₁) e^{iθ₂} s₂
//! η₁₂ = (z₁ − z₂)c₁ − (z̄₁ − z̄₂) e^{iθ₁} s₁
//! K   = | exp(η₂₁ η̄₁₂ / 2σ + ½(z₂z̄₁ − z̄₂z₁)) / √σ |²
//! ```
//!
//! The two kernels differ only in which quantities the feature values feed:
//! - [`DisplacedSqueezedAmpKernel`] uses each value as both the displacement
//!   amplitude and the squeezing magnitude, with fixed phases.
//! - [`DisplacedSqueezedAngleKernel`] uses each value as the shared phase of
//!   displacement and squeezing, with fixed magnitudes.
//!
//! A degenerate σ is not trapped: overflow in cosh/sinh or a vanishing σ
//! shows up as `inf` or `NaN` in the result.

use crate::kernel::Kernel;
use num_complex::Complex64;

/// One side of the overlap: displacement amplitude, squeezing magnitude and squeezing phase
#[derive(Debug, Clone, Copy)]
struct ModeState {
    z: Complex64,
    mag: f64,
    angle: f64,
}

/// Squared modulus of ⟨state_1 | state_2⟩ for a single mode
fn mode_overlap(s1: ModeState, s2: ModeState) -> f64 {
    let cosh_1 = (-s1.mag).cosh();
    let cosh_2 = (-s2.mag).cosh();
    let sinh_1 = (-s1.mag).sinh();
    let sinh_2 = (-s2.mag).sinh();

    let (z1, z2) = (s1.z, s2.z);

    let sigma = Complex64::new(cosh_2 * cosh_1, 0.0)
        - Complex64::cis(s2.angle - s1.angle) * (sinh_2 * sinh_1);
    let eta_21 = (z2 - z1) * cosh_2 - (z2.conj() - z1.conj()) * Complex64::cis(s2.angle) * sinh_2;
    let eta_12 = (z1 - z2) * cosh_1 - (z1.conj() - z2.conj()) * Complex64::cis(s1.angle) * sinh_1;

    let exponent = eta_21 * eta_12.conj() / (sigma * 2.0) + (z2 * z1.conj() - z2.conj() * z1) * 0.5;

    (exponent.exp() / sigma.sqrt()).norm_sqr()
}

/// Displaced squeezed kernel with amplitude encoding
///
/// Feature value `a` prepares the state with displacement `a·e^{i·dis_phi}`
/// and squeezing magnitude `a`. The second argument of
/// [`compute`](Kernel::compute) uses the secondary phases.
///
/// The squeezing angle of each state follows its displacement phase, so
/// `sq_phi` and `sq_phi_2` are carried as hyperparameters but do not change
/// the kernel value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacedSqueezedAmpKernel {
    sq_phi: f64,
    dis_phi: f64,
    sq_phi_2: f64,
    dis_phi_2: f64,
}

impl DisplacedSqueezedAmpKernel {
    /// Create a kernel with explicit primary and secondary phases
    pub fn new(sq_phi: f64, dis_phi: f64, sq_phi_2: f64, dis_phi_2: f64) -> Self {
        Self {
            sq_phi,
            dis_phi,
            sq_phi_2,
            dis_phi_2,
        }
    }

    /// Create a kernel whose secondary phases equal the primaries
    pub fn with_shared_phases(sq_phi: f64, dis_phi: f64) -> Self {
        Self::new(sq_phi, dis_phi, sq_phi, dis_phi)
    }

    pub fn sq_phi(&self) -> f64 {
        self.sq_phi
    }

    pub fn dis_phi(&self) -> f64 {
        self.dis_phi
    }

    pub fn sq_phi_2(&self) -> f64 {
        self.sq_phi_2
    }

    pub fn dis_phi_2(&self) -> f64 {
        self.dis_phi_2
    }
}

impl Kernel for DisplacedSqueezedAmpKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        let rot_1 = Complex64::cis(self.dis_phi);
        let rot_2 = Complex64::cis(self.dis_phi_2);

        x.iter()
            .zip(y.iter())
            .map(|(&a1, &a2)| {
                let s1 = ModeState {
                    z: rot_1 * a1,
                    mag: a1,
                    angle: self.dis_phi,
                };
                let s2 = ModeState {
                    z: rot_2 * a2,
                    mag: a2,
                    angle: self.dis_phi_2,
                };
                mode_overlap(s1, s2)
            })
            .product()
    }
}

/// Displaced squeezed kernel with phase encoding
///
/// Feature value `φ` prepares the state with displacement `dis_mag·e^{iφ}`
/// and squeezing `sq_mag·e^{iφ}`. The second argument of
/// [`compute`](Kernel::compute) uses the secondary magnitudes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplacedSqueezedAngleKernel {
    sq_mag: f64,
    dis_mag: f64,
    sq_mag_2: f64,
    dis_mag_2: f64,
}

impl DisplacedSqueezedAngleKernel {
    /// Create a kernel with explicit primary and secondary magnitudes
    pub fn new(sq_mag: f64, dis_mag: f64, sq_mag_2: f64, dis_mag_2: f64) -> Self {
        Self {
            sq_mag,
            dis_mag,
            sq_mag_2,
            dis_mag_2,
        }
    }

    /// Create a kernel whose secondary magnitudes equal the primaries
    pub fn with_shared_magnitudes(sq_mag: f64, dis_mag: f64) -> Self {
        Self::new(sq_mag, dis_mag, sq_mag, dis_mag)
    }

    pub fn sq_mag(&self) -> f64 {
        self.sq_mag
    }

    pub fn dis_mag(&self) -> f64 {
        self.dis_mag
    }

    pub fn sq_mag_2(&self) -> f64 {
        self.sq_mag_2
    }

    pub fn dis_mag_2(&self) -> f64 {
        self.dis_mag_2
    }
}

impl Kernel for DisplacedSqueezedAngleKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        x.iter()
            .zip(y.iter())
            .map(|(&phi_1, &phi_2)| {
                let s1 = ModeState {
                    z: Complex64::from_polar(self.dis_mag, phi_1),
                    mag: self.sq_mag,
                    angle: phi_1,
                };
                let s2 = ModeState {
                    z: Complex64::from_polar(self.dis_mag_2, phi_2),
                    mag: self.sq_mag_2,
                    angle: phi_2,
                };
                mode_overlap(s1, s2)
            })
            .product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_mode_overlap_vacuum() {
        let vacuum = ModeState {
            z: Complex64::new(0.0, 0.0),
            mag: 0.0,
            angle: 0.0,
        };
        assert_relative_eq!(mode_overlap(vacuum, vacuum), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_amp_self_overlap() {
        let kernel = DisplacedSqueezedAmpKernel::with_shared_phases(0.3, 0.9);
        let x = [0.2, -0.7, 1.3];
        assert_relative_eq!(kernel.compute(&x, &x), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_amp_against_vacuum() {
        // a = 0 is the vacuum; against a = 1 the overlap is exp(−(1 + tanh 1)) / cosh 1
        let kernel = DisplacedSqueezedAmpKernel::with_shared_phases(0.0, 0.0);
        let expected = (-(1.0 + 1.0_f64.tanh())).exp() / 1.0_f64.cosh();

        assert_relative_eq!(kernel.compute(&[0.0], &[1.0]), expected, epsilon = 1e-12);
        assert_relative_eq!(kernel.compute(&[0.0], &[1.0]), 0.1113168113828589, epsilon = 1e-12);
    }

    #[test]
    fn test_amp_symmetry() {
        let kernel = DisplacedSqueezedAmpKernel::with_shared_phases(0.0, 0.2);
        let x = [0.5];
        let y = [1.5];

        assert_relative_eq!(kernel.compute(&x, &y), 0.00565373635448586, epsilon = 1e-12);
        assert_relative_eq!(kernel.compute(&x, &y), kernel.compute(&y, &x), epsilon = 1e-12);
    }

    #[test]
    fn test_amp_squeezing_phase_does_not_enter() {
        let a = DisplacedSqueezedAmpKernel::new(0.0, 0.4, 0.0, 0.4);
        let b = DisplacedSqueezedAmpKernel::new(1.2, 0.4, -0.8, 0.4);
        let x = [0.3, 0.8];
        let y = [1.1, -0.2];

        assert_eq!(a.compute(&x, &y), b.compute(&x, &y));
    }

    #[test]
    fn test_amp_overflow_propagates() {
        // cosh(800) overflows; σ becomes inf − inf
        let kernel = DisplacedSqueezedAmpKernel::with_shared_phases(0.0, 0.0);
        assert!(!kernel.compute(&[800.0], &[800.0]).is_finite());
    }

    #[test]
    fn test_angle_self_overlap() {
        let kernel = DisplacedSqueezedAngleKernel::with_shared_magnitudes(0.7, 1.0);
        let x = [0.0, 1.0, -2.0];
        assert_relative_eq!(kernel.compute(&x, &x), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_angle_without_squeezing_is_coherent_overlap() {
        // r = 0 reduces to |⟨z₁|z₂⟩|² = exp(−|z₁ − z₂|²)
        let kernel = DisplacedSqueezedAngleKernel::with_shared_magnitudes(0.0, 1.0);
        assert_relative_eq!(kernel.compute(&[0.0], &[PI]), (-4.0_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_angle_known_value() {
        let kernel = DisplacedSqueezedAngleKernel::with_shared_magnitudes(0.7, 1.0);
        let result = kernel.compute(&[0.3], &[1.1]);

        assert_relative_eq!(result, 0.585161527143512, epsilon = 1e-12);
        assert_relative_eq!(result, kernel.compute(&[1.1], &[0.3]), epsilon = 1e-12);
    }

    #[test]
    fn test_angle_secondary_magnitudes_change_value() {
        let shared = DisplacedSqueezedAngleKernel::with_shared_magnitudes(0.7, 1.0);
        let split = DisplacedSqueezedAngleKernel::new(0.7, 1.0, 0.2, 0.5);

        let x = [0.3];
        let y = [1.1];
        assert!((shared.compute(&x, &y) - split.compute(&x, &y)).abs() > 1e-6);
        // Different magnitudes on each side means x is no longer a perfect match with itself
        assert!(split.compute(&x, &x) < 1.0);
    }

    #[test]
    fn test_product_over_modes() {
        let kernel = DisplacedSqueezedAngleKernel::with_shared_magnitudes(0.7, 1.0);
        let single = kernel.compute(&[0.3], &[1.1]);
        let double = kernel.compute(&[0.3, 0.3], &[1.1, 1.1]);

        assert_relative_eq!(double, single * single, epsilon = 1e-12);
    }
}

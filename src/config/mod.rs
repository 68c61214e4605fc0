//! Kernel configuration
//!
//! [`KernelConfig`] validates a variant, resolves its hyperparameters once
//! and binds them to the matching kernel. The resulting value is the
//! precomputed-kernel callable handed to an SVM solver.
//!
//! ```rust
//! use bosonic_kernels::{KernelConfig, KernelParams, KernelVariant};
//!
//! # fn main() -> bosonic_kernels::Result<()> {
//! let config = KernelConfig::new(KernelVariant::Displaced, KernelParams::new())?;
//!
//! let train = vec![vec![0.0, 1.0], vec![0.5, -1.0]];
//! let gram = config.compute_kernel(&train, None)?;
//! assert_eq!(gram.shape(), (2, 2));
//! # Ok(())
//! # }
//! ```

pub mod params;
pub mod variant;

pub use self::params::*;
pub use self::variant::*;

use crate::core::{GramMatrix, KernelError, PrecomputedKernel, Result};
use crate::gram::GramMatrixBuilder;
use crate::kernel::{
    DisplacedKernel, DisplacedSqueezedAmpKernel, DisplacedSqueezedAngleKernel, Kernel,
    SqueezingKernel,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the four bosonic kernels with its parameters bound
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuantumKernel {
    Squeezing(SqueezingKernel),
    Displaced(DisplacedKernel),
    DisplacedSqueezedAmp(DisplacedSqueezedAmpKernel),
    DisplacedSqueezedAngle(DisplacedSqueezedAngleKernel),
}

impl QuantumKernel {
    /// Bind the kernel for `variant` to resolved parameters
    pub fn bind(variant: KernelVariant, p: &ResolvedParams) -> Self {
        match variant {
            KernelVariant::Squeezing => QuantumKernel::Squeezing(SqueezingKernel::new(p.sq_mag)),
            KernelVariant::Displaced => QuantumKernel::Displaced(DisplacedKernel::new(p.dis_mag)),
            KernelVariant::DisplacedSqueezedAmp => QuantumKernel::DisplacedSqueezedAmp(
                DisplacedSqueezedAmpKernel::new(p.sq_phi, p.dis_phi, p.sq_phi_2, p.dis_phi_2),
            ),
            KernelVariant::DisplacedSqueezedAngle => QuantumKernel::DisplacedSqueezedAngle(
                DisplacedSqueezedAngleKernel::new(p.sq_mag, p.dis_mag, p.sq_mag_2, p.dis_mag_2),
            ),
        }
    }

    pub fn variant(&self) -> KernelVariant {
        match self {
            QuantumKernel::Squeezing(_) => KernelVariant::Squeezing,
            QuantumKernel::Displaced(_) => KernelVariant::Displaced,
            QuantumKernel::DisplacedSqueezedAmp(_) => KernelVariant::DisplacedSqueezedAmp,
            QuantumKernel::DisplacedSqueezedAngle(_) => KernelVariant::DisplacedSqueezedAngle,
        }
    }
}

impl Kernel for QuantumKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        match self {
            QuantumKernel::Squeezing(k) => k.compute(x, y),
            QuantumKernel::Displaced(k) => k.compute(x, y),
            QuantumKernel::DisplacedSqueezedAmp(k) => k.compute(x, y),
            QuantumKernel::DisplacedSqueezedAngle(k) => k.compute(x, y),
        }
    }
}

/// Serialized form: the variant tag next to the flat hyperparameters
#[derive(Serialize, Deserialize)]
struct KernelSpec {
    quantum_kernel: KernelVariant,
    #[serde(flatten)]
    params: KernelParams,
}

/// A validated, immutable kernel configuration
#[derive(Debug, Clone, PartialEq)]
pub struct KernelConfig {
    hyperparams: KernelParams,
    resolved: ResolvedParams,
    kernel: QuantumKernel,
}

impl KernelConfig {
    /// Resolve `params` and bind them to the kernel for `variant`
    pub fn new(variant: KernelVariant, params: KernelParams) -> Result<Self> {
        let resolved = params.resolve()?;
        let kernel = QuantumKernel::bind(variant, &resolved);

        debug!("Configured {variant} kernel with {resolved:?}");

        Ok(Self {
            hyperparams: params,
            resolved,
            kernel,
        })
    }

    /// Like [`new`](Self::new) but with the variant given by its string tag
    pub fn from_name(name: &str, params: KernelParams) -> Result<Self> {
        let variant = name.parse()?;
        Self::new(variant, params)
    }

    /// Build a new configuration with one hyperparameter changed
    pub fn with_param(&self, name: &str, value: f64) -> Result<Self> {
        let mut params = self.hyperparams;
        params.set(name, value)?;
        Self::new(self.variant(), params)
    }

    pub fn variant(&self) -> KernelVariant {
        self.kernel.variant()
    }

    /// Resolved hyperparameters the kernel was built from
    pub fn params(&self) -> &ResolvedParams {
        &self.resolved
    }

    /// Hyperparameters as supplied, secondaries still optional
    pub fn hyperparams(&self) -> &KernelParams {
        &self.hyperparams
    }

    pub fn kernel(&self) -> &QuantumKernel {
        &self.kernel
    }

    /// All hyperparameters by name
    pub fn get_params(&self) -> BTreeMap<&'static str, f64> {
        self.resolved.to_map()
    }

    /// Kernel value for a single pair of vectors
    pub fn evaluate(&self, x1: &[f64], x2: &[f64]) -> Result<f64> {
        if x1.len() != x2.len() {
            return Err(KernelError::DimensionMismatch {
                expected: x1.len(),
                actual: x2.len(),
            });
        }
        Ok(self.kernel.compute(x1, x2))
    }

    /// Gram matrix between `x` and `y`, or of `x` with itself when `y` is `None`
    pub fn compute_kernel<R>(&self, x: &[R], y: Option<&[R]>) -> Result<GramMatrix>
    where
        R: AsRef<[f64]> + Sync,
    {
        GramMatrixBuilder::new(&self.kernel).build(x, y)
    }

    /// Serialize the variant and supplied hyperparameters to JSON
    pub fn to_json(&self) -> Result<String> {
        let spec = KernelSpec {
            quantum_kernel: self.variant(),
            params: self.hyperparams,
        };
        serde_json::to_string_pretty(&spec)
            .map_err(|e| KernelError::SerializationError(e.to_string()))
    }

    /// Rebuild a configuration from [`to_json`](Self::to_json) output
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: KernelSpec = serde_json::from_str(json)
            .map_err(|e| KernelError::SerializationError(e.to_string()))?;
        Self::new(spec.quantum_kernel, spec.params)
    }
}

impl PrecomputedKernel for KernelConfig {
    fn gram<R: AsRef<[f64]> + Sync>(&self, x: &[R], y: Option<&[R]>) -> Result<GramMatrix> {
        self.compute_kernel(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_config_binds_variant() {
        for variant in KernelVariant::ALL {
            let config = KernelConfig::new(variant, KernelParams::new()).unwrap();
            assert_eq!(config.variant(), variant);
            assert_eq!(config.kernel().variant(), variant);
        }
    }

    #[test]
    fn test_config_unknown_variant() {
        let err = KernelConfig::from_name("unknown", KernelParams::new()).unwrap_err();
        assert!(matches!(err, KernelError::UnsupportedVariant(ref name) if name == "unknown"));
        assert_eq!(err.to_string(), "Unsupported kernel variant: unknown");
    }

    #[test]
    fn test_config_invalid_parameter() {
        let params = KernelParams::new().with_sq_mag(f64::NAN);
        assert!(matches!(
            KernelConfig::new(KernelVariant::Squeezing, params),
            Err(KernelError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_config_squeezing_binding() {
        let config =
            KernelConfig::from_name("squeezing", KernelParams::new().with_sq_mag(0.0)).unwrap();
        assert_eq!(config.evaluate(&[0.1, 0.2], &[2.0, -1.0]).unwrap(), 1.0);
    }

    #[test]
    fn test_config_displaced_binding() {
        let config = KernelConfig::from_name("displaced", KernelParams::new()).unwrap();
        let value = config.evaluate(&[0.0], &[PI]).unwrap();
        assert_relative_eq!(value, (-2.0_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_config_default_propagation_amp() {
        let implicit = KernelConfig::new(
            KernelVariant::DisplacedSqueezedAmp,
            KernelParams::new().with_sq_phi(0.3).with_dis_phi(0.6),
        )
        .unwrap();
        let explicit = KernelConfig::new(
            KernelVariant::DisplacedSqueezedAmp,
            KernelParams::new()
                .with_sq_phi(0.3)
                .with_dis_phi(0.6)
                .with_sq_phi_2(0.3)
                .with_dis_phi_2(0.6),
        )
        .unwrap();

        assert_eq!(implicit.kernel(), explicit.kernel());
        let x = [0.2, 0.9];
        let y = [1.0, -0.4];
        assert_eq!(implicit.evaluate(&x, &y).unwrap(), explicit.evaluate(&x, &y).unwrap());
    }

    #[test]
    fn test_config_default_propagation_angle() {
        let implicit = KernelConfig::new(
            KernelVariant::DisplacedSqueezedAngle,
            KernelParams::new().with_sq_mag(0.7).with_dis_mag(1.2),
        )
        .unwrap();
        let explicit = KernelConfig::new(
            KernelVariant::DisplacedSqueezedAngle,
            KernelParams::new()
                .with_sq_mag(0.7)
                .with_dis_mag(1.2)
                .with_sq_mag_2(0.7)
                .with_dis_mag_2(1.2),
        )
        .unwrap();

        assert_eq!(implicit.kernel(), explicit.kernel());
    }

    #[test]
    fn test_config_explicit_secondary_is_honoured() {
        let config = KernelConfig::new(
            KernelVariant::DisplacedSqueezedAngle,
            KernelParams::new().with_dis_mag(1.0).with_dis_mag_2(0.5),
        )
        .unwrap();

        match config.kernel() {
            QuantumKernel::DisplacedSqueezedAngle(k) => {
                assert_eq!(k.dis_mag(), 1.0);
                assert_eq!(k.dis_mag_2(), 0.5);
            }
            other => panic!("unexpected kernel {other:?}"),
        }
    }

    #[test]
    fn test_config_evaluate_dimension_mismatch() {
        let config = KernelConfig::new(KernelVariant::Squeezing, KernelParams::new()).unwrap();
        assert!(matches!(
            config.evaluate(&[0.0, 1.0], &[0.0]),
            Err(KernelError::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_config_with_param() {
        let config = KernelConfig::new(KernelVariant::Squeezing, KernelParams::new()).unwrap();
        let updated = config.with_param("sq_mag", 0.25).unwrap();

        assert_eq!(config.params().sq_mag, 1.0);
        assert_eq!(updated.params().sq_mag, 0.25);
        assert_eq!(updated.params().sq_mag_2, 0.25);
        assert!(config.with_param("nope", 1.0).is_err());
    }

    #[test]
    fn test_config_get_params_complete() {
        for variant in KernelVariant::ALL {
            let config = KernelConfig::new(variant, KernelParams::new()).unwrap();
            let names: Vec<&str> = config.get_params().keys().copied().collect();
            assert_eq!(names, variant.param_names().to_vec());
        }
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = KernelConfig::new(
            KernelVariant::DisplacedSqueezedAngle,
            KernelParams::new().with_sq_mag(0.7).with_dis_mag_2(0.4),
        )
        .unwrap();

        let json = config.to_json().unwrap();
        assert!(json.contains("\"quantum_kernel\": \"displaced_squeezed_angle\""));

        let restored = KernelConfig::from_json(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_config_json_unknown_variant() {
        let err = KernelConfig::from_json(r#"{"quantum_kernel": "unknown"}"#).unwrap_err();
        assert!(matches!(err, KernelError::SerializationError(_)));
    }

    #[test]
    fn test_config_is_precomputed_kernel() {
        fn solver_gram<P: PrecomputedKernel>(k: &P, x: &[Vec<f64>]) -> GramMatrix {
            k.gram(x, None).unwrap()
        }

        let config = KernelConfig::new(KernelVariant::Displaced, KernelParams::new()).unwrap();
        let x = vec![vec![0.0], vec![1.0], vec![2.0]];
        let gram = solver_gram(&config, &x);

        assert_eq!(gram.shape(), (3, 3));
        assert!(gram.is_symmetric(1e-12));
    }
}

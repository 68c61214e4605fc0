//! Kernel variant tags

use crate::config::params::PARAM_NAMES;
use crate::core::{KernelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of supported bosonic kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelVariant {
    /// Squeezed vacuum with the feature as squeezing phase
    Squeezing,
    /// Coherent state with the feature as displacement phase
    Displaced,
    /// Displaced squeezed state with the feature as amplitude
    DisplacedSqueezedAmp,
    /// Displaced squeezed state with the feature as phase
    DisplacedSqueezedAngle,
}

impl KernelVariant {
    /// Every variant, in declaration order
    pub const ALL: [KernelVariant; 4] = [
        KernelVariant::Squeezing,
        KernelVariant::Displaced,
        KernelVariant::DisplacedSqueezedAmp,
        KernelVariant::DisplacedSqueezedAngle,
    ];

    /// String tag of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            KernelVariant::Squeezing => "squeezing",
            KernelVariant::Displaced => "displaced",
            KernelVariant::DisplacedSqueezedAmp => "displaced_squeezed_amp",
            KernelVariant::DisplacedSqueezedAngle => "displaced_squeezed_angle",
        }
    }

    /// Hyperparameter names recognised for this variant
    ///
    /// The list is the same for every variant so that generic get/set
    /// tooling can treat them uniformly.
    pub fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    /// Hyperparameters that actually enter this variant's formula
    pub fn consumed_params(&self) -> &'static [&'static str] {
        match self {
            KernelVariant::Squeezing => &["sq_mag"],
            KernelVariant::Displaced => &["dis_mag"],
            KernelVariant::DisplacedSqueezedAmp => &["dis_phi", "dis_phi_2"],
            KernelVariant::DisplacedSqueezedAngle => &["dis_mag", "dis_mag_2", "sq_mag", "sq_mag_2"],
        }
    }
}

impl FromStr for KernelVariant {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self> {
        KernelVariant::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| KernelError::UnsupportedVariant(s.to_string()))
    }
}

impl fmt::Display for KernelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

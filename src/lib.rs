//! Bosonic kernels for support vector machines
//!
//! Similarity measures built from closed-form overlaps of squeezed and
//! displaced single-mode bosonic states. Each feature is treated as one
//! independent mode and per-mode overlaps are multiplied. The Gram matrices
//! produced here are meant to be fed to an SVM solver as a precomputed
//! kernel.

pub mod config;
pub mod core;
pub mod gram;
pub mod kernel;
pub mod utils;

// Re-export main types for convenience
pub use crate::config::{
    KernelConfig, KernelParams, KernelVariant, QuantumKernel, ResolvedParams, PARAM_NAMES,
};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::core::{KernelError, Result};
pub use crate::gram::{gram_matrix, GramMatrixBuilder};
pub use crate::kernel::{
    DisplacedKernel, DisplacedSqueezedAmpKernel, DisplacedSqueezedAngleKernel, Kernel,
    SqueezingKernel,
};

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

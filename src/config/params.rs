//! Kernel hyperparameters
//!
//! [`KernelParams`] is what callers supply: four primary values plus
//! optional secondaries. [`ResolvedParams`] is the fully populated record a
//! kernel is built from; each missing secondary takes its primary's value.

use crate::core::{KernelError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names of all recognised hyperparameters, sorted
pub const PARAM_NAMES: [&str; 8] = [
    "dis_mag",
    "dis_mag_2",
    "dis_phi",
    "dis_phi_2",
    "sq_mag",
    "sq_mag_2",
    "sq_phi",
    "sq_phi_2",
];

/// User-supplied kernel hyperparameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelParams {
    /// Primary squeezing magnitude
    pub sq_mag: f64,
    /// Primary displacement magnitude
    pub dis_mag: f64,
    /// Primary squeezing phase
    pub sq_phi: f64,
    /// Primary displacement phase
    pub dis_phi: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sq_mag_2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dis_mag_2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sq_phi_2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dis_phi_2: Option<f64>,
}

impl Default for KernelParams {
    fn default() -> Self {
        Self {
            sq_mag: 1.0,
            dis_mag: 1.0,
            sq_phi: 0.0,
            dis_phi: 0.0,
            sq_mag_2: None,
            dis_mag_2: None,
            sq_phi_2: None,
            dis_phi_2: None,
        }
    }
}

impl KernelParams {
    /// Default parameters: unit magnitudes, zero phases, no explicit secondaries
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sq_mag(mut self, sq_mag: f64) -> Self {
        self.sq_mag = sq_mag;
        self
    }

    pub fn with_dis_mag(mut self, dis_mag: f64) -> Self {
        self.dis_mag = dis_mag;
        self
    }

    pub fn with_sq_phi(mut self, sq_phi: f64) -> Self {
        self.sq_phi = sq_phi;
        self
    }

    pub fn with_dis_phi(mut self, dis_phi: f64) -> Self {
        self.dis_phi = dis_phi;
        self
    }

    pub fn with_sq_mag_2(mut self, sq_mag_2: f64) -> Self {
        self.sq_mag_2 = Some(sq_mag_2);
        self
    }

    pub fn with_dis_mag_2(mut self, dis_mag_2: f64) -> Self {
        self.dis_mag_2 = Some(dis_mag_2);
        self
    }

    pub fn with_sq_phi_2(mut self, sq_phi_2: f64) -> Self {
        self.sq_phi_2 = Some(sq_phi_2);
        self
    }

    pub fn with_dis_phi_2(mut self, dis_phi_2: f64) -> Self {
        self.dis_phi_2 = Some(dis_phi_2);
        self
    }

    /// Fill in missing secondaries and check every value is finite
    pub fn resolve(&self) -> Result<ResolvedParams> {
        let resolved = ResolvedParams {
            sq_mag: self.sq_mag,
            dis_mag: self.dis_mag,
            sq_phi: self.sq_phi,
            dis_phi: self.dis_phi,
            sq_mag_2: self.sq_mag_2.unwrap_or(self.sq_mag),
            dis_mag_2: self.dis_mag_2.unwrap_or(self.dis_mag),
            sq_phi_2: self.sq_phi_2.unwrap_or(self.sq_phi),
            dis_phi_2: self.dis_phi_2.unwrap_or(self.dis_phi),
        };

        for (name, value) in resolved.to_map() {
            if !value.is_finite() {
                return Err(KernelError::InvalidParameter(format!(
                    "{name} must be finite, got: {value}"
                )));
            }
        }

        Ok(resolved)
    }

    /// Current value of `name`; an unset secondary reports its primary's value
    pub fn get(&self, name: &str) -> Result<f64> {
        let value = match name {
            "sq_mag" => self.sq_mag,
            "dis_mag" => self.dis_mag,
            "sq_phi" => self.sq_phi,
            "dis_phi" => self.dis_phi,
            "sq_mag_2" => self.sq_mag_2.unwrap_or(self.sq_mag),
            "dis_mag_2" => self.dis_mag_2.unwrap_or(self.dis_mag),
            "sq_phi_2" => self.sq_phi_2.unwrap_or(self.sq_phi),
            "dis_phi_2" => self.dis_phi_2.unwrap_or(self.dis_phi),
            _ => return Err(KernelError::UnknownParameter(name.to_string())),
        };
        Ok(value)
    }

    /// Set `name` to `value`; setting a secondary makes it explicit
    pub fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "sq_mag" => self.sq_mag = value,
            "dis_mag" => self.dis_mag = value,
            "sq_phi" => self.sq_phi = value,
            "dis_phi" => self.dis_phi = value,
            "sq_mag_2" => self.sq_mag_2 = Some(value),
            "dis_mag_2" => self.dis_mag_2 = Some(value),
            "sq_phi_2" => self.sq_phi_2 = Some(value),
            "dis_phi_2" => self.dis_phi_2 = Some(value),
            _ => return Err(KernelError::UnknownParameter(name.to_string())),
        }
        Ok(())
    }

    /// All hyperparameters by name, secondaries reported as resolved
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        PARAM_NAMES
            .iter()
            .filter_map(|&name| self.get(name).ok().map(|v| (name, v)))
            .collect()
    }
}

/// Fully populated hyperparameters, fixed once a kernel is configured
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedParams {
    pub sq_mag: f64,
    pub dis_mag: f64,
    pub sq_phi: f64,
    pub dis_phi: f64,
    pub sq_mag_2: f64,
    pub dis_mag_2: f64,
    pub sq_phi_2: f64,
    pub dis_phi_2: f64,
}

impl ResolvedParams {
    /// All values by name
    pub fn to_map(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("dis_mag", self.dis_mag),
            ("dis_mag_2", self.dis_mag_2),
            ("dis_phi", self.dis_phi),
            ("dis_phi_2", self.dis_phi_2),
            ("sq_mag", self.sq_mag),
            ("sq_mag_2", self.sq_mag_2),
            ("sq_phi", self.sq_phi),
            ("sq_phi_2", self.sq_phi_2),
        ])
    }
}

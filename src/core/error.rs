//! Error types for kernel construction and Gram matrix computation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelError {
    #[error("Unsupported kernel variant: {0}")]
    UnsupportedVariant(String),

    #[error("Unknown kernel parameter: {0}")]
    UnknownParameter(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, KernelError>;

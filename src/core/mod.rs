//! Core types and traits shared by the kernels and the Gram matrix builder

pub mod error;
pub mod traits;
pub mod types;

pub use self::error::*;
pub use self::traits::*;
pub use self::types::*;

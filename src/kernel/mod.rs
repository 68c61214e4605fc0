//! Bosonic overlap kernels
//!
//! Each kernel evaluates a closed-form overlap between single-mode states
//! prepared from the feature values and reduces over modes by product.

pub mod displaced;
pub mod displaced_squeezed;
pub mod squeezing;
pub mod traits;

pub use self::displaced::*;
pub use self::displaced_squeezed::*;
pub use self::squeezing::*;
pub use self::traits::*;

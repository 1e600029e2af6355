//! 32-bit fixed-point numbers with a compile-time number of fractional bits
//! and a compile-time overflow policy.
//!
//! ```
//! use more_fixed_core::{Fixed, policy::Flag};
//!
//! type Q16 = Fixed<16, Flag>;
//! let half = Q16::from_num(0.5);
//! let quarter = half * half;
//! assert_eq!(quarter, 0.25);
//!
//! let _ = Q16::MAX + 1;
//! assert!(Flag::take());
//! ```

pub mod determinism;
pub mod error;
pub mod fixed;
pub mod math;
mod mixed;
mod num;
mod ops;
pub mod policy;
pub mod primitive;
#[cfg(feature = "serde")]
mod serde_impl;

pub use determinism::{determinism_vector_v1, DETERMINISM_SCHEMA_V1, DETERMINISM_VECTOR_V1_EXPECTED};
pub use error::FixedError;
pub use fixed::{Fixed, Fixed16, Fixed16Fast, Fixed16Safe};
pub use policy::{Abort, Assert, Count, Flag, Ignore, OverflowPolicy};
#[cfg(feature = "tracing")]
pub use policy::Trace;
pub use primitive::Primitive;

#[cfg(test)]
mod tests;

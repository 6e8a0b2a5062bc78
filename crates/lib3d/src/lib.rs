//! lib3d - immutable 3D vectors and 3x3 matrices.
//!
//! This crate provides:
//!
//! - **[`Vec3`]**: a validated three-component vector with the usual
//!   arithmetic, dot/cross/triple products and normalization
//! - **[`Mat3`]**: a validated 3x3 matrix with rotation, scale, projection
//!   and reflection builders
//!
//! Vectors are row vectors: a transform is applied as `v × M`. Neither type
//! can hold NaN or infinity, and every operation that could produce one
//! returns a [`MathError`] instead.
//!
//! # Example
//!
//! ```
//! use lib3d::{Mat3, Vec3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let quarter_turn = Mat3::z_axis_rotation(FRAC_PI_2)?;
//! let rotated = Vec3::X.multiply_matrix(&quarter_turn)?;
//! assert!(rotated.approx_eq(&Vec3::Y, 1e-12)?);
//! # Ok::<(), lib3d::MathError>(())
//! ```

// Re-export glam so callers can use the interop conversions without
// pinning their own version
pub use glam;

pub mod error;
mod interop;
mod mat3;
mod validate;
mod vec3;

pub use error::{MathError, MathResult};
pub use mat3::Mat3;
pub use vec3::Vec3;

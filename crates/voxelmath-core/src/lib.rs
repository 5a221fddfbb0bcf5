//! Vector and quaternion primitives for voxel engines.
//!
//! This crate provides the small numeric value types the engine passes around:
//! - [`Vector3`]: immutable double-precision 3D vector
//! - [`Quaternion`]: immutable single-precision rotation quaternion
//! - [`math`]: stateless quaternion functions (products, Tait-Bryan angles,
//!   vector-to-vector rotations, `glam` interop)
//!
//! All types are `Copy` and every function is pure, so values can be shared
//! freely between threads.
//!
//! # Example
//!
//! ```
//! use voxelmath_core::{math, Quaternion, Vector3};
//!
//! let q = math::rotation(30.0, 45.0, 0.0);
//! let angles = math::axis_angles(q);
//! assert!((angles.y() - 45.0).abs() < 1e-3);
//!
//! let turn = math::rotation_to(Vector3::UNIT_X, Vector3::UNIT_Y);
//! assert_ne!(turn, Quaternion::IDENTITY);
//! ```

pub mod error;
pub mod math;
pub mod quaternion;
pub mod vector;

pub use error::{Error, Result};
pub use quaternion::Quaternion;
pub use vector::Vector3;

/// Numeric tunables
pub mod constants {
    /// `|w·x − y·z|` at or above which [`crate::math::axis_angles`] treats
    /// pitch as locked at ±90°
    pub const GIMBAL_LOCK_THRESHOLD: f64 = 0.4999;
    /// Cross-product length below which two unit vectors count as parallel
    pub const EPSILON: f64 = 1e-9;
}

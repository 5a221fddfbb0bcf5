//! Rotation quaternion value type.

use std::fmt;
use std::ops::{Mul, Neg};

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use glam::Quat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math;
use crate::vector::Vector3;

/// Immutable quaternion `(x, y, z, w)`, `w` being the scalar part.
///
/// A rotation quaternion has unit length. Non-unit values are allowed
/// transiently, e.g. as the input of [`math::normalize`].
///
/// There is no stored "normalized" flag. Constructors decide instead:
/// [`Quaternion::from_xyzw`] trusts the caller, [`Quaternion::new`] renormalizes.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[repr(C)]
pub struct Quaternion {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

impl Quaternion {
    /// No rotation
    pub const IDENTITY: Self = Self::from_xyzw(0.0, 0.0, 0.0, 1.0);

    /// Create a quaternion from components already known to be unit length.
    ///
    /// Nothing is checked or renormalized.
    #[inline]
    #[must_use]
    pub const fn from_xyzw(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a quaternion from arbitrary components, renormalizing them.
    ///
    /// All-zero components produce NaN; see [`Quaternion::try_new`].
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        math::normalize(Self::from_xyzw(x, y, z, w))
    }

    /// Like [`Quaternion::new`] but rejects zero-length or non-finite input
    pub fn try_new(x: f32, y: f32, z: f32, w: f32) -> Result<Self> {
        math::try_normalize(Self::from_xyzw(x, y, z, w))
    }

    /// Create a quaternion, renormalizing unless `normalized` is set
    #[must_use]
    pub fn from_components(x: f32, y: f32, z: f32, w: f32, normalized: bool) -> Self {
        if normalized {
            Self::from_xyzw(x, y, z, w)
        } else {
            Self::new(x, y, z, w)
        }
    }

    /// Rotation of `angle` degrees around `axis`.
    ///
    /// The axis is normalized first; a zero axis yields NaN components.
    #[must_use]
    pub fn from_angle_axis(angle: f32, axis: Vector3) -> Self {
        Self::from_degrees_axis(f64::from(angle), axis)
    }

    /// Rotation of `angle` degrees around the axis `(x, y, z)`
    #[must_use]
    pub fn from_angle_xyz(angle: f32, x: f32, y: f32, z: f32) -> Self {
        Self::from_angle_axis(angle, Vector3::new(f64::from(x), f64::from(y), f64::from(z)))
    }

    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn from_degrees_axis(angle: f64, axis: Vector3) -> Self {
        let axis = axis.normalize();
        let (sin, cos) = (angle.to_radians() * 0.5).sin_cos();
        Self::from_xyzw(
            (axis.x() * sin) as f32,
            (axis.y() * sin) as f32,
            (axis.z() * sin) as f32,
            cos as f32,
        )
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> f32 {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> f32 {
        self.y
    }

    #[inline]
    #[must_use]
    pub const fn z(self) -> f32 {
        self.z
    }

    #[inline]
    #[must_use]
    pub const fn w(self) -> f32 {
        self.w
    }

    /// Components as `[x, y, z, w]`
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f32 {
        math::length_squared(self)
    }

    #[inline]
    #[must_use]
    pub fn length(self) -> f32 {
        math::length(self)
    }

    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self {
        math::normalize(self)
    }

    pub fn try_normalize(self) -> Result<Self> {
        math::try_normalize(self)
    }

    /// Hamilton product `self * other`
    #[inline]
    #[must_use]
    pub fn multiply(self, other: Self) -> Self {
        math::multiply(self, other)
    }

    /// Pre-multiply a rotation of `angle` degrees around `axis`
    #[must_use]
    pub fn rotate(self, angle: f32, axis: Vector3) -> Self {
        math::rotate(self, angle, axis)
    }

    #[must_use]
    pub fn rotate_xyz(self, angle: f32, x: f32, y: f32, z: f32) -> Self {
        math::rotate_xyz(self, angle, x, y, z)
    }

    /// Tait-Bryan angles in degrees: `(pitch, yaw, roll)`
    #[must_use]
    pub fn axis_angles(self) -> Vector3 {
        math::axis_angles(self)
    }

    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        math::conjugate(self)
    }

    /// Apply this rotation to a vector (`q * v * q⁻¹`).
    ///
    /// Assumes unit length.
    #[must_use]
    pub fn rotate_vector(self, v: Vector3) -> Vector3 {
        let u = Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z));
        let w = f64::from(self.w);
        let t = u.cross(v) * 2.0;
        v + t * w + u.cross(t)
    }

    /// Returns true if no component is NaN or infinite
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        math::multiply(self, rhs)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    /// Same rotation, opposite hemisphere
    #[inline]
    fn neg(self) -> Self {
        Self::from_xyzw(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<Quaternion> for Quat {
    fn from(q: Quaternion) -> Self {
        math::to_glam(q)
    }
}

impl From<Quat> for Quaternion {
    fn from(q: Quat) -> Self {
        math::from_glam(q)
    }
}

impl TryFrom<[f32; 4]> for Quaternion {
    type Error = Error;

    fn try_from([x, y, z, w]: [f32; 4]) -> Result<Self> {
        Self::try_new(x, y, z, w)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.to_array();
        match f.precision() {
            Some(p) => write!(f, "({x:.p$}, {y:.p$}, {z:.p$}, {w:.p$})"),
            None => write!(f, "({x}, {y}, {z}, {w})"),
        }
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

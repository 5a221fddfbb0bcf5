//! Three-component double-precision vector.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Immutable 3D vector.
///
/// Every operation returns a new value. The associated functions double as
/// methods, so `a.dot(b)` and `Vector3::dot(a, b)` are the same call.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// All zeros
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// All ones
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Unit vector along +X
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit vector along +Y
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit vector along +Z
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new vector
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }

    #[inline]
    #[must_use]
    pub const fn z(self) -> f64 {
        self.z
    }

    /// Components as an array
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Componentwise sum
    #[allow(clippy::should_implement_trait)]
    #[inline]
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Componentwise difference
    #[inline]
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Multiply every component by `s`
    #[inline]
    #[must_use]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Dot product
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    #[must_use]
    pub fn length_squared(self) -> f64 {
        Self::dot(self, self)
    }

    /// Euclidean length.
    ///
    /// Components are scaled by the largest magnitude before squaring, so the
    /// result does not overflow for large finite vectors.
    #[inline]
    #[must_use]
    pub fn length(self) -> f64 {
        let max = self.max_abs();
        if max == 0.0 || !max.is_finite() {
            return self.length_squared().sqrt();
        }
        max * self.unscaled(max).length()
    }

    /// Unit-length copy of this vector.
    ///
    /// A zero vector yields NaN components; use [`Vector3::try_normalize`]
    /// when the input may be degenerate.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self {
        let v = self.unscaled(self.max_abs());
        Self::scale(v, 1.0 / v.length_squared().sqrt())
    }

    /// Unit-length copy, or an error for zero / non-finite vectors
    pub fn try_normalize(self) -> Result<Self> {
        if !self.is_finite() {
            tracing::debug!(v = ?self, "try_normalize: non-finite vector");
            return Err(Error::NonFinite("vector"));
        }
        if self.max_abs() == 0.0 {
            tracing::debug!("try_normalize: zero-length vector");
            return Err(Error::ZeroLength("vector"));
        }
        let unit = self.normalize();
        if !unit.is_finite() {
            return Err(Error::NonFinite("vector"));
        }
        Ok(unit)
    }

    /// Largest absolute component
    #[inline]
    fn max_abs(self) -> f64 {
        self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    /// Every component divided by `s`
    #[inline]
    fn unscaled(self, s: f64) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }

    /// Returns true if no component is NaN or infinite
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::subtract(self, rhs)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::scale(self, rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::new(f64::from(v.x), f64::from(v.y), f64::from(v.z))
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*}, {:.*})", p, self.x, p, self.y, p, self.z),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

/// Parses `"x,y,z"`, whitespace around components allowed.
impl FromStr for Vector3 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(',').map(str::trim);
        let mut next = |axis: &str| -> Result<f64> {
            let part = parts
                .next()
                .ok_or_else(|| Error::InvalidInput(format!("missing {axis} component in {s:?}")))?;
            part.parse()
                .map_err(|_| Error::InvalidInput(format!("bad {axis} component {part:?}")))
        };
        let (x, y, z) = (next("x")?, next("y")?, next("z")?);
        if parts.next().is_some() {
            return Err(Error::InvalidInput(format!(
                "expected three components in {s:?}"
            )));
        }
        Ok(Self::new(x, y, z))
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

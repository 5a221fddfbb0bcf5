//! Quaternion math.
//!
//! Stateless free functions over [`Quaternion`] and [`Vector3`]. Inputs are
//! never modified; every function returns a new value.
//!
//! Angles are in degrees. Degenerate inputs (zero-length quaternions, opposite
//! vectors in [`rotation_to`]) produce NaN rather than panicking; the `try_*`
//! variants report them as [`Error`]s instead.

use std::f64::consts::FRAC_PI_2;

use glam::Quat;

use crate::constants::{EPSILON, GIMBAL_LOCK_THRESHOLD};
use crate::error::{Error, Result};
use crate::quaternion::Quaternion;
use crate::vector::Vector3;

/// Sum of the squares of all four components
#[inline]
#[must_use]
pub fn length_squared(a: Quaternion) -> f32 {
    a.x() * a.x() + a.y() * a.y() + a.z() * a.z() + a.w() * a.w()
}

/// Euclidean length.
///
/// Components are scaled by the largest magnitude before squaring, so the
/// result does not overflow for large finite quaternions.
#[inline]
#[must_use]
pub fn length(a: Quaternion) -> f32 {
    let max = max_abs(a);
    if max == 0.0 || !max.is_finite() {
        return length_squared(a).sqrt();
    }
    max * length_squared(unscaled(a, max)).sqrt()
}

/// Scale `a` to unit length.
///
/// A zero quaternion yields NaN components.
#[inline]
#[must_use]
pub fn normalize(a: Quaternion) -> Quaternion {
    let a = unscaled(a, max_abs(a));
    unscaled(a, length_squared(a).sqrt())
}

/// Scale `a` to unit length, rejecting zero-length and non-finite input
pub fn try_normalize(a: Quaternion) -> Result<Quaternion> {
    if !a.is_finite() {
        tracing::debug!(?a, "try_normalize: non-finite quaternion");
        return Err(Error::NonFinite("quaternion"));
    }
    if max_abs(a) == 0.0 {
        tracing::debug!("try_normalize: zero-length quaternion");
        return Err(Error::ZeroLength("quaternion"));
    }
    let unit = normalize(a);
    if !unit.is_finite() {
        return Err(Error::NonFinite("quaternion"));
    }
    Ok(unit)
}

#[inline]
fn max_abs(a: Quaternion) -> f32 {
    a.x().abs().max(a.y().abs()).max(a.z().abs()).max(a.w().abs())
}

#[inline]
fn unscaled(a: Quaternion, s: f32) -> Quaternion {
    Quaternion::from_xyzw(a.x() / s, a.y() / s, a.z() / s, a.w() / s)
}

/// Hamilton product `a * b`.
///
/// Applying the result rotates by `b` first, then by `a`. The product of two
/// unit quaternions is unit length up to rounding, so it is not renormalized.
#[inline]
#[must_use]
pub fn multiply(a: Quaternion, b: Quaternion) -> Quaternion {
    let (ax, ay, az, aw) = (a.x(), a.y(), a.z(), a.w());
    let (bx, by, bz, bw) = (b.x(), b.y(), b.z(), b.w());

    let x = aw * bx + ax * bw + ay * bz - az * by;
    let y = aw * by + ay * bw + az * bx - ax * bz;
    let z = aw * bz + az * bw + ax * by - ay * bx;
    let w = aw * bw - ax * bx - ay * by - az * bz;

    Quaternion::from_xyzw(x, y, z, w)
}

/// Inverse rotation of a unit quaternion
#[inline]
#[must_use]
pub fn conjugate(a: Quaternion) -> Quaternion {
    Quaternion::from_xyzw(-a.x(), -a.y(), -a.z(), a.w())
}

/// Rotation from Tait-Bryan angles.
///
/// `pitch` turns around X, `yaw` around Y, `roll` around Z. The result is
/// `yaw * pitch * roll`, so roll applies first and yaw last.
#[must_use]
pub fn rotation(pitch: f32, yaw: f32, roll: f32) -> Quaternion {
    let qpitch = Quaternion::from_angle_axis(pitch, Vector3::UNIT_X);
    let qyaw = Quaternion::from_angle_axis(yaw, Vector3::UNIT_Y);
    let qroll = Quaternion::from_angle_axis(roll, Vector3::UNIT_Z);
    multiply(multiply(qyaw, qpitch), qroll)
}

/// Pre-multiply `a` by a rotation of `angle` degrees around `axis`
#[must_use]
pub fn rotate(a: Quaternion, angle: f32, axis: Vector3) -> Quaternion {
    multiply(Quaternion::from_angle_axis(angle, axis), a)
}

/// [`rotate`] with the axis given as components
#[must_use]
pub fn rotate_xyz(a: Quaternion, angle: f32, x: f32, y: f32, z: f32) -> Quaternion {
    multiply(Quaternion::from_angle_xyz(angle, x, y, z), a)
}

/// Shortest rotation taking the direction of `a` onto the direction of `b`.
///
/// Equal inputs, or parallel inputs pointing the same way, give the identity.
/// Anti-parallel inputs have no unique axis and produce NaN components; use
/// [`try_rotation_to`] to detect that case.
#[must_use]
pub fn rotation_to(a: Vector3, b: Vector3) -> Quaternion {
    if a == b {
        return Quaternion::IDENTITY;
    }
    let a = a.normalize();
    let b = b.normalize();
    let cos = a.dot(b).clamp(-1.0, 1.0);
    let axis = a.cross(b);
    if axis.length() < EPSILON {
        if cos > 0.0 {
            return Quaternion::IDENTITY;
        }
        tracing::debug!(?a, ?b, "rotation_to: anti-parallel vectors, axis is undefined");
    }
    Quaternion::from_degrees_axis(cos.acos().to_degrees(), axis)
}

/// Checked [`rotation_to`].
///
/// Fails on zero-length or non-finite inputs, and on (nearly) anti-parallel
/// inputs whose rotation axis is undefined.
pub fn try_rotation_to(a: Vector3, b: Vector3) -> Result<Quaternion> {
    let a = a.try_normalize()?;
    let b = b.try_normalize()?;
    if a == b {
        return Ok(Quaternion::IDENTITY);
    }
    let cos = a.dot(b).clamp(-1.0, 1.0);
    let axis = a.cross(b);
    if axis.length() < EPSILON {
        if cos > 0.0 {
            return Ok(Quaternion::IDENTITY);
        }
        tracing::debug!(?a, ?b, "try_rotation_to: rejecting anti-parallel vectors");
        return Err(Error::AntiParallel);
    }
    Ok(Quaternion::from_degrees_axis(cos.acos().to_degrees(), axis))
}

/// Pole test value `w·x − y·z` of `a`.
///
/// Half the sine of the pitch angle. [`axis_angles`] switches to its
/// gimbal-lock branch once the magnitude reaches
/// [`GIMBAL_LOCK_THRESHOLD`].
#[inline]
#[must_use]
pub fn gimbal_test(a: Quaternion) -> f64 {
    f64::from(a.w()) * f64::from(a.x()) - f64::from(a.y()) * f64::from(a.z())
}

/// Tait-Bryan angles of `a` in degrees, as `(pitch, yaw, roll)`.
///
/// Near the poles (pitch close to ±90°) roll and yaw are not independent;
/// roll is reported as 0 and the whole turn goes into yaw. Yaw is kept in
/// (-180, 180].
#[must_use]
pub fn axis_angles(a: Quaternion) -> Vector3 {
    let q0 = f64::from(a.w());
    let q1 = f64::from(a.z()); // roll
    let q2 = f64::from(a.x()); // pitch
    let q3 = f64::from(a.y()); // yaw

    let test = gimbal_test(a);

    let (roll, pitch, yaw) = if test.abs() < GIMBAL_LOCK_THRESHOLD {
        (
            (2.0 * (q0 * q1 + q2 * q3)).atan2(1.0 - 2.0 * (q1 * q1 + q2 * q2)),
            (2.0 * test).asin(),
            (2.0 * (q0 * q3 + q1 * q2)).atan2(1.0 - 2.0 * (q2 * q2 + q3 * q3)),
        )
    } else {
        let sign = if test < 0.0 { -1.0 } else { 1.0 };
        (0.0, sign * FRAC_PI_2, -sign * 2.0 * q1.atan2(q0))
    };

    let mut yaw = yaw.to_degrees();
    if yaw > 180.0 {
        yaw -= 360.0;
    } else if yaw <= -180.0 {
        yaw += 360.0;
    }

    Vector3::new(pitch.to_degrees(), yaw, roll.to_degrees())
}

/// Copy `a` into a `glam` quaternion
#[inline]
#[must_use]
pub fn to_glam(a: Quaternion) -> Quat {
    Quat::from_xyzw(a.x(), a.y(), a.z(), a.w())
}

/// Copy a `glam` quaternion, renormalizing it.
///
/// The input is not trusted to be unit length.
#[must_use]
pub fn from_glam(q: Quat) -> Quaternion {
    let [x, y, z, w] = q.to_array();
    Quaternion::new(x, y, z, w)
}

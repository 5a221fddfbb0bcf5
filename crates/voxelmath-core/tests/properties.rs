//! Algebraic properties of the vector and quaternion primitives, checked over
//! deterministic sample sets.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use voxelmath_core::{math, Quaternion, Vector3};

fn vectors() -> Vec<Vector3> {
    vec![
        Vector3::UNIT_X,
        Vector3::UNIT_Y,
        Vector3::UNIT_Z,
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(-4.5, 0.25, 8.0),
        Vector3::new(0.001, -1000.0, 7.0),
        Vector3::new(-3.0, -3.0, -3.0),
    ]
}

fn quaternions() -> Vec<Quaternion> {
    vec![
        Quaternion::IDENTITY,
        math::rotation(10.0, 20.0, 30.0),
        math::rotation(-45.0, 135.0, 5.0),
        Quaternion::from_angle_axis(200.0, Vector3::new(1.0, 1.0, 0.0)),
        Quaternion::new(0.3, -0.1, 0.9, 0.2),
    ]
}

#[test]
fn cross_is_anticommutative() {
    for a in vectors() {
        for b in vectors() {
            assert_eq!(a.cross(b), -b.cross(a), "{a} x {b}");
        }
    }
}

#[test]
fn dot_is_commutative() {
    for a in vectors() {
        for b in vectors() {
            assert_eq!(a.dot(b), b.dot(a), "{a} . {b}");
        }
    }
}

#[test]
fn cross_is_orthogonal_to_inputs() {
    for a in vectors() {
        for b in vectors() {
            let c = a.cross(b);
            let scale = a.length() * b.length() * c.length().max(1.0);
            assert_abs_diff_eq!(c.dot(a) / scale, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(c.dot(b) / scale, 0.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn normalize_yields_unit_length() {
    for q in quaternions() {
        let scaled = Quaternion::from_xyzw(q.x() * 3.0, q.y() * 3.0, q.z() * 3.0, q.w() * 3.0);
        assert_relative_eq!(math::length(math::normalize(scaled)), 1.0, epsilon = 1e-6);
    }
}

#[test]
fn multiply_is_associative() {
    let qs = quaternions();
    for &a in &qs {
        for &b in &qs {
            for &c in &qs {
                let left = math::multiply(math::multiply(a, b), c);
                let right = math::multiply(a, math::multiply(b, c));
                assert_abs_diff_eq!(left, right, epsilon = 1e-5);
            }
        }
    }
}

#[test]
fn multiply_preserves_unit_length() {
    let qs = quaternions();
    for &a in &qs {
        for &b in &qs {
            assert_relative_eq!(math::multiply(a, b).length(), 1.0, epsilon = 1e-5);
        }
    }
}

#[test]
fn rotation_to_self_is_identity() {
    for v in vectors() {
        assert_eq!(math::rotation_to(v, v), Quaternion::IDENTITY);
    }
}

#[test]
fn rotation_to_maps_direction() {
    for a in vectors() {
        for b in vectors() {
            let Ok(q) = math::try_rotation_to(a, b) else {
                continue;
            };
            let rotated = q.rotate_vector(a.normalize());
            assert_abs_diff_eq!(rotated, b.normalize(), epsilon = 1e-5);
            assert_eq!(q, math::rotation_to(a, b));
        }
    }
}

#[test]
fn euler_round_trip_away_from_poles() {
    for pitch in (-80..=80).step_by(20) {
        for yaw in (-170..=170).step_by(34) {
            for roll in (-170..=170).step_by(34) {
                #[allow(clippy::cast_precision_loss)]
                let (p, y, r) = (pitch as f32, yaw as f32, roll as f32);
                let angles = math::axis_angles(math::rotation(p, y, r));
                assert_abs_diff_eq!(
                    angles,
                    Vector3::new(f64::from(p), f64::from(y), f64::from(r)),
                    epsilon = 1e-2
                );
            }
        }
    }
}

#[test]
fn yaw_stays_in_half_open_range() {
    for yaw in (-720..=720).step_by(15) {
        #[allow(clippy::cast_precision_loss)]
        let q = math::rotation(0.0, yaw as f32, 0.0);
        let angle = math::axis_angles(q).y();
        assert!(angle > -180.0 && angle <= 180.0 + 1e-3, "yaw {yaw} -> {angle}");
    }
}

#[test]
fn rotation_matches_glam_euler() {
    for (pitch, yaw, roll) in [(10.0_f32, 20.0_f32, 30.0_f32), (-60.0, 100.0, -15.0)] {
        let ours = math::rotation(pitch, yaw, roll);
        let theirs = glam::Quat::from_euler(
            glam::EulerRot::YXZ,
            yaw.to_radians(),
            pitch.to_radians(),
            roll.to_radians(),
        );
        assert_abs_diff_eq!(ours, math::from_glam(theirs), epsilon = 1e-5);
    }
}

#[test]
fn rotate_vector_matches_glam() {
    for q in quaternions() {
        for v in vectors() {
            let ours = q.rotate_vector(v);
            let theirs = math::to_glam(q).as_dquat() * glam::DVec3::from(v);
            assert_abs_diff_eq!(ours, Vector3::from(theirs), epsilon = 1e-6 * v.length().max(1.0));
        }
    }
}

#[test]
fn scenarios() {
    assert_eq!(
        Vector3::new(1.0, 0.0, 0.0).cross(Vector3::new(0.0, 1.0, 0.0)),
        Vector3::new(0.0, 0.0, 1.0)
    );
    assert_eq!(math::rotation(0.0, 0.0, 0.0), Quaternion::IDENTITY);
    assert_eq!(math::axis_angles(Quaternion::IDENTITY), Vector3::new(0.0, 0.0, 0.0));
}

#[test]
fn values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<Vector3>();
    assert_send_sync::<Quaternion>();
}

#[test]
fn serde_round_trip() {
    let q = math::rotation(12.0, -34.0, 56.0);
    let bytes = bincode::serialize(&q).unwrap();
    let back: Quaternion = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, q);

    let v = Vector3::new(1.5, -2.5, 1e10);
    let bytes = bincode::serialize(&v).unwrap();
    assert_eq!(bincode::deserialize::<Vector3>(&bytes).unwrap(), v);
}

#[test]
fn pod_layout() {
    let q = Quaternion::from_xyzw(1.0, 2.0, 3.0, 4.0);
    let raw: [f32; 4] = bytemuck::cast(q);
    assert_eq!(raw, [1.0, 2.0, 3.0, 4.0]);

    let vs = [Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)];
    let flat: &[f64] = bytemuck::cast_slice(&vs);
    assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

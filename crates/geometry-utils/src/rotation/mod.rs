//! Rotation representations and conversions.
//!
//! Representations
//! - Axis-angle: axis (any nonzero length, normalized internally) and radians.
//! - Quaternion: `nalgebra::Quaternion`, whose `coords` are `(x, y, z, w)`.
//! - Matrix: `Matrix3<f64>`, orthogonal with determinant +1.
//! - Euler angles: `Vector3<f64>` interpreted through `EulerCfg`.
//!
//! Conversions compose: axis-angle → quaternion → matrix. All inputs are taken
//! by reference and never normalized in place.

mod euler;

pub use euler::{euler_angles_to_matrix, matrix_to_euler_angles, AxisOrder, EulerCfg};

use nalgebra::{Matrix3, Quaternion, Vector3};

/// Quaternion for a rotation of `theta` radians about `axis`.
///
/// `q = (sin(θ/2)·u, cos(θ/2))` with `u = axis / |axis|`.
pub fn axis_angle_to_quaternion(axis: &Vector3<f64>, theta: f64) -> Quaternion<f64> {
    let u = axis / axis.norm();
    let (s, c) = (theta / 2.0).sin_cos();
    Quaternion::new(c, s * u.x, s * u.y, s * u.z)
}

/// Rotation matrix of a quaternion; the quaternion is normalized first.
pub fn quaternion_to_matrix(q: &Quaternion<f64>) -> Matrix3<f64> {
    let q = q.coords / q.coords.norm();
    let (x, y, z, w) = (q[0], q[1], q[2], q[3]);
    Matrix3::new(
        1.0 - 2.0 * y * y - 2.0 * z * z,
        2.0 * x * y - 2.0 * z * w,
        2.0 * x * z + 2.0 * y * w,
        //
        2.0 * x * y + 2.0 * z * w,
        1.0 - 2.0 * x * x - 2.0 * z * z,
        2.0 * y * z - 2.0 * x * w,
        //
        2.0 * x * z - 2.0 * y * w,
        2.0 * y * z + 2.0 * x * w,
        1.0 - 2.0 * x * x - 2.0 * y * y,
    )
}

/// Rotation matrix for `theta` radians about `axis`.
#[inline]
pub fn axis_angle_to_matrix(axis: &Vector3<f64>, theta: f64) -> Matrix3<f64> {
    quaternion_to_matrix(&axis_angle_to_quaternion(axis, theta))
}

/// Rotate `v` about `axis` by `angle` radians.
#[inline]
pub fn rotate_vector(v: &Vector3<f64>, axis: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    axis_angle_to_matrix(axis, angle) * v
}

use nalgebra::{Matrix4, Vector3, Vector4, SVD};

use super::types::Plane;

/// Plane through three points.
///
/// Normal is `normalize((p1 - p0) × (p2 - p0))`, offset `d = -n·p0`.
/// Collinear (or coincident) points give `Plane::UNDEFINED`.
pub fn fit_plane_3_points(p0: &Vector3<f64>, p1: &Vector3<f64>, p2: &Vector3<f64>) -> Plane {
    let n = (p1 - p0).cross(&(p2 - p0));
    let norm = n.norm();
    if norm == 0.0 {
        return Plane::UNDEFINED;
    }
    let n = n / norm;
    Plane::new(n, -n.dot(p0))
}

/// Least-squares plane through a point set.
///
/// Algorithm
/// - Center the points on their mean and lift them to `(q, 1)`.
/// - Accumulate `A = Σ (q,1)(q,1)ᵀ` (4x4) and take the right singular vector
///   of the smallest singular value as the homogeneous plane.
/// - Scale to a unit normal, then shift the offset back to the original
///   (uncentered) frame: `d = d_c - n·mean`.
///
/// Fewer than three points, or a zero-length normal, give `Plane::UNDEFINED`.
pub fn fit_plane_3d(points: &[Vector3<f64>]) -> Plane {
    if points.len() < 3 {
        tracing::trace!(n = points.len(), "fit_plane_3d: too few points");
        return Plane::UNDEFINED;
    }
    let mean = points.iter().sum::<Vector3<f64>>() / points.len() as f64;
    let mut a = Matrix4::<f64>::zeros();
    for p in points {
        let q = p - mean;
        let h = Vector4::new(q.x, q.y, q.z, 1.0);
        a += h * h.transpose();
    }
    let svd = SVD::new(a, false, true);
    let Some(v_t) = svd.v_t else {
        return Plane::UNDEFINED;
    };
    let k = svd.singular_values.imin();
    let h = v_t.row(k).transpose();
    let normal = Vector3::new(h[0], h[1], h[2]);
    let norm = normal.norm();
    if norm == 0.0 {
        tracing::trace!("fit_plane_3d: zero-length normal");
        return Plane::UNDEFINED;
    }
    let normal = normal / norm;
    let d_centered = h[3] / norm;
    Plane::new(normal, d_centered - normal.dot(&mean))
}

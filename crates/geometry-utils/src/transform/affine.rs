//! 2D affine estimation from point correspondences (normalized DLT).
//!
//! Finds `H = [[a, b, c], [d, e, f], [0, 0, 1]]` with `to ≈ H·from`.
//!
//! Algorithm (Hartley & Zisserman, 2nd ed., §4.5)
//! - Condition both sets: translate each to its own centroid, scale both by
//!   `1 / max_std`, where `max_std` is the largest per-axis population standard
//!   deviation of the *from* set.
//! - Stack the conditioned rows `(x, y, x', y')` into an N×4 matrix; its two
//!   dominant right singular vectors span `{(u, M u)}`. With `B`/`C` the upper
//!   and lower 2x2 blocks of those vectors, `M = C·B⁺`.
//! - Conditioned points have zero mean, so the conditioned translation is 0.
//!   Undo conditioning with `C_to⁻¹ · H · C_from` and scale so `H[2,2] = 1`.

use nalgebra::{DMatrix, Matrix2, Matrix3, Vector2, SVD};

use crate::error::{GeometryError, GeometryResult};

/// Estimate the affine homography mapping `from_points` onto `to_points`.
///
/// Errors
/// - `CountMismatch` if the sequences differ in length.
/// - `DegenerateCorrespondences` if the from-points have zero spread.
/// - `SingularMatrix` if the decomposition or deconditioning fails.
pub fn compute_2d_affine_xform(
    from_points: &[Vector2<f64>],
    to_points: &[Vector2<f64>],
) -> GeometryResult<Matrix3<f64>> {
    if from_points.len() != to_points.len() {
        return Err(GeometryError::CountMismatch {
            from: from_points.len(),
            to: to_points.len(),
        });
    }
    let n = from_points.len();
    let from_mean = mean(from_points);
    let to_mean = mean(to_points);
    let max_std = max_axis_std(from_points, &from_mean);
    if !(max_std > 0.0 && max_std.is_finite()) {
        tracing::warn!(n, max_std, "affine xform: degenerate from-points");
        return Err(GeometryError::DegenerateCorrespondences);
    }
    let scale = 1.0 / max_std;
    tracing::debug!(n, scale, "affine xform: conditioning");

    let c_from = conditioner(scale, &from_mean);
    let c_to = conditioner(scale, &to_mean);

    let a = DMatrix::from_fn(n, 4, |r, c| match c {
        0 => (from_points[r].x - from_mean.x) * scale,
        1 => (from_points[r].y - from_mean.y) * scale,
        2 => (to_points[r].x - to_mean.x) * scale,
        _ => (to_points[r].y - to_mean.y) * scale,
    });
    let svd = SVD::new(a, false, true);
    let v_t = svd
        .v_t
        .as_ref()
        .ok_or(GeometryError::SingularMatrix("missing right singular vectors"))?;
    if v_t.nrows() < 2 {
        return Err(GeometryError::SingularMatrix("need two singular vectors"));
    }
    let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
    order.sort_by(|&i, &j| svd.singular_values[j].total_cmp(&svd.singular_values[i]));
    let (v1, v2) = (v_t.row(order[0]), v_t.row(order[1]));

    let b = Matrix2::new(v1[0], v2[0], v1[1], v2[1]);
    let c = Matrix2::new(v1[2], v2[2], v1[3], v2[3]);
    let b_pinv = b.pseudo_inverse(1e-12).map_err(GeometryError::SingularMatrix)?;
    let m = c * b_pinv;

    let mut h = Matrix3::identity();
    h.fixed_view_mut::<2, 2>(0, 0).copy_from(&m);

    let c_to_inv = c_to
        .try_inverse()
        .ok_or(GeometryError::SingularMatrix("to-point conditioner"))?;
    let h = c_to_inv * h * c_from;
    Ok(h / h[(2, 2)])
}

fn mean(points: &[Vector2<f64>]) -> Vector2<f64> {
    points.iter().sum::<Vector2<f64>>() / points.len() as f64
}

/// Largest per-axis population standard deviation (the homogeneous axis has 0).
fn max_axis_std(points: &[Vector2<f64>], mean: &Vector2<f64>) -> f64 {
    let var = points
        .iter()
        .map(|p| (p - mean).map(|e| e * e))
        .sum::<Vector2<f64>>()
        / points.len() as f64;
    var.x.sqrt().max(var.y.sqrt()).max(0.0)
}

fn conditioner(scale: f64, mean: &Vector2<f64>) -> Matrix3<f64> {
    Matrix3::new(
        scale, 0.0, -mean.x * scale, //
        0.0, scale, -mean.y * scale, //
        0.0, 0.0, 1.0,
    )
}

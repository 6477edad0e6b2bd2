//! Homogeneous transform construction.
//!
//! - `compute_transform_3d_plane_to_2d`: planar patch in 3D → pixel grid.
//! - `stack_rt`, `similarity_transform`: block assembly of homogeneous maps.
//! - `volume_corners`, `patch_corners_3d`: corner enumeration helpers.
//! - `compute_2d_affine_xform`: conditioned estimation from correspondences.

mod affine;

pub use affine::compute_2d_affine_xform;

use nalgebra::{DMatrix, DVector, Matrix3, Matrix3x4, Matrix4, Vector3};

/// Map from points on a planar patch in 3D to 2D pixel coordinates.
///
/// `plane_origin` is the 3D point at the image's upper-left corner;
/// `plane_x`/`plane_y` span the image axes (assumed perpendicular) and their
/// lengths map to `nx`/`ny` pixels. Returns `plane2img · [R | T]` with rows of
/// `R` = (x̂, ŷ, x̂×ŷ) and `T = -Rᵀ·plane_origin`. The third output row is zero,
/// so the map is only meaningful for points on the plane.
pub fn compute_transform_3d_plane_to_2d(
    plane_origin: &Vector3<f64>,
    plane_x: &Vector3<f64>,
    plane_y: &Vector3<f64>,
    nx: usize,
    ny: usize,
) -> Matrix3x4<f64> {
    let x_len = plane_x.norm();
    let y_len = plane_y.norm();
    let xu = plane_x / x_len;
    let yu = plane_y / y_len;
    let normal = xu.cross(&yu);
    let r = Matrix3::from_rows(&[xu.transpose(), yu.transpose(), normal.transpose()]);
    let t = -(r.transpose() * plane_origin);

    let plane2img = Matrix3::from_diagonal(&Vector3::new(nx as f64 / x_len, ny as f64 / y_len, 0.0));
    let mut rt = Matrix3x4::zeros();
    rt.fixed_view_mut::<3, 3>(0, 0).copy_from(&r);
    rt.set_column(3, &t);
    plane2img * rt
}

/// `[[R, T], [0, 0, 0, 1]]`.
pub fn stack_rt(r: &Matrix3<f64>, t: &Vector3<f64>) -> Matrix4<f64> {
    let mut m = Matrix4::identity();
    m.fixed_view_mut::<3, 3>(0, 0).copy_from(r);
    m.fixed_view_mut::<3, 1>(0, 3).copy_from(t);
    m
}

/// `(D+1)x(D+1)` similarity: `scale·I` with `translation` in the last column
/// and a unit bottom-right entry. `D` is the length of `translation`.
pub fn similarity_transform(scale: f64, translation: &DVector<f64>) -> DMatrix<f64> {
    let d = translation.len();
    let mut s = DMatrix::zeros(d + 1, d + 1);
    s.fill_diagonal(scale);
    s[(d, d)] = 1.0;
    s.view_mut((0, d), (d, 1)).copy_from(translation);
    s
}

/// The 8 corners `origin + extent ⊙ (x, y, z)` for bits in {0,1}³.
///
/// Order is deterministic: z outer, y middle, x inner.
pub fn volume_corners(origin: &Vector3<f64>, extent: &Vector3<f64>) -> [Vector3<f64>; 8] {
    let mut out = [Vector3::zeros(); 8];
    let mut n = 0;
    for zi in [0.0, 1.0] {
        for yi in [0.0, 1.0] {
            for xi in [0.0, 1.0] {
                out[n] = origin + extent.component_mul(&Vector3::new(xi, yi, zi));
                n += 1;
            }
        }
    }
    out
}

/// Four corners of the patch centred at `c` with half-axes `xv`, `yv`:
/// `[c-xv-yv, c-xv+yv, c+xv+yv, c+xv-yv]`.
pub fn patch_corners_3d(
    c: &Vector3<f64>,
    xv: &Vector3<f64>,
    yv: &Vector3<f64>,
) -> [Vector3<f64>; 4] {
    [c - xv - yv, c - xv + yv, c + xv + yv, c + xv - yv]
}

#[cfg(test)]
mod tests;

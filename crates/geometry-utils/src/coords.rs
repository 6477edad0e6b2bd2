//! Coordinate conversions and plane-ray intersection.
//!
//! Conventions
//! - Spherical: x-east, y-north, z-up. Azimuth in radians east of north,
//!   elevation above the horizontal plane.
//! - Homogeneous: the last coordinate is the scale; |scale| < 1e-6 is a point
//!   at infinity and cannot be converted back.

use nalgebra::{DVector, SVector, Vector2, Vector3, Vector4};

use crate::cfg::HOMOGENEOUS_EPS;
use crate::error::{GeometryError, GeometryResult};
use crate::plane::Plane;

/// Unit direction for `(azimuth, elevation)`.
#[inline]
pub fn spherical_to_euclidean(azimuth: f64, elevation: f64) -> Vector3<f64> {
    let (sa, ca) = azimuth.sin_cos();
    let (se, ce) = elevation.sin_cos();
    Vector3::new(sa * ce, ca * ce, se)
}

/// `(azimuth, elevation)` of a unit direction.
///
/// Exact inverse of `spherical_to_euclidean` for elevation in [-π/2, π/2] and
/// azimuth in (-π, π]. Non-unit input is not renormalized.
#[inline]
pub fn euclidean_to_spherical(v: &Vector3<f64>) -> (f64, f64) {
    (v.x.atan2(v.y), v.z.asin())
}

/// `v / |v|`. A zero vector yields NaN components.
#[inline]
pub fn unitize<const D: usize>(v: &SVector<f64, D>) -> SVector<f64, D> {
    v / v.dot(v).sqrt()
}

/// Append a unit scale coordinate.
pub fn homogeneous(pt: &DVector<f64>) -> DVector<f64> {
    pt.push(1.0)
}

/// Divide all but the last coordinate by the last one.
///
/// Errors with `ConversionUndefined` when `|w| < 1e-6` or the input is empty.
pub fn nonhomogeneous(pt_homg: &DVector<f64>) -> GeometryResult<DVector<f64>> {
    let n = pt_homg.len();
    if n == 0 {
        return Err(GeometryError::ConversionUndefined { w: f64::NAN });
    }
    let w = pt_homg[n - 1];
    if w.abs() < HOMOGENEOUS_EPS {
        return Err(GeometryError::ConversionUndefined { w });
    }
    Ok(pt_homg.rows(0, n - 1) / w)
}

/// `nonhomogeneous` for 2D points.
pub fn nonhomogeneous_2d(pt_homg: &Vector3<f64>) -> GeometryResult<Vector2<f64>> {
    check_scale(pt_homg.z)?;
    Ok(Vector2::new(pt_homg.x, pt_homg.y) / pt_homg.z)
}

/// `nonhomogeneous` for 3D points.
pub fn nonhomogeneous_3d(pt_homg: &Vector4<f64>) -> GeometryResult<Vector3<f64>> {
    check_scale(pt_homg.w)?;
    Ok(pt_homg.xyz() / pt_homg.w)
}

#[inline]
fn check_scale(w: f64) -> GeometryResult<()> {
    if w.abs() < HOMOGENEOUS_EPS {
        Err(GeometryError::ConversionUndefined { w })
    } else {
        Ok(())
    }
}

/// Intersection of a plane with the ray `origin + t·direction`.
///
/// The origin is lifted with scale 1 and the direction with scale 0, so
/// `t = -(plane·origin_h) / (plane·direction_h)`. A direction parallel to the
/// plane divides by ~0 and yields non-finite coordinates.
pub fn intersect_plane_ray(
    plane: &Plane,
    origin: &Vector3<f64>,
    direction: &Vector3<f64>,
) -> Vector3<f64> {
    let t = ray_parameter(plane, &origin.push(1.0), &direction.push(0.0));
    origin + direction * t
}

/// `intersect_plane_ray` for inputs already in homogeneous form.
pub fn intersect_plane_ray_homogeneous(
    plane: &Plane,
    origin_h: &Vector4<f64>,
    direction_h: &Vector4<f64>,
) -> Vector4<f64> {
    let t = ray_parameter(plane, origin_h, direction_h);
    origin_h + direction_h * t
}

#[inline]
fn ray_parameter(plane: &Plane, origin_h: &Vector4<f64>, direction_h: &Vector4<f64>) -> f64 {
    let p = plane.coefficients();
    -p.dot(origin_h) / p.dot(direction_h)
}

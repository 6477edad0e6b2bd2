//! Plane value type and RANSAC configuration.

use std::fmt;

use nalgebra::{Vector3, Vector4};

/// Plane `n · x + d = 0` with `n` unit-length by convention.
///
/// Invariants:
/// - Fitting routines return unit normals or the `UNDEFINED` sentinel.
/// - `new` does not normalize; callers passing raw coefficients keep their
///   scaling (relevant for `signed_distance`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f64>,
    pub d: f64,
}

impl Plane {
    /// Ill-defined plane: zero normal and infinite offset.
    pub const UNDEFINED: Plane = Plane {
        normal: Vector3::new(0.0, 0.0, 0.0),
        d: f64::INFINITY,
    };

    #[inline]
    pub fn new(normal: Vector3<f64>, d: f64) -> Self {
        Self { normal, d }
    }

    /// Build from homogeneous coefficients `(a, b, c, d)`.
    #[inline]
    pub fn from_coefficients(v: Vector4<f64>) -> Self {
        Self {
            normal: Vector3::new(v.x, v.y, v.z),
            d: v.w,
        }
    }

    /// Coefficients `(a, b, c, d)`.
    #[inline]
    pub fn coefficients(&self) -> Vector4<f64> {
        Vector4::new(self.normal.x, self.normal.y, self.normal.z, self.d)
    }

    /// True for the degenerate sentinel (zero normal or non-finite offset).
    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.normal == Vector3::zeros() || !self.d.is_finite()
    }

    /// Homogeneous dot product `n·p + d`; a signed distance for unit normals.
    #[inline]
    pub fn signed_distance(&self, p: &Vector3<f64>) -> f64 {
        self.normal.dot(p) + self.d
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plane({}x + {}y + {}z + {} = 0)",
            self.normal.x, self.normal.y, self.normal.z, self.d
        )
    }
}

/// RANSAC plane-fit configuration.
#[derive(Clone, Copy, Debug)]
pub struct RansacCfg {
    /// A point is an inlier when `|n·p + d| < inlier_thresh`.
    pub inlier_thresh: f64,
    /// Upper bound on random 3-point draws.
    pub max_draws: usize,
}

impl Default for RansacCfg {
    fn default() -> Self {
        Self {
            inlier_thresh: 1.0,
            max_draws: 100,
        }
    }
}

//! Plane fitting in 3D (exact, least-squares, RANSAC).
//!
//! Purpose
//! - Fit `ax + by + cz + d = 0` planes with unit normals to point sets.
//! - Keep degenerate input explicit: collinear or too-small point sets yield
//!   `Plane::UNDEFINED` (normal `0`, offset `+inf`) instead of an error.
//!
//! Layering
//! - `fit_plane_3_points` (exact) and `fit_plane_3d` (SVD least squares) are
//!   independent; `fit_plane_3d_ransac` scores exact fits and refits the best
//!   inlier set with the least-squares fit.

mod fit;
mod ransac;
mod types;

pub use fit::{fit_plane_3_points, fit_plane_3d};
pub use ransac::{fit_plane_3d_ransac, fit_plane_3d_ransac_seeded};
pub use types::{Plane, RansacCfg};

//! RANSAC plane fit with an injected random source.
//!
//! Known quality issue: the three sample indices are drawn with replacement,
//! so a draw may repeat an index and produce a wasted (undefined) hypothesis.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::fit::{fit_plane_3_points, fit_plane_3d};
use super::types::{Plane, RansacCfg};

/// Robust plane fit. Returns the refit plane and an inlier mask aligned with
/// `points`.
///
/// Notes
/// - Stops early once a hypothesis classifies every point as an inlier.
/// - If no hypothesis gathers any inlier (e.g. a pathologically small
///   threshold or all-degenerate draws) the mask is all-false and the plane is
///   `Plane::UNDEFINED`. Checking for this is the caller's responsibility.
pub fn fit_plane_3d_ransac<R: Rng + ?Sized>(
    points: &[Vector3<f64>],
    cfg: RansacCfg,
    rng: &mut R,
) -> (Plane, Vec<bool>) {
    let n = points.len();
    let mut best_inliers = vec![false; n];
    if n == 0 {
        return (Plane::UNDEFINED, best_inliers);
    }
    let mut best_count = 0usize;
    let mut draws = 0usize;
    let mut exhaustive = false;
    for draw in 0..cfg.max_draws {
        draws = draw + 1;
        let i0 = rng.gen_range(0..n);
        let i1 = rng.gen_range(0..n);
        let i2 = rng.gen_range(0..n);
        let hypothesis = fit_plane_3_points(&points[i0], &points[i1], &points[i2]);
        let inliers: Vec<bool> = points
            .iter()
            .map(|p| hypothesis.signed_distance(p).abs() < cfg.inlier_thresh)
            .collect();
        let count = inliers.iter().filter(|&&b| b).count();
        if count > best_count {
            tracing::trace!(draw, count, "ransac: improved hypothesis");
            best_inliers = inliers;
            best_count = count;
        }
        if count == n {
            exhaustive = true;
            break;
        }
    }
    tracing::debug!(
        draws,
        best_count,
        total = n,
        early_exit = exhaustive,
        "ransac plane fit"
    );
    let good: Vec<Vector3<f64>> = points
        .iter()
        .zip(&best_inliers)
        .filter_map(|(p, &keep)| keep.then_some(*p))
        .collect();
    (fit_plane_3d(&good), best_inliers)
}

/// `fit_plane_3d_ransac` with a `StdRng` seeded from `seed`.
pub fn fit_plane_3d_ransac_seeded(
    points: &[Vector3<f64>],
    cfg: RansacCfg,
    seed: u64,
) -> (Plane, Vec<bool>) {
    let mut rng = StdRng::seed_from_u64(seed);
    fit_plane_3d_ransac(points, cfg, &mut rng)
}

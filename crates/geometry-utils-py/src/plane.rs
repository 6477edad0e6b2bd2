//! Plane-fitting bindings.

use crate::common::{plane_tuple, vec3, Py3, Py4};
use pyo3::prelude::*;
use geometry_utils::plane::{
    fit_plane_3_points, fit_plane_3d, fit_plane_3d_ransac_seeded, RansacCfg,
};

#[pyfunction]
#[pyo3(name = "fit_plane_3_points")]
pub fn fit_plane_3_points_py(p0: Py3, p1: Py3, p2: Py3) -> Py4 {
    plane_tuple(&fit_plane_3_points(&vec3(p0), &vec3(p1), &vec3(p2)))
}

#[pyfunction]
#[pyo3(name = "fit_plane_3d")]
pub fn fit_plane_3d_py(points: Vec<Py3>) -> Py4 {
    let pts: Vec<_> = points.into_iter().map(vec3).collect();
    plane_tuple(&fit_plane_3d(&pts))
}

/// RANSAC fit; returns `(plane, inlier_mask)`.
#[pyfunction]
#[pyo3(signature = (points, inlier_thresh=1.0, max_draws=100, seed=0))]
#[pyo3(name = "fit_plane_3d_ransac")]
pub fn fit_plane_3d_ransac_py(
    points: Vec<Py3>,
    inlier_thresh: f64,
    max_draws: usize,
    seed: u64,
) -> (Py4, Vec<bool>) {
    let pts: Vec<_> = points.into_iter().map(vec3).collect();
    let cfg = RansacCfg {
        inlier_thresh,
        max_draws,
    };
    let (plane, mask) = fit_plane_3d_ransac_seeded(&pts, cfg, seed);
    (plane_tuple(&plane), mask)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fit_plane_3_points_py, m)?)?;
    m.add_function(wrap_pyfunction!(fit_plane_3d_py, m)?)?;
    m.add_function(wrap_pyfunction!(fit_plane_3d_ransac_py, m)?)?;
    Ok(())
}

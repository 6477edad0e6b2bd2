//! Rotation, coordinate and transform bindings.

use crate::common::{map_geometry_err, tuple3, vec2, vec3, Py3};
use pyo3::prelude::*;
use geometry_utils::coords::{euclidean_to_spherical, spherical_to_euclidean};
use geometry_utils::rotation::rotate_vector;
use geometry_utils::transform::compute_2d_affine_xform;

#[pyfunction]
#[pyo3(name = "rotate_vector")]
pub fn rotate_vector_py(v: Py3, axis: Py3, angle: f64) -> Py3 {
    tuple3(&rotate_vector(&vec3(v), &vec3(axis), angle))
}

#[pyfunction]
#[pyo3(name = "spherical_to_euclidean")]
pub fn spherical_to_euclidean_py(azimuth: f64, elevation: f64) -> Py3 {
    tuple3(&spherical_to_euclidean(azimuth, elevation))
}

#[pyfunction]
#[pyo3(name = "euclidean_to_spherical")]
pub fn euclidean_to_spherical_py(v: Py3) -> (f64, f64) {
    euclidean_to_spherical(&vec3(v))
}

/// Affine homography as three row tuples.
#[pyfunction]
#[pyo3(name = "compute_2d_affine_xform")]
pub fn compute_2d_affine_xform_py(
    from_points: Vec<(f64, f64)>,
    to_points: Vec<(f64, f64)>,
) -> PyResult<[Py3; 3]> {
    let from: Vec<_> = from_points.into_iter().map(vec2).collect();
    let to: Vec<_> = to_points.into_iter().map(vec2).collect();
    let h = compute_2d_affine_xform(&from, &to).map_err(map_geometry_err)?;
    Ok([
        (h[(0, 0)], h[(0, 1)], h[(0, 2)]),
        (h[(1, 0)], h[(1, 1)], h[(1, 2)]),
        (h[(2, 0)], h[(2, 1)], h[(2, 2)]),
    ])
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(rotate_vector_py, m)?)?;
    m.add_function(wrap_pyfunction!(spherical_to_euclidean_py, m)?)?;
    m.add_function(wrap_pyfunction!(euclidean_to_spherical_py, m)?)?;
    m.add_function(wrap_pyfunction!(compute_2d_affine_xform_py, m)?)?;
    Ok(())
}

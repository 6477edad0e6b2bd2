use nalgebra::{Vector2, Vector3};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use geometry_utils::{GeometryError, Plane};

pub type Py3 = (f64, f64, f64);
pub type Py4 = (f64, f64, f64, f64);

#[inline]
pub fn vec3(p: Py3) -> Vector3<f64> {
    Vector3::new(p.0, p.1, p.2)
}

#[inline]
pub fn vec2(p: (f64, f64)) -> Vector2<f64> {
    Vector2::new(p.0, p.1)
}

#[inline]
pub fn tuple3(v: &Vector3<f64>) -> Py3 {
    (v.x, v.y, v.z)
}

pub fn plane_tuple(plane: &Plane) -> Py4 {
    let c = plane.coefficients();
    (c.x, c.y, c.z, c.w)
}

pub fn map_geometry_err(err: GeometryError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

//! PyO3 bindings for selected `geometry_utils` functions.
//!
//! Notes
//! - Keep bindings thin; points cross the boundary as plain tuples and planes
//!   as `(a, b, c, d)`.
//! - The undefined plane comes back as `(0, 0, 0, inf)`, matching the Rust
//!   sentinel.

use pyo3::prelude::*;

mod common;
mod geom;
mod plane;

#[pymodule]
fn geometry_utils_native(_py: Python, m: &PyModule) -> PyResult<()> {
    plane::register(m)?;
    geom::register(m)?;
    Ok(())
}
